// Input manager - held-action tracking for the local player

use super::action::{Action, InputSource};
use super::config::InputConfig;
use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks which movement actions are held
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    pressed: HashSet<Action>,
}

impl InputManager {
    /// Create a new input manager with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            pressed: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_key(key_code, event.state);
        }
    }

    /// Apply a key state change through the bindings
    pub fn handle_key(&mut self, key_code: KeyCode, state: ElementState) {
        if let Some(action) = self.config.get_action(InputSource::key(key_code)) {
            match state {
                ElementState::Pressed => self.press(action),
                ElementState::Released => self.release(action),
            }
        }
    }

    pub fn press(&mut self, action: Action) {
        self.pressed.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Sample the held directions as a control vector (y-up)
    ///
    /// Opposite directions cancel, so each component is -1, 0 or 1.
    pub fn control(&self) -> Vec2 {
        let mut control = Vec2::ZERO;
        if self.is_pressed(Action::MoveLeft) {
            control.x -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            control.x += 1.0;
        }
        if self.is_pressed(Action::MoveUp) {
            control.y += 1.0;
        }
        if self.is_pressed(Action::MoveDown) {
            control.y -= 1.0;
        }
        control
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}
