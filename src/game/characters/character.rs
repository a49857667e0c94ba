// Player character: a physics body plus its animation

use super::animation::AnimationController;
use super::stats::CharacterStats;
use crate::engine::assets::{SheetError, SpriteSheetIndex};
use crate::engine::physics::PhysicsBody;
use crate::engine::renderer::RenderTarget;
use glam::Vec2;

/// The player-controlled character
///
/// Owned by the frame loop; mutated once per tick.
#[derive(Debug, Clone)]
pub struct Character {
    pub body: PhysicsBody,
    pub animation: AnimationController,
}

impl Character {
    /// Create a character at its spawn rectangle
    pub fn new(
        stats: &CharacterStats,
        sheet: &SpriteSheetIndex,
        frame_rate: f32,
    ) -> Result<Self, SheetError> {
        Ok(Self {
            body: PhysicsBody::new(stats.spawn, stats.run_speed),
            animation: AnimationController::new(sheet, frame_rate)?,
        })
    }

    /// Run one tick: movement first, then animation
    pub fn update(&mut self, dt: f32, control: Vec2) {
        self.body.update(dt, control);
        self.animation.update(dt, &self.body);
    }

    /// Queue the character's sprite
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        self.animation.draw(target, &self.body);
    }
}
