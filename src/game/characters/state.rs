// Character animation state

use glam::Vec2;

/// Movement state driving clip selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    /// Standing still
    #[default]
    Idle,
    /// Moving along any axis
    Running,
}

impl AnimState {
    /// Derive the state from a body's velocity
    pub fn from_velocity(velocity: Vec2) -> Self {
        if velocity.length_squared() > 0.0 {
            Self::Running
        } else {
            Self::Idle
        }
    }

    /// Name of the sheet clip played in this state
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Run",
        }
    }
}
