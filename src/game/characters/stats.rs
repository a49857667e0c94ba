// Character stats

use crate::core::math::Rect;

/// Movement tuning and spawn placement for the player character
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    /// Speed along the active axis (units/second)
    pub run_speed: f32,
    /// Bounding rectangle at spawn; its size is the drawn sprite size
    pub spawn: Rect,
}

pub const BASE_STATS: CharacterStats = CharacterStats {
    run_speed: 80.0,
    spawn: Rect::new(-64.0, -64.0, 64.0, 64.0),
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}
