// Character system
//
// - Character: body + animation, updated once per tick
// - Stats: run speed and spawn placement
// - State: Idle/Running derived from velocity
// - Animation: time-based frame selection from sheet clips

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

pub use animation::DEFAULT_FRAME_RATE;
pub use character::Character;
pub use stats::CharacterStats;
