// Kinematic movement for the arena
//
// Bodies move on a single axis per tick and never resolve against the grid.

pub mod body;

pub use body::PhysicsBody;
