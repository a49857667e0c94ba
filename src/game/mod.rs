// Game layer: arena, characters, startup configuration and per-tick state

pub mod arena;
pub mod characters;
pub mod config;
pub mod world;

pub use config::GameConfig;
pub use world::GameWorld;
