// Keyboard input handling
//
// Raw key events are mapped to movement actions through a rebindable
// configuration. Once per tick the held actions are folded into a control
// vector for the player body.
//
// - `action`: movement actions and default key bindings
// - `config`: key-to-action bindings and remapping
// - `manager`: held-action tracking and control vector sampling

pub mod action;
pub mod config;
pub mod manager;

pub use config::InputConfig;
pub use manager::InputManager;
