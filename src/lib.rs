//! PeekPhone - a gesture-driven phone screen for the terminal
//!
//! The core is `state::ScreenMachine`, a small state machine that turns
//! vertical drags and discrete actions into lock/home/control-center/app
//! transitions. Everything else (the toy apps, the ratatui components and
//! the headless script runner) sits on top of it.

pub mod app;
pub mod apps;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod simulate;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
pub use state::{ScreenMachine, ScreenMode};
