//! Shared test utilities for the integration tests.
//!
//! Provides drag helpers that drive a `ScreenMachine` through its touch and
//! mouse entry points the way a real pointer would, plus `TestEnv` for an
//! isolated config directory.

#![allow(dead_code)]

use peekphone::config::Config;
use peekphone::state::{ScreenMachine, ScrollLock, Transition};
use std::path::PathBuf;
use tempfile::TempDir;

/// Finger drag from `from` to `to` in `steps` moves, then lift.
pub fn touch_drag<L: ScrollLock>(
    machine: &mut ScreenMachine<L>,
    from: f32,
    to: f32,
    steps: u32,
) -> Vec<Transition> {
    machine.on_pointer_down(from);
    let transitions = moves(from, to, steps)
        .filter_map(|y| machine.on_pointer_move(y))
        .collect();
    machine.on_pointer_up();
    transitions
}

/// Mouse drag from `from` to `to` in `steps` moves, then release.
pub fn mouse_drag<L: ScrollLock>(
    machine: &mut ScreenMachine<L>,
    from: f32,
    to: f32,
    steps: u32,
) -> Vec<Transition> {
    machine.on_mouse_down(from);
    let transitions = moves(from, to, steps)
        .filter_map(|y| machine.on_mouse_move(y))
        .collect();
    machine.on_mouse_up();
    transitions
}

#[allow(clippy::cast_precision_loss)]
fn moves(from: f32, to: f32, steps: u32) -> impl Iterator<Item = f32> {
    let steps = steps.max(1);
    (1..=steps).map(move |i| from + (to - from) * i as f32 / steps as f32)
}

/// An isolated config location, cleaned up on drop.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("peekphone").join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn save(&self, config: &Config) {
        config.save(&self.config_path).expect("Failed to save config");
    }

    pub fn load(&self) -> Config {
        Config::load_or_create(&self.config_path).expect("Failed to load config")
    }

    pub fn write_raw(&self, content: &str) {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, content).expect("Failed to write config");
    }
}
