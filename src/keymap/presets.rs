//! Preset keymaps: Standard and Vim
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc, PgUp/PgDn for swipes
    #[default]
    Standard,
    /// hjkl navigation, Shift+K / Shift+J for swipes
    Vim,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
        }
    }
}

/// Bindings shared by every preset
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("space", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("x", Action::CloseApp),
        KeyBinding::new("+", Action::BrightnessUp),
        KeyBinding::new("-", Action::BrightnessDown),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
    ]
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("pageup", Action::SwipeUp),
        KeyBinding::new("shift+up", Action::SwipeUp),
        KeyBinding::new("pagedown", Action::SwipeDown),
        KeyBinding::new("shift+down", Action::SwipeDown),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
    ];
    bindings.extend(common_bindings());
    bindings
}

/// Vim-style keyboard bindings (hjkl navigation)
fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("shift+k", Action::SwipeUp),
        KeyBinding::new("pageup", Action::SwipeUp),
        KeyBinding::new("shift+j", Action::SwipeDown),
        KeyBinding::new("pagedown", Action::SwipeDown),
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
    ];
    bindings.extend(common_bindings());
    bindings
}
