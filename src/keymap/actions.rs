//! Action enum for all keyboard-triggered actions
//!
//! These are the semantic actions the phone understands from the keyboard.
//! Swipe actions are replayed through the touch gesture path so they obey
//! the same thresholds and guards as a real drag.

use serde::{Deserialize, Serialize};

/// All possible keyboard actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Gestures ============
    /// Synthetic upward swipe (unlock, close control center)
    SwipeUp,
    /// Synthetic downward swipe (open control center)
    SwipeDown,

    // ============ Navigation ============
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Activate the selected icon, tile or button
    Confirm,
    /// Leave the current app or text field
    Cancel,

    // ============ Phone ============
    /// Close the app on top
    CloseApp,
    BrightnessUp,
    BrightnessDown,

    // ============ Global ============
    Quit,
    Help,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::SwipeUp => "Swipe up",
            Action::SwipeDown => "Swipe down",
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Confirm => "Open / toggle selection",
            Action::Cancel => "Back",
            Action::CloseApp => "Close app",
            Action::BrightnessUp => "Brightness up",
            Action::BrightnessDown => "Brightness down",
            Action::Quit => "Quit",
            Action::Help => "Show help",
        }
    }

    /// Get the category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::SwipeUp | Action::SwipeDown => "Gestures",
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Confirm
            | Action::Cancel => "Navigation",
            Action::CloseApp | Action::BrightnessUp | Action::BrightnessDown => "Phone",
            Action::Quit | Action::Help => "Global",
        }
    }
}
