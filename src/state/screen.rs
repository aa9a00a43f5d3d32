//! Top-level screen mode of the phone widget.
//!
//! This module provides a single enum for the visible screen, ensuring
//! that exactly one mode is active at a time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a toy app, e.g. `"Notes"` or `"Weather"`.
///
/// Compared case-sensitively; the registry decides what view an id maps to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Create an app id from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AppId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for AppId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AppId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The mutually exclusive top-level visual state of the phone.
///
/// Using one tagged value instead of separate `locked` / `control_center_open`
/// / `active_app` flags makes states like "locked with an app open"
/// unrepresentable.
///
/// # Example
///
/// ```
/// use peekphone::state::{AppId, ScreenMode};
///
/// let mode = ScreenMode::AppOverlay(AppId::new("Notes"));
/// assert_eq!(mode.active_app().map(AppId::as_str), Some("Notes"));
/// assert!(!mode.is_locked());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "app", rename_all = "snake_case")]
pub enum ScreenMode {
    /// Lock screen; the only way out is an upward swipe.
    #[default]
    Locked,
    /// Home screen with the app grid and dock.
    Home,
    /// Control center pulled down over the home screen.
    ControlCenter,
    /// An app is shown full-screen on top of the home screen.
    AppOverlay(AppId),
}

impl ScreenMode {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }

    pub fn is_control_center(&self) -> bool {
        matches!(self, Self::ControlCenter)
    }

    /// Get the app shown on top, if any.
    pub fn active_app(&self) -> Option<&AppId> {
        if let Self::AppOverlay(app) = self {
            Some(app)
        } else {
            None
        }
    }

    /// Short label used in logs, the footer and the `simulate` output.
    pub fn label(&self) -> String {
        match self {
            Self::Locked => "Locked".to_string(),
            Self::Home => "Home".to_string(),
            Self::ControlCenter => "ControlCenter".to_string(),
            Self::AppOverlay(app) => format!("AppOverlay({})", app),
        }
    }
}

impl fmt::Display for ScreenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_locked() {
        assert_eq!(ScreenMode::default(), ScreenMode::Locked);
    }

    #[test]
    fn test_label() {
        assert_eq!(ScreenMode::Home.label(), "Home");
        assert_eq!(
            ScreenMode::AppOverlay(AppId::new("Safari")).to_string(),
            "AppOverlay(Safari)"
        );
    }

    #[test]
    fn test_app_id_is_case_sensitive() {
        assert_ne!(AppId::new("notes"), AppId::new("Notes"));
        assert_eq!(AppId::new("Notes"), "Notes");
    }
}
