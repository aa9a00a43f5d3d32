use crate::keymap::Action;
use crate::state::{AppId, ControlSwitch, ControlToggleSet, ScreenMode};
use crate::styles::Wallpaper;
use anyhow::Result;
use chrono::{DateTime, Local};
use ratatui::prelude::*;

/// Action that a component can return after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    /// No action needed
    None,
    /// Selection or other local state changed
    Update,
    /// Open an app from the home screen
    OpenApp(AppId),
    /// Flip a control center switch
    Toggle(ControlSwitch),
    /// Set brightness to an absolute value (clamped by the machine)
    SetBrightness(i32),
    /// Dismiss the app on top
    CloseApp,
}

/// Snapshot of the phone state a screen needs to draw itself
#[derive(Debug, Clone, Copy)]
pub struct PhoneView<'a> {
    pub mode: &'a ScreenMode,
    pub controls: &'a ControlToggleSet,
    pub now: DateTime<Local>,
    pub wallpaper: Wallpaper,
}

/// Trait for the full-screen phone components
///
/// Components are self-contained UI elements that:
/// - Manage their own selection state
/// - Record clickable regions while rendering
/// - Return actions for the app to apply to the state machine
pub trait Component {
    /// Render the component to the given area
    fn render(&mut self, frame: &mut Frame, area: Rect, view: &PhoneView) -> Result<()>;

    /// Handle a keyboard action
    fn handle_action(&mut self, _action: Action, _view: &PhoneView) -> ComponentAction {
        ComponentAction::None
    }

    /// Handle a tap at a terminal cell, using the regions from the last render
    fn handle_click(&mut self, _column: u16, _row: u16) -> ComponentAction {
        ComponentAction::None
    }
}
