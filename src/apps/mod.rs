//! Toy apps shown on top of the home screen.
//!
//! Each app owns its state and renders itself into the app overlay. Apps are
//! created on first open and kept in the registry afterwards, so closing an
//! app only hides it: a half-typed note or dialed number is still there next
//! time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                 AppRegistry                      │
//! │   AppId ──► Box<dyn PhoneApp>  (lazy, retained)  │
//! └──────────────────────────────────────────────────┘
//!              │ render(frame, area, ctx)
//!              │ handle_key / handle_click ──► AppAction
//!              ▼
//! ┌──────────────────────────────────────────────────┐
//! │ App loop applies AppAction to the ScreenMachine  │
//! │ (close, open another app) or to its own settings │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod about;
pub mod calendar;
pub mod notes;
pub mod phone;
pub mod placeholder;
pub mod safari;
pub mod settings;
pub mod weather;

use crate::keymap::Action;
use crate::state::AppId;
use crate::styles::Wallpaper;
use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

pub use about::AboutApp;
pub use calendar::CalendarApp;
pub use notes::NotesApp;
pub use phone::PhoneApp as DialerApp;
pub use placeholder::PlaceholderApp;
pub use safari::SafariApp;
pub use settings::SettingsApp;
pub use weather::WeatherApp;

/// An icon on the home screen or dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppIcon {
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: Color,
}

const fn icon(name: &'static str, glyph: &'static str, color: Color) -> AppIcon {
    AppIcon { name, glyph, color }
}

/// Icons in the home screen grid, row by row.
pub static HOME_APPS: [AppIcon; 8] = [
    icon("Messages", "\u{1F4AC}", Color::Rgb(52, 199, 89)),
    icon("Calendar", "\u{1F4C5}", Color::Rgb(255, 149, 0)),
    icon("Photos", "\u{1F5BC}", Color::Rgb(255, 45, 85)),
    icon("Camera", "\u{1F4F7}", Color::Rgb(88, 86, 214)),
    icon("Settings", "\u{2699}", Color::Rgb(142, 142, 147)),
    icon("About", "\u{2139}", Color::Rgb(0, 122, 255)),
    icon("Notes", "\u{1F4DD}", Color::Rgb(255, 204, 0)),
    icon("Weather", "\u{1F324}", Color::Rgb(52, 170, 220)),
];

/// Icons in the dock.
pub static DOCK_APPS: [AppIcon; 4] = [
    icon("Phone", "\u{1F4F1}", Color::Rgb(52, 199, 89)),
    icon("Safari", "\u{1F310}", Color::Rgb(0, 122, 255)),
    icon("Mail", "\u{2709}", Color::Rgb(88, 86, 214)),
    icon("Music", "\u{1F3B5}", Color::Rgb(255, 45, 85)),
];

/// Read-only values an app may need while rendering.
#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub now: DateTime<Local>,
    pub wallpaper: Wallpaper,
    pub screen_height: u8,
}

/// What an app asks the host to do after handling input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppAction {
    /// Nothing for the host to do.
    #[default]
    None,
    /// Dismiss the app.
    Close,
    /// Switch to another app.
    OpenApp(AppId),
    SetWallpaper(Wallpaper),
    /// New screen height in percent, already clamped.
    SetScreenHeight(u8),
}

/// Trait for the toy apps.
///
/// Apps own their state, draw into the overlay area and translate input
/// into `AppAction`s instead of touching the screen mode themselves.
pub trait PhoneApp {
    /// Render the app body (the overlay draws the title bar).
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &AppContext);

    /// Handle a key press. `action` is the keymap's reading of the key,
    /// if any; apps with a focused text field look at the raw key instead.
    fn handle_key(&mut self, key: KeyEvent, action: Option<Action>) -> AppAction;

    /// Handle a left click at a terminal cell inside the last rendered area.
    fn handle_click(&mut self, _column: u16, _row: u16) -> AppAction {
        AppAction::None
    }

    /// Advance timers.
    fn tick(&mut self, _now: Instant) {}

    /// Whether a text field currently swallows printable keys.
    fn is_input_focused(&self) -> bool {
        false
    }
}

/// Create the app behind an id. Unknown ids get a placeholder.
pub fn create_app(id: &AppId) -> Box<dyn PhoneApp> {
    match id.as_str() {
        "Notes" => Box::new(NotesApp::new()),
        "Phone" => Box::new(DialerApp::new()),
        "Weather" => Box::new(WeatherApp::new(rand::rng())),
        "Safari" => Box::new(SafariApp::new()),
        "Calendar" => Box::new(CalendarApp::new(Local::now().date_naive())),
        "Settings" => Box::new(SettingsApp::new()),
        "About" => Box::new(AboutApp::new()),
        other => Box::new(PlaceholderApp::new(other)),
    }
}

/// Apps created so far, keyed by id.
#[derive(Default)]
pub struct AppRegistry {
    apps: HashMap<AppId, Box<dyn PhoneApp>>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an app, creating it on first use.
    pub fn get_or_create(&mut self, id: &AppId) -> &mut dyn PhoneApp {
        self.apps
            .entry(id.clone())
            .or_insert_with(|| {
                debug!("Creating app {}", id);
                create_app(id)
            })
            .as_mut()
    }

    /// Get an app only if it has been opened before.
    pub fn get_mut(&mut self, id: &AppId) -> Option<&mut dyn PhoneApp> {
        self.apps.get_mut(id).map(|app| app.as_mut() as &mut dyn PhoneApp)
    }

    /// Insert or replace the app behind an id.
    pub fn insert(&mut self, id: AppId, app: Box<dyn PhoneApp>) {
        self.apps.insert(id, app);
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.apps.contains_key(id)
    }

    /// Advance every app's timers, shown or not.
    pub fn tick_all(&mut self, now: Instant) {
        for app in self.apps.values_mut() {
            app.tick(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_registry_creates_lazily() {
        let mut registry = AppRegistry::new();
        let notes = AppId::new("Notes");
        assert!(!registry.contains(&notes));
        registry.get_or_create(&notes);
        assert!(registry.contains(&notes));
    }

    #[test]
    fn test_registry_keeps_state_between_opens() {
        let mut registry = AppRegistry::new();
        let notes = AppId::new("Notes");
        let app = registry.get_or_create(&notes);
        app.handle_key(key(KeyCode::Char('h')), None);
        assert!(app.is_input_focused());

        let again = registry.get_mut(&notes).unwrap();
        assert!(again.is_input_focused());
    }

    #[test]
    fn test_icon_names_are_unique() {
        let mut names: Vec<&str> = HOME_APPS.iter().chain(DOCK_APPS.iter()).map(|i| i.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), HOME_APPS.len() + DOCK_APPS.len());
    }
}
