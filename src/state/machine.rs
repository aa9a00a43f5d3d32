//! The screen state machine.
//!
//! Owns the current `ScreenMode`, the control toggles and the open gesture
//! session. All entry points are synchronous and never fail: input that does
//! not apply to the current state is ignored.
//!
//! ```text
//!            swipe up                 swipe down
//!   Locked ───────────► Home ◄──────────────────► ControlCenter
//!                        │  ▲        swipe up          │
//!              open app  │  │ close app                │ open app
//!                        ▼  │                          │
//!                     AppOverlay(id) ◄─────────────────┘
//! ```

use super::controls::{ControlSwitch, ControlToggleSet};
use super::gesture::{resolve_swipe, GestureSession, GestureSource, SwipeDirection, Thresholds};
use super::screen::{AppId, ScreenMode};
use super::scroll_lock::{NoScrollLock, ScrollLock};
use serde::Serialize;
use tracing::debug;

/// What caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionCause {
    /// A gesture session crossed its threshold.
    Swipe {
        source: GestureSource,
        direction: SwipeDirection,
    },
    OpenApp,
    CloseApp,
}

/// A committed mode change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: ScreenMode,
    pub to: ScreenMode,
    pub cause: TransitionCause,
}

/// Gesture-driven state machine for the phone screen.
///
/// Generic over the scroll lock it holds for the duration of a gesture
/// session; hosts without anything to scroll use the default `NoScrollLock`.
///
/// # Example
///
/// ```
/// use peekphone::state::{ScreenMachine, ScreenMode};
///
/// let mut phone = ScreenMachine::new();
/// phone.on_pointer_down(400.0);
/// phone.on_pointer_move(340.0);
/// phone.on_pointer_up();
/// assert_eq!(phone.current_mode(), &ScreenMode::Home);
/// ```
#[derive(Debug)]
pub struct ScreenMachine<L: ScrollLock = NoScrollLock> {
    mode: ScreenMode,
    controls: ControlToggleSet,
    session: Option<GestureSession>,
    thresholds: Thresholds,
    scroll_lock: L,
}

impl Default for ScreenMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenMachine {
    /// Create a locked machine with default thresholds and toggles.
    pub fn new() -> Self {
        Self::with_scroll_lock(NoScrollLock)
    }
}

impl<L: ScrollLock> ScreenMachine<L> {
    /// Create a locked machine that acquires `scroll_lock` during gestures.
    pub fn with_scroll_lock(scroll_lock: L) -> Self {
        Self {
            mode: ScreenMode::Locked,
            controls: ControlToggleSet::default(),
            session: None,
            thresholds: Thresholds::default(),
            scroll_lock,
        }
    }

    /// Replace the swipe thresholds.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replace the initial control toggles.
    pub fn with_controls(mut self, controls: ControlToggleSet) -> Self {
        self.controls = controls.normalized();
        self
    }

    pub fn current_mode(&self) -> &ScreenMode {
        &self.mode
    }

    pub fn controls(&self) -> &ControlToggleSet {
        &self.controls
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// The open gesture session, if any.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn scroll_lock(&self) -> &L {
        &self.scroll_lock
    }

    // ============ Touch entry points ============

    pub fn on_pointer_down(&mut self, y: f32) {
        self.begin_session(GestureSource::Touch, y);
    }

    pub fn on_pointer_move(&mut self, y: f32) -> Option<Transition> {
        self.track_session(GestureSource::Touch, y)
    }

    pub fn on_pointer_up(&mut self) {
        self.end_session(GestureSource::Touch);
    }

    pub fn on_pointer_cancel(&mut self) {
        self.end_session(GestureSource::Touch);
    }

    // ============ Mouse entry points ============

    pub fn on_mouse_down(&mut self, y: f32) {
        self.begin_session(GestureSource::Mouse, y);
    }

    pub fn on_mouse_move(&mut self, y: f32) -> Option<Transition> {
        self.track_session(GestureSource::Mouse, y)
    }

    pub fn on_mouse_up(&mut self) {
        self.end_session(GestureSource::Mouse);
    }

    pub fn on_mouse_leave(&mut self) {
        self.end_session(GestureSource::Mouse);
    }

    // ============ Discrete actions ============

    /// Show an app on top of the home screen.
    ///
    /// Allowed from Home, ControlCenter (which closes in the same step) and
    /// from another app. Ignored while locked.
    pub fn open_app(&mut self, app: impl Into<AppId>) -> Option<Transition> {
        let app = app.into();
        match &self.mode {
            ScreenMode::Locked => {
                debug!("Ignoring open of {} while locked", app);
                None
            }
            ScreenMode::AppOverlay(current) if *current == app => None,
            _ => self.commit(ScreenMode::AppOverlay(app), TransitionCause::OpenApp),
        }
    }

    /// Dismiss the app on top and return to Home. No-op outside an app.
    pub fn close_app(&mut self) -> Option<Transition> {
        if self.mode.active_app().is_some() {
            self.commit(ScreenMode::Home, TransitionCause::CloseApp)
        } else {
            None
        }
    }

    /// Flip a control center switch and return its new value.
    pub fn toggle_switch(&mut self, switch: ControlSwitch) -> bool {
        let value = self.controls.toggle(switch);
        debug!("{} switched {}", switch, if value { "on" } else { "off" });
        value
    }

    /// Store a brightness level clamped to `0..=100` and return it.
    pub fn set_brightness(&mut self, value: i32) -> u8 {
        let stored = self.controls.set_brightness(value);
        debug!("Brightness set to {} (requested {})", stored, value);
        stored
    }

    // ============ Gesture resolution ============

    fn begin_session(&mut self, source: GestureSource, y: f32) {
        if let Some(open) = &self.session {
            debug!(
                "Ignoring {} down: session already owned by {}",
                source.name(),
                open.source().name()
            );
            return;
        }
        self.session = Some(GestureSession::begin(source, y));
        self.scroll_lock.acquire();
    }

    fn track_session(&mut self, source: GestureSource, y: f32) -> Option<Transition> {
        let session = self.session.as_mut()?;
        if session.source() != source {
            return None;
        }
        let delta = session.track(y)?;
        let direction = resolve_swipe(delta, self.thresholds.for_source(source))?;
        let target = match (&self.mode, direction) {
            (ScreenMode::Locked, SwipeDirection::Up) => ScreenMode::Home,
            (ScreenMode::Home, SwipeDirection::Down) => ScreenMode::ControlCenter,
            (ScreenMode::ControlCenter, SwipeDirection::Up) => ScreenMode::Home,
            _ => return None,
        };
        session.consume();
        self.commit(target, TransitionCause::Swipe { source, direction })
    }

    fn end_session(&mut self, source: GestureSource) {
        match &self.session {
            Some(open) if open.source() == source => {
                self.session = None;
                self.scroll_lock.release();
            }
            Some(open) => debug!(
                "Ignoring {} release: session owned by {}",
                source.name(),
                open.source().name()
            ),
            None => {}
        }
    }

    fn commit(&mut self, to: ScreenMode, cause: TransitionCause) -> Option<Transition> {
        let from = std::mem::replace(&mut self.mode, to.clone());
        debug!("Screen {} -> {} ({:?})", from, to, cause);
        Some(Transition { from, to, cause })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ScrollLatch;

    fn unlocked() -> ScreenMachine {
        let mut machine = ScreenMachine::new();
        machine.on_pointer_down(300.0);
        machine.on_pointer_move(200.0);
        machine.on_pointer_up();
        assert_eq!(machine.current_mode(), &ScreenMode::Home);
        machine
    }

    #[test]
    fn test_initial_state_is_locked() {
        let machine = ScreenMachine::new();
        assert_eq!(machine.current_mode(), &ScreenMode::Locked);
        assert!(machine.session().is_none());
    }

    #[test]
    fn test_transition_fires_during_move() {
        let mut machine = ScreenMachine::new();
        machine.on_pointer_down(300.0);
        assert!(machine.on_pointer_move(280.0).is_none());
        let transition = machine.on_pointer_move(250.0).unwrap();
        assert_eq!(transition.from, ScreenMode::Locked);
        assert_eq!(transition.to, ScreenMode::Home);
        assert_eq!(
            transition.cause,
            TransitionCause::Swipe {
                source: GestureSource::Touch,
                direction: SwipeDirection::Up
            }
        );
        // Still finger-down: the session remains owned but consumed.
        assert!(machine.session().unwrap().is_consumed());
    }

    #[test]
    fn test_one_drag_fires_once() {
        let mut machine = unlocked();
        machine.on_pointer_down(100.0);
        assert!(machine.on_pointer_move(160.0).is_some());
        assert_eq!(machine.current_mode(), &ScreenMode::ControlCenter);
        // Dragging back up in the same session must not close it again.
        assert!(machine.on_pointer_move(0.0).is_none());
        assert_eq!(machine.current_mode(), &ScreenMode::ControlCenter);
    }

    #[test]
    fn test_gestures_ignored_inside_app() {
        let mut machine = unlocked();
        machine.open_app("Notes");
        machine.on_mouse_down(100.0);
        assert!(machine.on_mouse_move(200.0).is_none());
        assert!(machine.on_mouse_move(0.0).is_none());
        machine.on_mouse_up();
        assert_eq!(machine.current_mode(), &ScreenMode::AppOverlay("Notes".into()));
    }

    #[test]
    fn test_upward_swipe_on_home_does_nothing() {
        let mut machine = unlocked();
        machine.on_pointer_down(300.0);
        assert!(machine.on_pointer_move(100.0).is_none());
        assert_eq!(machine.current_mode(), &ScreenMode::Home);
        // The session is still live since nothing fired.
        assert!(!machine.session().unwrap().is_consumed());
    }

    #[test]
    fn test_open_app_ignored_while_locked() {
        let mut machine = ScreenMachine::new();
        assert!(machine.open_app("Notes").is_none());
        assert_eq!(machine.current_mode(), &ScreenMode::Locked);
    }

    #[test]
    fn test_open_same_app_is_noop() {
        let mut machine = unlocked();
        assert!(machine.open_app("Phone").is_some());
        assert!(machine.open_app("Phone").is_none());
    }

    #[test]
    fn test_scroll_lock_held_for_session() {
        let mut machine = ScreenMachine::with_scroll_lock(ScrollLatch::new());
        machine.on_mouse_down(200.0);
        assert!(machine.scroll_lock().is_held());
        machine.on_mouse_move(150.0);
        assert_eq!(machine.current_mode(), &ScreenMode::Home);
        assert!(machine.scroll_lock().is_held());
        machine.on_mouse_up();
        assert!(!machine.scroll_lock().is_held());
    }

    #[test]
    fn test_ignored_down_does_not_acquire_lock_twice() {
        let mut machine = ScreenMachine::with_scroll_lock(ScrollLatch::new());
        machine.on_mouse_down(200.0);
        machine.on_pointer_down(200.0);
        assert_eq!(machine.scroll_lock().acquisitions(), 1);
        machine.on_pointer_up();
        assert!(machine.scroll_lock().is_held());
        machine.on_mouse_leave();
        assert!(!machine.scroll_lock().is_held());
    }

    #[test]
    fn test_custom_thresholds() {
        let mut machine = ScreenMachine::new().with_thresholds(Thresholds {
            touch: 10.0,
            mouse: 5.0,
        });
        machine.on_pointer_down(100.0);
        assert!(machine.on_pointer_move(90.0).is_some());
    }

    #[test]
    fn test_with_controls_clamps_brightness() {
        let machine = ScreenMachine::new().with_controls(ControlToggleSet {
            brightness: 200,
            ..ControlToggleSet::default()
        });
        assert_eq!(machine.controls().brightness, 100);
    }
}
