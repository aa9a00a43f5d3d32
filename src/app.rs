use crate::apps::{AppAction, AppContext, AppRegistry};
use crate::components::{
    AppOverlay, Component, ComponentAction, ControlCenter, Footer, HelpOverlay, HomeScreen,
    LockScreen, PhoneFrame, PhoneView,
};
use crate::config::Config;
use crate::keymap::Action;
use crate::state::{
    AppId, GestureSession, GestureSource, ScreenMachine, ScreenMode, ScrollLatch, SwipeDirection,
    Transition,
};
use crate::styles::{init_theme, ThemeType};
use crate::tui::Tui;
use crate::utils::format_path_for_display;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Brightness change for the keyboard brightness actions
const BRIGHTNESS_KEY_STEP: i32 = 10;

/// A left-button press that may turn out to be a tap
#[derive(Debug, Clone, Copy)]
struct Press {
    column: u16,
    row: u16,
    /// Left the press cell or fired a transition; no longer a tap
    dragged: bool,
}

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    machine: ScreenMachine<ScrollLatch>,
    registry: AppRegistry,
    lock_screen: LockScreen,
    home_screen: HomeScreen,
    control_center: ControlCenter,
    overlay: AppOverlay,
    /// Phone screen area from the last draw
    screen_area: Rect,
    press: Option<Press>,
    last_transition: Option<Transition>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        init_theme(config.theme.parse::<ThemeType>().unwrap_or_default());
        let machine = ScreenMachine::with_scroll_lock(ScrollLatch::new())
            .with_thresholds(config.gestures.thresholds())
            .with_controls(config.controls.clone());

        Self {
            config,
            config_path,
            machine,
            registry: AppRegistry::new(),
            lock_screen: LockScreen::new(),
            home_screen: HomeScreen::new(),
            control_center: ControlCenter::new(),
            overlay: AppOverlay::new(),
            screen_area: Rect::default(),
            press: None,
            last_transition: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Use `theme_type` for this session only; the config keeps its own theme.
    pub fn with_theme(self, theme_type: ThemeType) -> Self {
        init_theme(theme_type);
        self
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        info!("Starting in {}", self.machine.current_mode());

        // Main event loop
        loop {
            tui.terminal_mut().draw(|frame| self.draw(frame))?;

            if self.should_quit {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event);
            }
            self.registry.tick_all(Instant::now());
        }

        tui.exit()?;
        Ok(())
    }

    pub fn machine(&self) -> &ScreenMachine<ScrollLatch> {
        &self.machine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry_mut(&mut self) -> &mut AppRegistry {
        &mut self.registry
    }

    /// The most recent transition, for the footer and for tests.
    pub fn last_transition(&self) -> Option<&Transition> {
        self.last_transition.as_ref()
    }

    /// Open an app on top of the current screen, as a tap on its icon would.
    pub fn open_app(&mut self, id: impl Into<AppId>) {
        let transition = self.machine.open_app(id);
        self.record(transition);
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ============ Drawing ============

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(frame.area());

        let screen = PhoneFrame::render(frame, chunks[0], self.config.screen_height);
        self.screen_area = screen;

        let now = Local::now();
        let view = PhoneView {
            mode: self.machine.current_mode(),
            controls: self.machine.controls(),
            now,
            wallpaper: self.config.wallpaper,
        };

        let rendered = match view.mode {
            ScreenMode::Locked => self.lock_screen.render(frame, screen, &view),
            ScreenMode::Home => self.home_screen.render(frame, screen, &view),
            ScreenMode::ControlCenter => self.control_center.render(frame, screen, &view),
            ScreenMode::AppOverlay(id) => {
                let body = self.overlay.render(frame, screen, id);
                let ctx = AppContext {
                    now,
                    wallpaper: self.config.wallpaper,
                    screen_height: self.config.screen_height,
                };
                self.registry.get_or_create(id).render(frame, body, &ctx);
                Ok(())
            }
        };
        if let Err(e) = rendered {
            error!("Failed to render {}: {}", view.mode, e);
        }

        PhoneFrame::apply_brightness(frame, screen, view.controls.brightness);

        let context = match view.mode {
            ScreenMode::Locked => "Swipe up to unlock".to_string(),
            ScreenMode::Home => "Drag down for Control Center".to_string(),
            ScreenMode::ControlCenter => "Swipe up to close".to_string(),
            ScreenMode::AppOverlay(_) => format!(
                "{}: Close app",
                self.config.keymap.get_key_display_for_action(Action::CloseApp)
            ),
        };
        let hint = self.config.keymap.footer_hint(&context);
        if let Err(e) = Footer::render(frame, chunks[1], &hint) {
            error!("Failed to render footer: {}", e);
        }

        if self.show_help {
            let area = frame.area();
            let config_path = format_path_for_display(&self.config_path);
            if let Err(e) = HelpOverlay::render(frame, area, &self.config.keymap, &config_path) {
                error!("Failed to render help: {}", e);
            }
        }
    }

    // ============ Input ============

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => {
                debug!("Terminal lost focus, ending gestures");
                self.machine.on_mouse_leave();
                self.machine.on_pointer_cancel();
                self.press = None;
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        let action = self.config.keymap.get_action(key.code, key.modifiers);

        // A focused text field gets every key except ctrl+c
        if let ScreenMode::AppOverlay(id) = self.machine.current_mode() {
            let id = id.clone();
            let app = self.registry.get_or_create(&id);
            if app.is_input_focused() {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.should_quit = true;
                    return;
                }
                let app_action = app.handle_key(key, action);
                self.apply_app_action(app_action);
                return;
            }
        }

        match action {
            Some(Action::Quit) => self.should_quit = true,
            Some(Action::Help) => self.show_help = true,
            Some(Action::SwipeUp) => self.synthetic_swipe(SwipeDirection::Up),
            Some(Action::SwipeDown) => self.synthetic_swipe(SwipeDirection::Down),
            Some(Action::CloseApp) => {
                let transition = self.machine.close_app();
                self.record(transition);
            }
            Some(Action::BrightnessUp) => self.nudge_brightness(BRIGHTNESS_KEY_STEP),
            Some(Action::BrightnessDown) => self.nudge_brightness(-BRIGHTNESS_KEY_STEP),
            _ => self.dispatch_to_screen(key, action),
        }
    }

    /// Navigation keys go to whatever the current mode shows.
    fn dispatch_to_screen(&mut self, key: KeyEvent, action: Option<Action>) {
        let mode = self.machine.current_mode().clone();
        if let ScreenMode::AppOverlay(id) = &mode {
            let app_action = self.registry.get_or_create(id).handle_key(key, action);
            self.apply_app_action(app_action);
            return;
        }
        let Some(action) = action else {
            return;
        };

        let view = PhoneView {
            mode: &mode,
            controls: self.machine.controls(),
            now: Local::now(),
            wallpaper: self.config.wallpaper,
        };
        let component_action = match (&mode, action) {
            (ScreenMode::Home, action) => self.home_screen.handle_action(action, &view),
            (ScreenMode::ControlCenter, Action::Cancel) => {
                self.synthetic_swipe(SwipeDirection::Up);
                return;
            }
            (ScreenMode::ControlCenter, action) => self.control_center.handle_action(action, &view),
            _ => return,
        };
        self.apply_component_action(component_action);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let y = self.config.gestures.row_to_px(mouse.row);
        let inside = self.screen_area.contains(Position::new(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.machine.on_mouse_down(y);
                let owner = self.machine.session().map(GestureSession::source);
                if owner != Some(GestureSource::Mouse) {
                    return;
                }
                self.press = Some(Press {
                    column: mouse.column,
                    row: mouse.row,
                    dragged: false,
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if !inside {
                    self.machine.on_mouse_leave();
                    self.press = None;
                    return;
                }
                let transition = self.machine.on_mouse_move(y);
                if let Some(press) = self.press.as_mut() {
                    if transition.is_some() || (press.column, press.row) != (mouse.column, mouse.row) {
                        press.dragged = true;
                    }
                }
                self.record(transition);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.machine.on_mouse_up();
                if let Some(press) = self.press.take() {
                    if !press.dragged && (press.column, press.row) == (mouse.column, mouse.row) {
                        self.tap(mouse.column, mouse.row);
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Right) if inside => self.machine.on_pointer_down(y),
            MouseEventKind::Drag(MouseButton::Right) => {
                let transition = self.machine.on_pointer_move(y);
                self.record(transition);
            }
            MouseEventKind::Up(MouseButton::Right) => self.machine.on_pointer_up(),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if self.machine.scroll_lock().is_held() {
                    debug!("Ignoring scroll during a gesture");
                    return;
                }
                let (code, action) = if mouse.kind == MouseEventKind::ScrollUp {
                    (KeyCode::Up, Action::MoveUp)
                } else {
                    (KeyCode::Down, Action::MoveDown)
                };
                self.dispatch_to_screen(KeyEvent::new(code, KeyModifiers::NONE), Some(action));
            }
            _ => {}
        }
    }

    /// A click that did not turn into a swipe.
    fn tap(&mut self, column: u16, row: u16) {
        let component_action = match self.machine.current_mode().clone() {
            ScreenMode::Locked => return,
            ScreenMode::Home => self.home_screen.handle_click(column, row),
            ScreenMode::ControlCenter => self.control_center.handle_click(column, row),
            ScreenMode::AppOverlay(id) => {
                if self.overlay.is_close_hit(column, row) {
                    ComponentAction::CloseApp
                } else if self.overlay.is_body_hit(column, row) {
                    let app_action = self.registry.get_or_create(&id).handle_click(column, row);
                    self.apply_app_action(app_action);
                    return;
                } else {
                    return;
                }
            }
        };
        self.apply_component_action(component_action);
    }

    /// Replay a keyboard swipe through the touch entry points.
    fn synthetic_swipe(&mut self, direction: SwipeDirection) {
        if self.machine.session().is_some() {
            debug!("Ignoring keyboard swipe during a gesture");
            return;
        }
        let start = self.config.gestures.row_to_px(self.screen_area.bottom());
        let distance = self.machine.thresholds().touch;
        let end = match direction {
            SwipeDirection::Up => start - distance,
            SwipeDirection::Down => start + distance,
        };
        self.machine.on_pointer_down(start);
        let transition = self.machine.on_pointer_move(end);
        self.machine.on_pointer_up();
        self.record(transition);
    }

    fn nudge_brightness(&mut self, step: i32) {
        if self.machine.current_mode().is_locked() {
            debug!("Ignoring brightness key on the lock screen");
            return;
        }
        let current = i32::from(self.machine.controls().brightness);
        self.machine.set_brightness(current + step);
    }

    // ============ Applying actions ============

    fn apply_component_action(&mut self, action: ComponentAction) {
        match action {
            ComponentAction::None | ComponentAction::Update => {}
            ComponentAction::OpenApp(id) => self.open_app(id),
            ComponentAction::Toggle(switch) => {
                self.machine.toggle_switch(switch);
            }
            ComponentAction::SetBrightness(value) => {
                self.machine.set_brightness(value);
            }
            ComponentAction::CloseApp => {
                let transition = self.machine.close_app();
                self.record(transition);
            }
        }
    }

    fn apply_app_action(&mut self, action: AppAction) {
        match action {
            AppAction::None => {}
            AppAction::Close => {
                let transition = self.machine.close_app();
                self.record(transition);
            }
            AppAction::OpenApp(id) => self.open_app(id),
            AppAction::SetWallpaper(wallpaper) => {
                info!("Wallpaper set to {}", wallpaper.name());
                self.config.wallpaper = wallpaper;
                self.save_config();
            }
            AppAction::SetScreenHeight(height) => {
                self.config.screen_height = height;
                self.save_config();
            }
        }
    }

    fn record(&mut self, transition: Option<Transition>) {
        if let Some(transition) = transition {
            if let Some(press) = self.press.as_mut() {
                press.dragged = true;
            }
            self.last_transition = Some(transition);
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save(&self.config_path) {
            warn!("Failed to save config: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ControlSwitch;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tempfile::TempDir;

    fn app_with_screen() -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Config::default(), dir.path().join("config.toml"));
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        (app, dir)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keyboard_swipes() {
        let (mut app, _dir) = app_with_screen();
        app.handle_event(key(KeyCode::PageUp));
        assert_eq!(app.machine().current_mode(), &ScreenMode::Home);
        app.handle_event(key(KeyCode::PageDown));
        assert_eq!(app.machine().current_mode(), &ScreenMode::ControlCenter);
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.machine().current_mode(), &ScreenMode::Home);
    }

    #[test]
    fn test_right_drag_is_touch() {
        let (mut app, _dir) = app_with_screen();
        let col = app.screen_area.x + 5;
        let row = app.screen_area.y + 20;
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Right), col, row));
        // Two rows is 32px: below the touch threshold
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Right), col, row - 2));
        assert_eq!(app.machine().current_mode(), &ScreenMode::Locked);
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Right), col, row - 4));
        assert_eq!(app.machine().current_mode(), &ScreenMode::Home);
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Right), col, row - 4));
        assert!(app.machine().session().is_none());
    }

    #[test]
    fn test_left_drag_is_mouse() {
        let (mut app, _dir) = app_with_screen();
        let col = app.screen_area.x + 5;
        let row = app.screen_area.y + 20;
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), col, row - 2));
        assert_eq!(app.machine().current_mode(), &ScreenMode::Home);
        assert!(app.machine().scroll_lock().is_held());
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), col, row - 2));
        assert!(!app.machine().scroll_lock().is_held());
    }

    #[test]
    fn test_focus_lost_ends_session() {
        let (mut app, _dir) = app_with_screen();
        let col = app.screen_area.x + 5;
        let row = app.screen_area.y + 10;
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        assert!(app.machine().session().is_some());
        app.handle_event(Event::FocusLost);
        assert!(app.machine().session().is_none());
    }

    #[test]
    fn test_tap_opens_app_and_close_button() {
        let (mut app, _dir) = app_with_screen();
        app.handle_event(key(KeyCode::PageUp));

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        // First icon sits below the status bar and spacer
        let col = app.screen_area.x + 1;
        let row = app.screen_area.y + 2;
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), col, row));
        assert_eq!(
            app.machine().current_mode(),
            &ScreenMode::AppOverlay("Messages".into())
        );

        terminal.draw(|frame| app.draw(frame)).unwrap();
        let close_col = app.screen_area.right() - 2;
        let close_row = app.screen_area.y;
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), close_col, close_row));
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), close_col, close_row));
        assert_eq!(app.machine().current_mode(), &ScreenMode::Home);
    }

    #[test]
    fn test_control_center_tap_toggles_switch() {
        let (mut app, _dir) = app_with_screen();
        app.handle_event(key(KeyCode::PageUp));
        app.handle_event(key(KeyCode::PageDown));

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        // First tile (Airplane) starts two rows below the top of the screen
        let col = app.screen_area.x + 3;
        let row = app.screen_area.y + 3;
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), col, row));
        assert!(app.machine().controls().get(ControlSwitch::Airplane));
    }

    #[test]
    fn test_focused_input_swallows_quit_key() {
        let (mut app, _dir) = app_with_screen();
        app.handle_event(key(KeyCode::PageUp));
        app.machine.open_app("Notes");
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        app.handle_event(key(KeyCode::Esc));
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_brightness_keys_clamp() {
        let (mut app, _dir) = app_with_screen();
        app.handle_event(key(KeyCode::PageUp));
        for _ in 0..5 {
            app.handle_event(key(KeyCode::Char('+')));
        }
        assert_eq!(app.machine().controls().brightness, 100);
    }

    #[test]
    fn test_brightness_keys_ignored_while_locked() {
        let (mut app, _dir) = app_with_screen();
        app.handle_event(key(KeyCode::Char('+')));
        app.handle_event(key(KeyCode::Char('-')));
        assert_eq!(app.machine().controls().brightness, 75);
    }

    #[test]
    fn test_left_tap_during_touch_session_is_ignored() {
        let (mut app, _dir) = app_with_screen();
        app.handle_event(key(KeyCode::PageUp));
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        // Finger down somewhere on the screen
        let screen = app.screen_area;
        app.handle_event(mouse(
            MouseEventKind::Down(MouseButton::Right),
            screen.x + 5,
            screen.y + 20,
        ));

        // Left click on the first icon while the finger session is open
        let (col, row) = (screen.x + 1, screen.y + 2);
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), col, row));
        assert_eq!(app.machine().current_mode(), &ScreenMode::Home);
        assert_eq!(
            app.machine().session().map(GestureSession::source),
            Some(GestureSource::Touch)
        );

        // Once the finger lifts the same click opens the app
        app.handle_event(mouse(
            MouseEventKind::Up(MouseButton::Right),
            screen.x + 5,
            screen.y + 20,
        ));
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), col, row));
        assert_eq!(
            app.machine().current_mode(),
            &ScreenMode::AppOverlay("Messages".into())
        );
    }

    #[test]
    fn test_theme_override_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        let mut app =
            App::new(Config::default(), config_path.clone()).with_theme(ThemeType::NoColor);
        app.handle_event(key(KeyCode::PageUp));
        app.open_app("Settings");
        app.handle_event(key(KeyCode::Right));

        let saved = Config::load_or_create(&config_path).unwrap();
        assert_eq!(saved.screen_height, 105);
        assert_eq!(saved.theme, "dark");
    }

    #[test]
    fn test_help_toggles_and_any_key_closes() {
        let (mut app, _dir) = app_with_screen();
        app.handle_event(key(KeyCode::Char('?')));
        assert!(app.is_help_visible());
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.is_help_visible());
        assert!(!app.should_quit());
    }
}
