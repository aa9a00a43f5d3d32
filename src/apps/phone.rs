//! Phone dialer with a fake call timer.

use super::{AppAction, AppContext, PhoneApp as PhoneAppTrait};
use crate::keymap::Action;
use crate::styles::theme;
use crate::utils::layout::HitAreas;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::time::{Duration, Instant};
use tracing::debug;

pub const MAX_DIGITS: usize = 15;
pub const CALLING_DURATION: Duration = Duration::from_secs(3);
pub const ENDED_DURATION: Duration = Duration::from_secs(2);

/// Dial pad keys, row by row.
pub const DIAL_PAD: [[char; 3]; 4] = [
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
    ['*', '0', '#'],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Idle,
    Calling { since: Instant },
    Ended { since: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialTarget {
    Key(char),
    Call,
    Delete,
}

/// Format dialed digits as `XXX`, `XXX-YYY` or `XXX-YYY-rest`.
pub fn format_phone_number(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    match chars.len() {
        0..=3 => digits.to_string(),
        4..=6 => format!(
            "{}-{}",
            chars[..3].iter().collect::<String>(),
            chars[3..].iter().collect::<String>()
        ),
        _ => format!(
            "{}-{}-{}",
            chars[..3].iter().collect::<String>(),
            chars[3..6].iter().collect::<String>(),
            chars[6..].iter().collect::<String>()
        ),
    }
}

pub struct PhoneApp {
    number: String,
    status: CallStatus,
    hits: HitAreas<DialTarget>,
}

impl Default for PhoneApp {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneApp {
    pub fn new() -> Self {
        Self {
            number: String::new(),
            status: CallStatus::Idle,
            hits: HitAreas::new(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn status(&self) -> CallStatus {
        self.status
    }

    /// Append a dial pad key. Ignored during a call or past the digit limit.
    pub fn press_key(&mut self, key: char) -> bool {
        if self.status != CallStatus::Idle || !is_dial_key(key) {
            return false;
        }
        if self.number.chars().count() >= MAX_DIGITS {
            return false;
        }
        self.number.push(key);
        true
    }

    pub fn delete_last(&mut self) {
        if self.status == CallStatus::Idle {
            self.number.pop();
        }
    }

    /// Start a call to the dialed number. Does nothing when it is empty.
    pub fn call(&mut self, now: Instant) -> bool {
        if self.number.is_empty() || self.status != CallStatus::Idle {
            return false;
        }
        debug!("Calling {}", self.number);
        self.status = CallStatus::Calling { since: now };
        true
    }

    pub fn hang_up(&mut self) {
        self.status = CallStatus::Idle;
    }

    /// Advance the call timer: Calling for 3s, then Ended for 2s, then idle.
    pub fn advance(&mut self, now: Instant) {
        match self.status {
            CallStatus::Calling { since } if now.duration_since(since) >= CALLING_DURATION => {
                self.status = CallStatus::Ended {
                    since: since + CALLING_DURATION,
                };
            }
            CallStatus::Ended { since } if now.duration_since(since) >= ENDED_DURATION => {
                self.status = CallStatus::Idle;
            }
            _ => {}
        }
    }

    fn activate(&mut self, target: DialTarget) {
        match target {
            DialTarget::Key(c) => {
                self.press_key(c);
            }
            DialTarget::Call => {
                if self.status == CallStatus::Idle {
                    self.call(Instant::now());
                } else {
                    self.hang_up();
                }
            }
            DialTarget::Delete => self.delete_last(),
        }
    }
}

fn is_dial_key(c: char) -> bool {
    c.is_ascii_digit() || c == '*' || c == '#'
}

impl PhoneAppTrait for PhoneApp {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &AppContext) {
        let t = theme();
        self.hits.clear();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Number
                Constraint::Length(1), // Status
                Constraint::Length(12), // Pad
                Constraint::Length(3), // Call / delete
                Constraint::Min(0),
            ])
            .split(area);

        let number = if self.number.is_empty() {
            Span::styled("Enter a number", t.muted_style())
        } else {
            Span::styled(format_phone_number(&self.number), t.emphasis_style())
        };
        frame.render_widget(
            Paragraph::new(Line::from(number)).alignment(Alignment::Center),
            chunks[0],
        );

        let status = match self.status {
            CallStatus::Idle => String::new(),
            CallStatus::Calling { .. } => "Calling...".to_string(),
            CallStatus::Ended { .. } => "Call ended".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(status, t.muted_style())).alignment(Alignment::Center),
            chunks[1],
        );

        let pad_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3); 4])
            .split(chunks[2]);
        for (keys, row_area) in DIAL_PAD.iter().zip(pad_rows.iter()) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 3); 3])
                .split(*row_area);
            for (key, cell) in keys.iter().zip(cells.iter()) {
                let button = Paragraph::new(key.to_string())
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).border_style(t.border_style()));
                frame.render_widget(button, *cell);
                self.hits.push(*cell, DialTarget::Key(*key));
            }
        }

        let actions = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(chunks[3]);
        let (label, style) = if self.status == CallStatus::Idle {
            ("Call", t.switch_on_style())
        } else {
            ("Hang up", t.error_style())
        };
        frame.render_widget(
            Paragraph::new(Span::styled(label, style))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(t.border_style())),
            actions[0],
        );
        self.hits.push(actions[0], DialTarget::Call);
        frame.render_widget(
            Paragraph::new("\u{232B}")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(t.border_style())),
            actions[1],
        );
        self.hits.push(actions[1], DialTarget::Delete);
    }

    fn handle_key(&mut self, key: KeyEvent, action: Option<Action>) -> AppAction {
        match key.code {
            KeyCode::Char(c) if is_dial_key(c) => {
                self.press_key(c);
                return AppAction::None;
            }
            KeyCode::Backspace => {
                self.delete_last();
                return AppAction::None;
            }
            _ => {}
        }
        match action {
            Some(Action::Confirm) => self.activate(DialTarget::Call),
            Some(Action::Cancel) if self.status != CallStatus::Idle => self.hang_up(),
            Some(Action::Cancel) => return AppAction::Close,
            _ => {}
        }
        AppAction::None
    }

    fn handle_click(&mut self, column: u16, row: u16) -> AppAction {
        if let Some(target) = self.hits.hit(column, row) {
            self.activate(target);
        }
        AppAction::None
    }

    fn tick(&mut self, now: Instant) {
        self.advance(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("555"), "555");
        assert_eq!(format_phone_number("5551"), "555-1");
        assert_eq!(format_phone_number("555123"), "555-123");
        assert_eq!(format_phone_number("5551234567"), "555-123-4567");
    }

    #[test]
    fn test_digit_limit() {
        let mut app = PhoneApp::new();
        for _ in 0..20 {
            app.press_key('9');
        }
        assert_eq!(app.number().len(), MAX_DIGITS);
        assert!(!app.press_key('a'));
    }

    #[test]
    fn test_empty_number_does_not_call() {
        let mut app = PhoneApp::new();
        assert!(!app.call(Instant::now()));
        assert_eq!(app.status(), CallStatus::Idle);
    }

    #[test]
    fn test_call_timeline() {
        let mut app = PhoneApp::new();
        app.press_key('1');
        let start = Instant::now();
        assert!(app.call(start));

        app.advance(start + Duration::from_secs(2));
        assert!(matches!(app.status(), CallStatus::Calling { .. }));

        app.advance(start + Duration::from_secs(3));
        assert!(matches!(app.status(), CallStatus::Ended { .. }));

        app.advance(start + Duration::from_secs(4));
        assert!(matches!(app.status(), CallStatus::Ended { .. }));

        app.advance(start + Duration::from_secs(5));
        assert_eq!(app.status(), CallStatus::Idle);
        assert_eq!(app.number(), "1");
    }

    #[test]
    fn test_hang_up_and_keys_ignored_during_call() {
        let mut app = PhoneApp::new();
        app.press_key('7');
        app.call(Instant::now());
        assert!(!app.press_key('8'));
        app.delete_last();
        assert_eq!(app.number(), "7");
        app.hang_up();
        assert_eq!(app.status(), CallStatus::Idle);
    }
}
