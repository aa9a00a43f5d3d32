//! Calendar: a day view with a few sample events.

use super::{AppAction, AppContext, PhoneApp};
use crate::keymap::Action;
use crate::styles::theme;
use crate::utils::layout::HitAreas;
use chrono::{Days, NaiveDate};
use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub time: &'static str,
    pub title: &'static str,
}

/// Sample events relative to `today`.
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    let offset = |days: u64| today.checked_add_days(Days::new(days)).unwrap_or(today);
    vec![
        Event {
            date: today,
            time: "10:00 AM",
            title: "Meeting",
        },
        Event {
            date: offset(1),
            time: "1:00 PM",
            title: "Lunch",
        },
        Event {
            date: offset(3),
            time: "9:00 AM",
            title: "Conference",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalendarTarget {
    Previous,
    Next,
}

pub struct CalendarApp {
    selected: NaiveDate,
    events: Vec<Event>,
    hits: HitAreas<CalendarTarget>,
}

impl CalendarApp {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected: today,
            events: sample_events(today),
            hits: HitAreas::new(),
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    pub fn previous_day(&mut self) {
        self.selected = self.selected.pred_opt().unwrap_or(self.selected);
    }

    pub fn next_day(&mut self) {
        self.selected = self.selected.succ_opt().unwrap_or(self.selected);
    }
}

impl PhoneApp for CalendarApp {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &AppContext) {
        let t = theme();
        self.hits.clear();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(chunks[0]);

        frame.render_widget(Paragraph::new(Span::styled(" \u{2039}", t.title_style())), header[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.selected.format("%A, %B %-d, %Y").to_string(),
                t.title_style(),
            ))
            .alignment(Alignment::Center),
            header[1],
        );
        frame.render_widget(Paragraph::new(Span::styled("\u{203A} ", t.title_style())), header[2]);
        self.hits.push(header[0], CalendarTarget::Previous);
        self.hits.push(header[2], CalendarTarget::Next);

        let events = self.events_on(self.selected);
        let lines: Vec<Line> = if events.is_empty() {
            vec![Line::from(Span::styled(
                "No events scheduled for this day",
                t.muted_style(),
            ))]
        } else {
            events
                .iter()
                .map(|e| {
                    Line::from(vec![
                        Span::styled(format!("{:>8}  ", e.time), t.muted_style()),
                        Span::styled(e.title, t.text_style()),
                    ])
                })
                .collect()
        };
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    fn handle_key(&mut self, _key: KeyEvent, action: Option<Action>) -> AppAction {
        match action {
            Some(Action::MoveLeft) => self.previous_day(),
            Some(Action::MoveRight) => self.next_day(),
            Some(Action::Cancel) => return AppAction::Close,
            _ => {}
        }
        AppAction::None
    }

    fn handle_click(&mut self, column: u16, row: u16) -> AppAction {
        match self.hits.hit(column, row) {
            Some(CalendarTarget::Previous) => self.previous_day(),
            Some(CalendarTarget::Next) => self.next_day(),
            None => {}
        }
        AppAction::None
    }
}
