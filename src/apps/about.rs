//! About: a static device specification sheet.

use super::{AppAction, AppContext, PhoneApp};
use crate::keymap::Action;
use crate::styles::theme;
use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub const MODEL_NAME: &str = "PeekPhone 15 Pro";

pub const SPECIFICATIONS: [(&str, &str); 10] = [
    ("Model", MODEL_NAME),
    ("Display", "6.1-inch Super Retina XDR"),
    ("Chip", "A17 Pro chip"),
    ("Camera", "Pro camera system (48MP, 12MP, 12MP)"),
    ("Video", "4K video recording at 24/30/60 fps"),
    ("Face ID", "Enabled"),
    ("Battery", "Up to 23 hours video playback"),
    ("Storage", "256GB"),
    ("OS", "PeekOS 17"),
    ("Color", "Titanium Blue"),
];

#[derive(Debug, Default)]
pub struct AboutApp;

impl AboutApp {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneApp for AboutApp {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &AppContext) {
        let t = theme();
        let header = vec![
            Line::from(Span::styled(MODEL_NAME, t.title_style())),
            Line::from(Span::styled("Model A2650", t.muted_style())),
            Line::from(""),
        ];
        let header_height = 3.min(area.height);
        frame.render_widget(
            Paragraph::new(header).alignment(Alignment::Center),
            Rect::new(area.x, area.y, area.width, header_height),
        );

        let rows = SPECIFICATIONS.iter().map(|(name, value)| {
            Row::new(vec![
                Cell::from(Span::styled(*name, t.muted_style())),
                Cell::from(Span::styled(*value, t.text_style())),
            ])
        });
        let table = Table::new(rows, [Constraint::Length(9), Constraint::Min(0)]).column_spacing(1);
        let body = Rect::new(
            area.x,
            area.y + header_height,
            area.width,
            area.height - header_height,
        );
        frame.render_widget(table, body);
    }

    fn handle_key(&mut self, _key: KeyEvent, action: Option<Action>) -> AppAction {
        match action {
            Some(Action::Cancel) => AppAction::Close,
            _ => AppAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specification_names_unique() {
        let mut names: Vec<&str> = SPECIFICATIONS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SPECIFICATIONS.len());
    }
}
