use super::component::{Component, PhoneView};
use super::phone_frame::StatusBar;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

/// Lock screen: clock, date and the unlock hint
#[derive(Debug, Default)]
pub struct LockScreen;

impl LockScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Component for LockScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, view: &PhoneView) -> Result<()> {
        let t = theme();
        frame.render_widget(Block::default().style(t.lock_style()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Length(3), // Spacer
                Constraint::Length(2), // Clock
                Constraint::Length(1), // Date
                Constraint::Min(0),
                Constraint::Length(1), // Hint
                Constraint::Length(1), // Home indicator
            ])
            .split(area);

        StatusBar::render(frame, chunks[0], view.now, view.controls);

        let clock = view.now.format("%-I:%M").to_string();
        frame.render_widget(
            Paragraph::new(Span::styled(clock, t.title_style().add_modifier(Modifier::BOLD)))
                .alignment(Alignment::Center),
            chunks[2],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                view.now.format("%A, %B %-d").to_string(),
                t.text_style(),
            ))
            .alignment(Alignment::Center),
            chunks[3],
        );
        frame.render_widget(
            Paragraph::new(Span::styled("\u{2191} Swipe up to unlock", t.muted_style()))
                .alignment(Alignment::Center),
            chunks[5],
        );
        frame.render_widget(
            Paragraph::new("\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}")
                .alignment(Alignment::Center),
            chunks[6],
        );
        Ok(())
    }
}
