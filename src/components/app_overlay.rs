use crate::state::AppId;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const CLOSE_LABEL: &str = "\u{2715} Close";

/// Title bar and background of an open app
///
/// The app body is drawn by the app itself into the area `render` returns.
#[derive(Debug, Default)]
pub struct AppOverlay {
    close_button: Option<Rect>,
    body: Rect,
}

impl AppOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the overlay chrome for `app` and return the body area.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &AppId) -> Rect {
        let t = theme();
        frame.render_widget(Block::default().style(t.app_style()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let title_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(t.border_style());
        let title_inner = title_block.inner(chunks[0]);
        frame.render_widget(title_block, chunks[0]);

        let close_width = u16::try_from(CLOSE_LABEL.chars().count()).unwrap_or(0) + 1;
        let bar = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(close_width)])
            .split(title_inner);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", app), t.title_style())),
            bar[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(CLOSE_LABEL, t.emphasis_style())),
            bar[1],
        );
        self.close_button = Some(bar[1]);

        let body = Rect {
            x: chunks[1].x + 1,
            width: chunks[1].width.saturating_sub(2),
            ..chunks[1]
        };
        self.body = body;
        body
    }

    /// Whether a click lands on the Close button.
    pub fn is_close_hit(&self, column: u16, row: u16) -> bool {
        self.close_button
            .is_some_and(|rect| rect.contains(Position::new(column, row)))
    }

    /// Whether a click lands inside the app body.
    pub fn is_body_hit(&self, column: u16, row: u16) -> bool {
        self.body.contains(Position::new(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_close_button_hit_area() {
        let mut overlay = AppOverlay::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let mut body = Rect::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                body = overlay.render(frame, area, &AppId::new("Notes"));
            })
            .unwrap();

        assert!(overlay.is_close_hit(35, 0));
        assert!(!overlay.is_close_hit(2, 0));
        assert!(overlay.is_body_hit(5, 5));
        assert_eq!(body.y, 2);
    }
}
