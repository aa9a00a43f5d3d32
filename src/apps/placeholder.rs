use super::{AppAction, AppContext, PhoneApp};
use crate::keymap::Action;
use crate::styles::theme;
use crate::utils::layout::center_rect;
use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

/// Stand-in for apps without their own screen.
#[derive(Debug, Clone)]
pub struct PlaceholderApp {
    name: String,
}

impl PlaceholderApp {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn message(&self) -> String {
        format!("This is a demo of the {} app.", self.name)
    }
}

impl PhoneApp for PlaceholderApp {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &AppContext) {
        let t = theme();
        let lines = vec![
            Line::from(Span::styled(self.name.clone(), t.title_style())),
            Line::from(""),
            Line::from(Span::styled(self.message(), t.muted_style())),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            center_rect(area, area.width, 5),
        );
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
    fn test_message() {
        assert_eq!(
            PlaceholderApp::new("Music").message(),
            "This is a demo of the Music app."
        );
    }
}
