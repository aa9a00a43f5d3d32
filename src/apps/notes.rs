//! Notes: a draft field and a list of added notes.

use super::{AppAction, AppContext, PhoneApp};
use crate::keymap::Action;
use crate::styles::theme;
use crate::utils::layout::HitAreas;
use crate::utils::text_input::TextInput;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// A saved note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub text: String,
    pub added_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotesTarget {
    Draft,
    AddButton,
}

pub struct NotesApp {
    draft: TextInput,
    notes: Vec<Note>,
    draft_focused: bool,
    hits: HitAreas<NotesTarget>,
}

impl Default for NotesApp {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesApp {
    pub fn new() -> Self {
        Self {
            draft: TextInput::new(),
            notes: Vec::new(),
            draft_focused: true,
            hits: HitAreas::new(),
        }
    }

    pub fn draft(&self) -> &str {
        self.draft.text()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Add the trimmed draft as a note, if it has any content.
    ///
    /// Returns true when a note was added; the draft is cleared in that case.
    pub fn add_note(&mut self, today: NaiveDate) -> bool {
        if self.draft.is_blank() {
            return false;
        }
        let text = self.draft.take_trimmed();
        self.notes.push(Note {
            text,
            added_on: today,
        });
        true
    }

    fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

impl PhoneApp for NotesApp {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &AppContext) {
        let t = theme();
        self.hits.clear();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Draft
                Constraint::Length(1), // Add button
                Constraint::Min(0),    // Notes
            ])
            .split(area);

        let draft_block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.draft_focused {
                t.border_focused_style()
            } else {
                t.border_style()
            });
        let draft_line = if self.draft.text().is_empty() {
            Line::from(Span::styled("Write a note...", t.muted_style()))
        } else {
            Line::from(Span::styled(self.draft.text().to_string(), t.text_style()))
        };
        frame.render_widget(Paragraph::new(draft_line).block(draft_block), chunks[0]);
        self.hits.push(chunks[0], NotesTarget::Draft);

        frame.render_widget(
            Paragraph::new(Span::styled("[ Add Note ]", t.title_style())),
            chunks[1],
        );
        self.hits.push(chunks[1], NotesTarget::AddButton);

        let mut lines = Vec::new();
        if self.notes.is_empty() {
            lines.push(Line::from(Span::styled(
                "No notes yet. Add your first note!",
                t.muted_style(),
            )));
        }
        for (index, note) in self.notes.iter().enumerate().rev() {
            lines.push(Line::from(Span::styled(note.text.clone(), t.text_style())));
            lines.push(Line::from(Span::styled(
                format!("Note {} \u{2022} {}", index + 1, note.added_on.format("%-m/%-d/%Y")),
                t.muted_style(),
            )));
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            chunks[2],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, action: Option<Action>) -> AppAction {
        if self.draft_focused {
            match key.code {
                KeyCode::Esc => self.draft_focused = false,
                KeyCode::Enter => {
                    self.add_note(Self::today());
                }
                code => {
                    self.draft.handle_key(code);
                }
            }
            return AppAction::None;
        }

        match action {
            Some(Action::Confirm) => self.draft_focused = true,
            Some(Action::Cancel) => return AppAction::Close,
            _ => {}
        }
        AppAction::None
    }

    fn handle_click(&mut self, column: u16, row: u16) -> AppAction {
        match self.hits.hit(column, row) {
            Some(NotesTarget::Draft) => self.draft_focused = true,
            Some(NotesTarget::AddButton) => {
                self.add_note(Self::today());
            }
            None => self.draft_focused = false,
        }
        AppAction::None
    }

    fn is_input_focused(&self) -> bool {
        self.draft_focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn type_text(app: &mut NotesApp, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), None);
        }
    }

    #[test]
    fn test_add_trims_and_clears_draft() {
        let mut app = NotesApp::new();
        type_text(&mut app, "  call mom ");
        assert!(app.add_note(day()));
        assert_eq!(app.notes()[0].text, "call mom");
        assert_eq!(app.notes()[0].added_on, day());
        assert_eq!(app.draft(), "");
    }

    #[test]
    fn test_blank_draft_is_not_added() {
        let mut app = NotesApp::new();
        type_text(&mut app, "   ");
        assert!(!app.add_note(day()));
        assert!(app.notes().is_empty());
        assert_eq!(app.draft(), "   ");
    }

    #[test]
    fn test_escape_unfocuses_then_cancel_closes() {
        let mut app = NotesApp::new();
        assert!(app.is_input_focused());
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), None);
        assert!(!app.is_input_focused());
        let action = app.handle_key(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            Some(Action::Cancel),
        );
        assert_eq!(action, AppAction::Close);
    }

    #[test]
    fn test_enter_adds_note() {
        let mut app = NotesApp::new();
        type_text(&mut app, "groceries");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), None);
        assert_eq!(app.notes().len(), 1);
        assert_eq!(app.notes()[0].text, "groceries");
    }
}
