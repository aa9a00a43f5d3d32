//! Help Overlay Component
//!
//! Displays current keybindings and mouse gestures when the user presses '?'.

use crate::keymap::Keymap;
use crate::styles::theme;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const GESTURE_HELP: [(&str, &str); 4] = [
    ("Left drag", "Mouse swipe (30px)"),
    ("Right drag", "Touch swipe (50px)"),
    ("Click", "Open app / toggle / close"),
    ("Wheel", "Scroll (paused while dragging)"),
];

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();

        let popup_width = area.width.saturating_mul(9) / 10;
        let popup_width = popup_width.min(80);
        let popup_height = (area.height.saturating_mul(9) / 10).min(44);
        let popup_x = area.x + area.width.saturating_sub(popup_width) / 2;
        let popup_y = area.y + area.height.saturating_sub(popup_height) / 2;
        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let title = format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(2)])
            .split(inner_area);

        // Group bindings by category
        let bindings = keymap.all_bindings();
        let mut lines: Vec<Line> = vec![Line::from("")];
        let mut current_category = "";
        for binding in &bindings {
            let category = binding.action.category();
            if category != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(format!("  {} ", category), t.title_style())));
                current_category = category;
            }

            lines.push(Line::from(vec![
                Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                Span::styled(binding.get_description().to_string(), t.text_style()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  Mouse ", t.title_style())));
        for (gesture, description) in GESTURE_HELP {
            lines.push(Line::from(vec![
                Span::styled(format!("    {:12}", gesture), t.emphasis_style()),
                Span::styled(description, t.text_style()),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .alignment(Alignment::Left),
            chunks[0],
        );

        let footer_text = format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer_text)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[1],
        );

        Ok(())
    }
}
