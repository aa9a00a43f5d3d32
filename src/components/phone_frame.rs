//! Phone bezel and status bar
//!
//! The bezel is sized from the terminal area and the configured screen
//! height; everything else is drawn inside the screen rect it returns.

use crate::state::{ControlSwitch, ControlToggleSet};
use crate::styles::theme;
use crate::utils::layout::center_rect;
use chrono::{DateTime, Local};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Screen width in cells at 100% height
pub const BASE_SCREEN_WIDTH: u16 = 40;
/// Screen height in cells at 100% height
pub const BASE_SCREEN_HEIGHT: u16 = 30;

/// Brightness below which the screen is drawn dimmed
pub const DIM_BELOW: u8 = 40;

pub struct PhoneFrame;

impl PhoneFrame {
    /// Bezel rect for a terminal area and a screen height in percent.
    pub fn bezel_area(area: Rect, screen_height_pct: u8) -> Rect {
        let height = u32::from(BASE_SCREEN_HEIGHT) * u32::from(screen_height_pct) / 100 + 2;
        let height = u16::try_from(height).unwrap_or(u16::MAX);
        center_rect(area, BASE_SCREEN_WIDTH + 2, height)
    }

    /// Draw the bezel and return the screen area inside it.
    pub fn render(frame: &mut Frame, area: Rect, screen_height_pct: u8) -> Rect {
        let t = theme();
        let bezel = Self::bezel_area(area, screen_height_pct);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(t.bezel_style());
        let screen = block.inner(bezel);
        frame.render_widget(block, bezel);
        screen
    }

    /// Dim the screen when brightness is low.
    pub fn apply_brightness(frame: &mut Frame, screen: Rect, brightness: u8) {
        if brightness < DIM_BELOW {
            frame
                .buffer_mut()
                .set_style(screen, Style::default().add_modifier(Modifier::DIM));
        }
    }
}

/// Top line of the screen: clock and connectivity icons
pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, now: DateTime<Local>, controls: &ControlToggleSet) {
        let t = theme();
        let clock = now.format("%-I:%M").to_string();

        let mut icons: Vec<&str> = Vec::new();
        if controls.get(ControlSwitch::Airplane) {
            icons.push(ControlSwitch::Airplane.icon());
        } else {
            if controls.get(ControlSwitch::MobileData) {
                icons.push("\u{2582}\u{2584}\u{2586}");
            }
            if controls.get(ControlSwitch::Wifi) {
                icons.push(ControlSwitch::Wifi.icon());
            }
        }
        if controls.get(ControlSwitch::Bluetooth) {
            icons.push(ControlSwitch::Bluetooth.icon());
        }
        icons.push("\u{25AE}\u{25AE}\u{25AE}\u{25AF}");
        let right = icons.join(" ");

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", clock), t.text_style())),
            halves[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(format!("{} ", right), t.text_style()))
                .alignment(Alignment::Right),
            halves[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezel_follows_screen_height() {
        let area = Rect::new(0, 0, 120, 60);
        let normal = PhoneFrame::bezel_area(area, 100);
        assert_eq!(normal.height, BASE_SCREEN_HEIGHT + 2);
        assert_eq!(normal.width, BASE_SCREEN_WIDTH + 2);

        let tall = PhoneFrame::bezel_area(area, 130);
        assert_eq!(tall.height, 39 + 2);
    }

    #[test]
    fn test_bezel_shrinks_to_terminal() {
        let area = Rect::new(0, 0, 20, 10);
        let bezel = PhoneFrame::bezel_area(area, 100);
        assert!(bezel.width <= 20 && bezel.height <= 10);
    }
}
