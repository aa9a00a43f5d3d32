use super::component::{Component, ComponentAction, PhoneView};
use super::phone_frame::StatusBar;
use crate::keymap::Action;
use crate::state::{ControlSwitch, MAX_BRIGHTNESS};
use crate::styles::theme;
use crate::utils::layout::HitAreas;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Brightness change for one key press
pub const BRIGHTNESS_STEP: i32 = 10;

/// Index of the brightness row in the selection order
const BRIGHTNESS_INDEX: usize = ControlSwitch::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlTarget {
    Switch(ControlSwitch),
    Brightness,
}

/// Map a column on the brightness bar to a brightness value.
pub fn brightness_at(bar: Rect, column: u16) -> i32 {
    let offset = i32::from(column.saturating_sub(bar.x));
    let span = i32::from(bar.width.saturating_sub(1)).max(1);
    offset * i32::from(MAX_BRIGHTNESS) / span
}

/// Control center: switch tiles and the brightness bar
#[derive(Debug)]
pub struct ControlCenter {
    selected: usize,
    hits: HitAreas<ControlTarget>,
    brightness_bar: Rect,
}

impl Default for ControlCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlCenter {
    pub fn new() -> Self {
        Self {
            selected: 0,
            hits: HitAreas::new(),
            brightness_bar: Rect::default(),
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    fn render_tile(&mut self, frame: &mut Frame, area: Rect, index: usize, switch: ControlSwitch, on: bool) {
        let t = theme();
        let border_style = if index == self.selected {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let body_style = if on { t.switch_on_style() } else { t.muted_style() };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let lines = vec![
            Line::from(Span::styled(format!(" {} ", switch.icon()), body_style)),
            Line::from(Span::styled(switch.label(), t.text_style())),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            area,
        );
        self.hits.push(area, ControlTarget::Switch(switch));
    }

    fn render_brightness(&mut self, frame: &mut Frame, area: Rect, brightness: u8) {
        let t = theme();
        let border_style = if self.selected == BRIGHTNESS_INDEX {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" \u{2600} Brightness {}% ", brightness));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = usize::from(inner.width);
        let filled = width * usize::from(brightness) / usize::from(MAX_BRIGHTNESS);
        let bar = Line::from(vec![
            Span::styled("\u{2588}".repeat(filled), t.emphasis_style()),
            Span::styled("\u{2591}".repeat(width - filled), t.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(bar), inner);
        self.brightness_bar = inner;
        self.hits.push(inner, ControlTarget::Brightness);
    }
}

impl Component for ControlCenter {
    fn render(&mut self, frame: &mut Frame, area: Rect, view: &PhoneView) -> Result<()> {
        let t = theme();
        self.hits.clear();
        frame.render_widget(Block::default().style(t.app_style()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Spacer
                Constraint::Length(4), // Tiles row 1
                Constraint::Length(4), // Tiles row 2
                Constraint::Length(3), // Brightness
                Constraint::Min(0),
                Constraint::Length(1), // Hint
            ])
            .split(area);

        StatusBar::render(frame, chunks[0], view.now, view.controls);

        for (row, row_area) in [chunks[2], chunks[3]].into_iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 2); 2])
                .split(row_area);
            for (col, cell) in cells.iter().enumerate() {
                let index = row * 2 + col;
                let switch = ControlSwitch::ALL[index];
                self.render_tile(frame, *cell, index, switch, view.controls.get(switch));
            }
        }

        self.render_brightness(frame, chunks[4], view.controls.brightness);

        frame.render_widget(
            Paragraph::new(Span::styled("\u{2191} Swipe up to close", t.muted_style()))
                .alignment(Alignment::Center),
            chunks[6],
        );
        Ok(())
    }

    fn handle_action(&mut self, action: Action, view: &PhoneView) -> ComponentAction {
        let brightness = i32::from(view.controls.brightness);
        match action {
            Action::MoveLeft if self.selected == BRIGHTNESS_INDEX => {
                ComponentAction::SetBrightness(brightness - BRIGHTNESS_STEP)
            }
            Action::MoveRight if self.selected == BRIGHTNESS_INDEX => {
                ComponentAction::SetBrightness(brightness + BRIGHTNESS_STEP)
            }
            Action::MoveLeft if self.selected % 2 == 1 => {
                self.selected -= 1;
                ComponentAction::Update
            }
            Action::MoveRight if self.selected % 2 == 0 => {
                self.selected += 1;
                ComponentAction::Update
            }
            Action::MoveUp if self.selected == BRIGHTNESS_INDEX => {
                self.selected = 2;
                ComponentAction::Update
            }
            Action::MoveUp if self.selected >= 2 => {
                self.selected -= 2;
                ComponentAction::Update
            }
            Action::MoveDown if self.selected < 2 => {
                self.selected += 2;
                ComponentAction::Update
            }
            Action::MoveDown if self.selected < BRIGHTNESS_INDEX => {
                self.selected = BRIGHTNESS_INDEX;
                ComponentAction::Update
            }
            Action::Confirm if self.selected < BRIGHTNESS_INDEX => {
                ComponentAction::Toggle(ControlSwitch::ALL[self.selected])
            }
            _ => ComponentAction::None,
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> ComponentAction {
        match self.hits.hit(column, row) {
            Some(ControlTarget::Switch(switch)) => {
                if let Some(index) = ControlSwitch::ALL.iter().position(|s| *s == switch) {
                    self.selected = index;
                }
                ComponentAction::Toggle(switch)
            }
            Some(ControlTarget::Brightness) => {
                self.selected = BRIGHTNESS_INDEX;
                ComponentAction::SetBrightness(brightness_at(self.brightness_bar, column))
            }
            None => ComponentAction::None,
        }
    }
}
