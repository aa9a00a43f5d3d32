//! Settings: screen height, wallpaper picker and a link to About.

use super::{AppAction, AppContext, PhoneApp};
use crate::keymap::Action;
use crate::state::AppId;
use crate::styles::{theme, Wallpaper};
use crate::utils::layout::HitAreas;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const MIN_SCREEN_HEIGHT: u8 = 70;
pub const MAX_SCREEN_HEIGHT: u8 = 130;
pub const DEFAULT_SCREEN_HEIGHT: u8 = 100;
/// Step applied by one left/right press on the height slider.
pub const SCREEN_HEIGHT_STEP: i32 = 5;

/// Clamp a requested screen height (percent) into the supported range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_screen_height(value: i32) -> u8 {
    value.clamp(i32::from(MIN_SCREEN_HEIGHT), i32::from(MAX_SCREEN_HEIGHT)) as u8
}

/// Selectable rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsRow {
    ScreenHeight,
    Wallpaper(Wallpaper),
    About,
}

impl SettingsRow {
    fn all() -> Vec<SettingsRow> {
        let mut rows = vec![SettingsRow::ScreenHeight];
        rows.extend(Wallpaper::ALL.into_iter().map(SettingsRow::Wallpaper));
        rows.push(SettingsRow::About);
        rows
    }
}

pub struct SettingsApp {
    rows: Vec<SettingsRow>,
    selected: usize,
    screen_height: u8,
    wallpaper: Wallpaper,
    hits: HitAreas<SettingsRow>,
}

impl Default for SettingsApp {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsApp {
    pub fn new() -> Self {
        Self {
            rows: SettingsRow::all(),
            selected: 0,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            wallpaper: Wallpaper::default(),
            hits: HitAreas::new(),
        }
    }

    /// Screen height last seen by this app (updated on render).
    pub fn screen_height(&self) -> u8 {
        self.screen_height
    }

    fn selected_row(&self) -> SettingsRow {
        self.rows[self.selected.min(self.rows.len() - 1)]
    }

    fn adjust_height(&mut self, steps: i32) -> AppAction {
        let height = clamp_screen_height(i32::from(self.screen_height) + steps * SCREEN_HEIGHT_STEP);
        if height == self.screen_height {
            return AppAction::None;
        }
        self.screen_height = height;
        AppAction::SetScreenHeight(height)
    }

    fn activate(&mut self, row: SettingsRow) -> AppAction {
        match row {
            SettingsRow::ScreenHeight => AppAction::None,
            SettingsRow::Wallpaper(wallpaper) => {
                self.wallpaper = wallpaper;
                AppAction::SetWallpaper(wallpaper)
            }
            SettingsRow::About => AppAction::OpenApp(AppId::new("About")),
        }
    }

    fn slider(&self, width: usize) -> String {
        let span = usize::from(MAX_SCREEN_HEIGHT - MIN_SCREEN_HEIGHT);
        let pos = usize::from(self.screen_height - MIN_SCREEN_HEIGHT) * width.saturating_sub(1) / span;
        (0..width)
            .map(|i| if i == pos { '\u{25CF}' } else { '\u{2500}' })
            .collect()
    }
}

impl PhoneApp for SettingsApp {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &AppContext) {
        let t = theme();
        self.screen_height = ctx.screen_height;
        self.wallpaper = ctx.wallpaper;
        self.hits.clear();

        let mut lines = Vec::new();
        let mut row_y = area.y;
        let mut push_line = |lines: &mut Vec<Line<'static>>, line: Line<'static>| {
            lines.push(line);
            row_y += 1;
            row_y - 1
        };

        push_line(&mut lines, Line::from(Span::styled("Display", t.title_style())));
        for (index, row) in self.rows.clone().into_iter().enumerate() {
            let selected = index == self.selected;
            let style = if selected { t.highlight_style() } else { t.text_style() };
            let line = match row {
                SettingsRow::ScreenHeight => Line::from(vec![
                    Span::styled(format!("Screen height {:>3}% ", self.screen_height), style),
                    Span::styled(self.slider(12), t.emphasis_style()),
                ]),
                SettingsRow::Wallpaper(wallpaper) => {
                    let (top, bottom) = wallpaper.colors();
                    let marker = if wallpaper == self.wallpaper { "\u{2713}" } else { " " };
                    Line::from(vec![
                        Span::styled("\u{2588}", Style::default().fg(top)),
                        Span::styled("\u{2588} ", Style::default().fg(bottom)),
                        Span::styled(format!("{} {}", marker, wallpaper.name()), style),
                    ])
                }
                SettingsRow::About => Line::from(Span::styled("About  \u{203A}", style)),
            };
            if row == SettingsRow::About || index == 1 {
                let heading = if row == SettingsRow::About { "General" } else { "Wallpaper" };
                push_line(&mut lines, Line::from(""));
                push_line(&mut lines, Line::from(Span::styled(heading, t.title_style())));
            }
            let y = push_line(&mut lines, line);
            if y < area.bottom() {
                self.hits.push(Rect::new(area.x, y, area.width, 1), row);
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_key(&mut self, _key: KeyEvent, action: Option<Action>) -> AppAction {
        match action {
            Some(Action::MoveUp) => {
                self.selected = self.selected.saturating_sub(1);
                AppAction::None
            }
            Some(Action::MoveDown) => {
                self.selected = (self.selected + 1).min(self.rows.len() - 1);
                AppAction::None
            }
            Some(Action::MoveLeft) if self.selected_row() == SettingsRow::ScreenHeight => {
                self.adjust_height(-1)
            }
            Some(Action::MoveRight) if self.selected_row() == SettingsRow::ScreenHeight => {
                self.adjust_height(1)
            }
            Some(Action::Confirm) => self.activate(self.selected_row()),
            Some(Action::Cancel) => AppAction::Close,
            _ => AppAction::None,
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> AppAction {
        let Some(target) = self.hits.hit(column, row) else {
            return AppAction::None;
        };
        if let Some(index) = self.rows.iter().position(|r| *r == target) {
            self.selected = index;
        }
        self.activate(target)
    }
}
