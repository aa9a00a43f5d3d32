use super::component::{Component, ComponentAction, PhoneView};
use super::phone_frame::StatusBar;
use crate::apps::{AppIcon, DOCK_APPS, HOME_APPS};
use crate::keymap::Action;
use crate::state::AppId;
use crate::styles::{theme, ThemeType, Wallpaper};
use crate::utils::layout::HitAreas;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Icons per row in the grid and the dock
pub const ICONS_PER_ROW: usize = 4;
const ICON_HEIGHT: u16 = 3;

/// Every selectable icon: the grid row by row, then the dock
pub fn all_icons() -> impl Iterator<Item = &'static AppIcon> {
    HOME_APPS.iter().chain(DOCK_APPS.iter())
}

/// Fill an area with the two-tone wallpaper background.
pub fn paint_wallpaper(frame: &mut Frame, area: Rect, wallpaper: Wallpaper) {
    if theme().theme_type == ThemeType::NoColor {
        return;
    }
    let (top, bottom) = wallpaper.colors();
    let split = area.height / 2;
    let upper = Rect::new(area.x, area.y, area.width, split);
    let lower = Rect::new(area.x, area.y + split, area.width, area.height - split);
    frame.render_widget(Block::default().style(Style::default().bg(top)), upper);
    frame.render_widget(Block::default().style(Style::default().bg(bottom)), lower);
}

/// Home screen: icon grid, dock and keyboard selection
#[derive(Debug)]
pub struct HomeScreen {
    selected: usize,
    hits: HitAreas<usize>,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            selected: 0,
            hits: HitAreas::new(),
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_icon(&self) -> Option<&'static AppIcon> {
        all_icons().nth(self.selected)
    }

    fn icon_count() -> usize {
        HOME_APPS.len() + DOCK_APPS.len()
    }

    fn open(index: usize) -> ComponentAction {
        all_icons()
            .nth(index)
            .map_or(ComponentAction::None, |icon| {
                ComponentAction::OpenApp(AppId::new(icon.name))
            })
    }

    fn render_icon(&mut self, frame: &mut Frame, area: Rect, index: usize, icon: &AppIcon) {
        let t = theme();
        let name_style = if index == self.selected {
            t.highlight_style()
        } else {
            t.text_style()
        };
        let glyph_style = if t.theme_type == ThemeType::NoColor {
            Style::default()
        } else {
            Style::default().bg(icon.color)
        };
        let lines = vec![
            Line::from(Span::styled(format!(" {} ", icon.glyph), glyph_style)),
            Line::from(Span::styled(icon.name, name_style)),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        self.hits.push(area, index);
    }

    fn render_row(&mut self, frame: &mut Frame, area: Rect, first_index: usize, icons: &[AppIcon]) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); ICONS_PER_ROW])
            .split(area);
        for (offset, (icon, cell)) in icons.iter().zip(cells.iter()).enumerate() {
            self.render_icon(frame, *cell, first_index + offset, icon);
        }
    }
}

impl Component for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, view: &PhoneView) -> Result<()> {
        let t = theme();
        self.hits.clear();
        paint_wallpaper(frame, area, view.wallpaper);

        let rows = HOME_APPS.len().div_ceil(ICONS_PER_ROW);
        let grid_height = ICON_HEIGHT * u16::try_from(rows).unwrap_or(u16::MAX);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // Status bar
                Constraint::Length(1),           // Spacer
                Constraint::Length(grid_height), // Grid
                Constraint::Min(0),
                Constraint::Length(4),           // Dock
            ])
            .split(area);

        StatusBar::render(frame, chunks[0], view.now, view.controls);

        let grid_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(ICON_HEIGHT); rows])
            .split(chunks[2]);
        for (row, row_area) in grid_rows.iter().enumerate() {
            let start = row * ICONS_PER_ROW;
            let end = (start + ICONS_PER_ROW).min(HOME_APPS.len());
            self.render_row(frame, *row_area, start, &HOME_APPS[start..end]);
        }

        let dock_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let dock_inner = dock_block.inner(chunks[4]);
        frame.render_widget(dock_block, chunks[4]);
        self.render_row(frame, dock_inner, HOME_APPS.len(), &DOCK_APPS);

        Ok(())
    }

    fn handle_action(&mut self, action: Action, _view: &PhoneView) -> ComponentAction {
        let count = Self::icon_count();
        let before = self.selected;
        match action {
            Action::MoveLeft => self.selected = self.selected.saturating_sub(1),
            Action::MoveRight => self.selected = (self.selected + 1).min(count - 1),
            Action::MoveUp => self.selected = self.selected.saturating_sub(ICONS_PER_ROW),
            Action::MoveDown => {
                if self.selected + ICONS_PER_ROW < count {
                    self.selected += ICONS_PER_ROW;
                }
            }
            Action::Confirm => return Self::open(self.selected),
            _ => return ComponentAction::None,
        }
        if before == self.selected {
            ComponentAction::None
        } else {
            ComponentAction::Update
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> ComponentAction {
        match self.hits.hit(column, row) {
            Some(index) => {
                self.selected = index;
                Self::open(index)
            }
            None => ComponentAction::None,
        }
    }
}
