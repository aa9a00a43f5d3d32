//! Theme, wallpapers and style helpers
//!
//! Provides consistent styling for the phone chrome with support for
//! light, dark and colorless terminals.

use serde::{Deserialize, Serialize};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the phone
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Main accent color (titles, focused borders)
    pub primary: Color,
    /// Switch "on" color in the control center
    pub success: Color,
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    /// Phone bezel
    pub bezel: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    /// App overlay background
    pub app_background: Color,
    /// Lock screen background
    pub lock_background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            bezel: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            app_background: Color::Rgb(24, 24, 27),
            lock_background: Color::Rgb(79, 70, 229),
        }
    }

    /// Light theme - for light terminal backgrounds
    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            bezel: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            app_background: Color::White,
            lock_background: Color::Rgb(126, 34, 206),
        }
    }

    /// No-color theme - style helpers avoid setting fg/bg entirely
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            success: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            bezel: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            app_background: Color::Reset,
            lock_background: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    pub fn title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn emphasis_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    /// Style for a switch that is on
    pub fn switch_on_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(Color::Black)
            .bg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn bezel_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.bezel)
    }

    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Style for the selected icon, tile or row
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn app_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text).bg(self.app_background)
    }

    pub fn lock_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(Color::White).bg(self.lock_background)
    }

    pub fn error_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.error)
    }
}

/// Home screen wallpaper, rendered as a two-tone background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wallpaper {
    #[default]
    BlueStarryNight,
    ColorfulAbstract,
    MountainLandscape,
    DarkPattern,
    YellowLights,
    LakeAndTrees,
    MountainSunrays,
    RiverValley,
}

impl Wallpaper {
    pub const ALL: [Wallpaper; 8] = [
        Wallpaper::BlueStarryNight,
        Wallpaper::ColorfulAbstract,
        Wallpaper::MountainLandscape,
        Wallpaper::DarkPattern,
        Wallpaper::YellowLights,
        Wallpaper::LakeAndTrees,
        Wallpaper::MountainSunrays,
        Wallpaper::RiverValley,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Wallpaper::BlueStarryNight => "Blue starry night",
            Wallpaper::ColorfulAbstract => "Colorful abstract",
            Wallpaper::MountainLandscape => "Mountain landscape",
            Wallpaper::DarkPattern => "Dark pattern",
            Wallpaper::YellowLights => "Yellow lights",
            Wallpaper::LakeAndTrees => "Lake and trees",
            Wallpaper::MountainSunrays => "Mountain with sunrays",
            Wallpaper::RiverValley => "River between mountains",
        }
    }

    /// Top and bottom background colors.
    pub fn colors(&self) -> (Color, Color) {
        match self {
            Wallpaper::BlueStarryNight => (Color::Rgb(15, 23, 62), Color::Rgb(49, 46, 129)),
            Wallpaper::ColorfulAbstract => (Color::Rgb(190, 24, 93), Color::Rgb(234, 88, 12)),
            Wallpaper::MountainLandscape => (Color::Rgb(56, 97, 140), Color::Rgb(71, 85, 105)),
            Wallpaper::DarkPattern => (Color::Rgb(24, 24, 27), Color::Rgb(39, 39, 42)),
            Wallpaper::YellowLights => (Color::Rgb(113, 63, 18), Color::Rgb(202, 138, 4)),
            Wallpaper::LakeAndTrees => (Color::Rgb(20, 83, 45), Color::Rgb(14, 116, 144)),
            Wallpaper::MountainSunrays => (Color::Rgb(217, 119, 6), Color::Rgb(87, 83, 78)),
            Wallpaper::RiverValley => (Color::Rgb(22, 101, 52), Color::Rgb(30, 64, 175)),
        }
    }
}

impl FromStr for Wallpaper {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        Wallpaper::ALL
            .into_iter()
            .find(|w| w.name().to_lowercase() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown wallpaper: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("anything".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        let s = t.switch_on_style();
        assert!(s.fg.is_none());
        assert!(s.bg.is_none());
    }

    #[test]
    fn test_wallpaper_from_name() {
        assert_eq!(
            "lake and trees".parse::<Wallpaper>().unwrap(),
            Wallpaper::LakeAndTrees
        );
        assert_eq!(
            "Dark-Pattern".parse::<Wallpaper>().unwrap(),
            Wallpaper::DarkPattern
        );
        assert!("sunset".parse::<Wallpaper>().is_err());
    }
}
