use crate::apps::settings::{clamp_screen_height, DEFAULT_SCREEN_HEIGHT};
use crate::keymap::Keymap;
use crate::state::{ControlToggleSet, Thresholds, MOUSE_THRESHOLD_PX, TOUCH_THRESHOLD_PX};
use crate::styles::Wallpaper;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Home screen wallpaper
    #[serde(default)]
    pub wallpaper: Wallpaper,
    /// Screen height in percent (70..=130)
    #[serde(default = "default_screen_height")]
    pub screen_height: u8,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
    /// Swipe thresholds and terminal row scaling
    #[serde(default)]
    pub gestures: GestureConfig,
    /// Initial control center switches
    #[serde(default)]
    pub controls: ControlToggleSet,
}

/// Gesture tuning.
///
/// Thresholds are in logical px; `row_height_px` converts terminal rows
/// into logical px so a short mouse drag in the terminal can reach them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub touch_threshold_px: f32,
    pub mouse_threshold_px: f32,
    pub row_height_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_threshold_px: TOUCH_THRESHOLD_PX,
            mouse_threshold_px: MOUSE_THRESHOLD_PX,
            row_height_px: default_row_height(),
        }
    }
}

impl GestureConfig {
    /// Thresholds for the state machine.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            touch: self.touch_threshold_px,
            mouse: self.mouse_threshold_px,
        }
    }

    /// Convert a terminal row into a logical px coordinate.
    pub fn row_to_px(&self, row: u16) -> f32 {
        f32::from(row) * self.row_height_px
    }

    /// Replace non-positive or non-finite values with defaults.
    fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f32, fallback: f32, name: &str| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                warn!("Invalid gestures.{} = {}, using {}", name, value, fallback);
                fallback
            }
        };
        Self {
            touch_threshold_px: pick(
                self.touch_threshold_px,
                defaults.touch_threshold_px,
                "touch_threshold_px",
            ),
            mouse_threshold_px: pick(
                self.mouse_threshold_px,
                defaults.mouse_threshold_px,
                "mouse_threshold_px",
            ),
            row_height_px: pick(self.row_height_px, defaults.row_height_px, "row_height_px"),
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_screen_height() -> u8 {
    DEFAULT_SCREEN_HEIGHT
}

fn default_row_height() -> f32 {
    16.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            wallpaper: Wallpaper::default(),
            screen_height: default_screen_height(),
            keymap: Keymap::default(),
            gestures: GestureConfig::default(),
            controls: ControlToggleSet::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config.normalized())
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Clamp values a hand-edited file may have pushed out of range
    fn normalized(mut self) -> Self {
        self.gestures = self.gestures.sanitized();
        self.controls = self.controls.normalized();
        let height = clamp_screen_height(i32::from(self.screen_height));
        if height != self.screen_height {
            warn!(
                "screen_height {} out of range, using {}",
                self.screen_height, height
            );
            self.screen_height = height;
        }
        self
    }
}
