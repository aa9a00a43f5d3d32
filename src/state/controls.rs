//! Control center switches that persist across screen changes.

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest brightness level.
pub const MAX_BRIGHTNESS: u8 = 100;

/// The boolean switches of the control center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlSwitch {
    Airplane,
    Wifi,
    Bluetooth,
    MobileData,
}

impl ControlSwitch {
    /// All switches in the order the control center lays them out.
    pub const ALL: [ControlSwitch; 4] = [
        ControlSwitch::Airplane,
        ControlSwitch::Wifi,
        ControlSwitch::Bluetooth,
        ControlSwitch::MobileData,
    ];

    /// Tile label shown in the control center.
    pub fn label(&self) -> &'static str {
        match self {
            ControlSwitch::Airplane => "Airplane Mode",
            ControlSwitch::Wifi => "Wi-Fi",
            ControlSwitch::Bluetooth => "Bluetooth",
            ControlSwitch::MobileData => "Mobile Data",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ControlSwitch::Airplane => "\u{2708}",   // ✈
            ControlSwitch::Wifi => "\u{1F4F6}",      // 📶
            ControlSwitch::Bluetooth => "\u{1F4F1}", // 📱
            ControlSwitch::MobileData => "\u{1F4E1}", // 📡
        }
    }
}

impl fmt::Display for ControlSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ControlSwitch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "airplane" | "airplanemode" => Ok(ControlSwitch::Airplane),
            "wifi" => Ok(ControlSwitch::Wifi),
            "bluetooth" => Ok(ControlSwitch::Bluetooth),
            "mobiledata" | "cellular" => Ok(ControlSwitch::MobileData),
            _ => Err(anyhow!("Unknown control switch: {}", s)),
        }
    }
}

/// Named switches and the brightness level shown in the control center.
///
/// Lives for the whole session; only `toggle` and `set_brightness` mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlToggleSet {
    pub airplane: bool,
    pub wifi: bool,
    pub bluetooth: bool,
    pub mobile_data: bool,
    /// Screen brightness, always within `0..=100`.
    pub brightness: u8,
}

impl Default for ControlToggleSet {
    fn default() -> Self {
        Self {
            airplane: false,
            wifi: true,
            bluetooth: true,
            mobile_data: true,
            brightness: 75,
        }
    }
}

impl ControlToggleSet {
    /// Read a switch.
    pub fn get(&self, switch: ControlSwitch) -> bool {
        match switch {
            ControlSwitch::Airplane => self.airplane,
            ControlSwitch::Wifi => self.wifi,
            ControlSwitch::Bluetooth => self.bluetooth,
            ControlSwitch::MobileData => self.mobile_data,
        }
    }

    fn slot_mut(&mut self, switch: ControlSwitch) -> &mut bool {
        match switch {
            ControlSwitch::Airplane => &mut self.airplane,
            ControlSwitch::Wifi => &mut self.wifi,
            ControlSwitch::Bluetooth => &mut self.bluetooth,
            ControlSwitch::MobileData => &mut self.mobile_data,
        }
    }

    /// Flip a switch and return its new value.
    pub fn toggle(&mut self, switch: ControlSwitch) -> bool {
        let slot = self.slot_mut(switch);
        *slot = !*slot;
        *slot
    }

    /// Store a brightness level, clamped to `0..=100`, and return the stored value.
    pub fn set_brightness(&mut self, value: i32) -> u8 {
        self.brightness = value.clamp(0, i32::from(MAX_BRIGHTNESS)) as u8;
        self.brightness
    }

    /// Clamp a deserialized brightness back into range.
    pub(crate) fn normalized(mut self) -> Self {
        self.brightness = self.brightness.min(MAX_BRIGHTNESS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let controls = ControlToggleSet::default();
        assert!(!controls.airplane);
        assert!(controls.wifi);
        assert!(controls.bluetooth);
        assert!(controls.mobile_data);
        assert_eq!(controls.brightness, 75);
    }

    #[test]
    fn test_toggle_flips_only_one_switch() {
        let mut controls = ControlToggleSet::default();
        assert!(controls.toggle(ControlSwitch::Airplane));
        assert!(controls.airplane);
        assert!(controls.wifi);
        assert!(!controls.toggle(ControlSwitch::Airplane));
        assert!(!controls.airplane);
    }

    #[test]
    fn test_brightness_is_clamped() {
        let mut controls = ControlToggleSet::default();
        assert_eq!(controls.set_brightness(150), 100);
        assert_eq!(controls.set_brightness(-5), 0);
        assert_eq!(controls.set_brightness(42), 42);
        assert_eq!(controls.brightness, 42);
    }

    #[test]
    fn test_parse_switch_names() {
        assert_eq!("wifi".parse::<ControlSwitch>().unwrap(), ControlSwitch::Wifi);
        assert_eq!("Wi-Fi".parse::<ControlSwitch>().unwrap(), ControlSwitch::Wifi);
        assert_eq!(
            "mobileData".parse::<ControlSwitch>().unwrap(),
            ControlSwitch::MobileData
        );
        assert_eq!(
            "mobile_data".parse::<ControlSwitch>().unwrap(),
            ControlSwitch::MobileData
        );
        assert!("brightness".parse::<ControlSwitch>().is_err());
    }
}
