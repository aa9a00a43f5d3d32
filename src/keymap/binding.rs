//! KeyBinding struct for mapping keys to actions
//!
//! Provides parsing of key strings like "shift+up", "ctrl+c", "k"

use super::Action;
use anyhow::{anyhow, bail, Result};
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "k", "pageup", "shift+down")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl ParsedKey {
    /// Fold terminal quirks so "K" and "shift+k" compare equal, and so a
    /// shifted symbol like '?' matches a binding written without shift.
    pub fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => Self {
                code,
                modifiers: modifiers.difference(KeyModifiers::SHIFT),
            },
            _ => Self { code, modifiers },
        }
    }
}

impl KeyBinding {
    /// Create a new key binding
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.parse() {
            Ok(parsed) => parsed == ParsedKey::normalized(code, modifiers),
            Err(_) => false,
        }
    }

    /// Parse the key string into KeyCode and KeyModifiers
    pub fn parse(&self) -> Result<ParsedKey> {
        parse_key_string(&self.key)
    }

    /// Get the display string for this binding (e.g., "Shift+↑")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse a key string like "ctrl+shift+n" into a normalized `ParsedKey`
pub fn parse_key_string(key: &str) -> Result<ParsedKey> {
    let key = key.trim();
    // A bare "+" is a key, not a separator.
    if key == "+" {
        return Ok(ParsedKey::normalized(KeyCode::Char('+'), KeyModifiers::NONE));
    }

    let parts: Vec<&str> = key.split('+').collect();
    let mut modifiers = KeyModifiers::NONE;

    for part in &parts[..parts.len() - 1] {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            other => bail!("Unknown modifier: {}", other),
        }
    }

    let code = parse_key_code(parts[parts.len() - 1])?;
    Ok(ParsedKey::normalized(code, modifiers))
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode> {
    let trimmed = key.trim();
    let lower = trimmed.to_lowercase();

    let code = match lower.as_str() {
        "up" | "arrow_up" => KeyCode::Up,
        "down" | "arrow_down" => KeyCode::Down,
        "left" | "arrow_left" => KeyCode::Left,
        "right" | "arrow_right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "page_up" | "pgup" => KeyCode::PageUp,
        "pagedown" | "page_down" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "plus" => KeyCode::Char('+'),
        "minus" => KeyCode::Char('-'),
        _ => {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                        if (1..=12).contains(&n) {
                            return Ok(KeyCode::F(n));
                        }
                    }
                    return Err(anyhow!("Unknown key: {}", trimmed));
                }
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "shift+up" -> "Shift+↑")
pub fn format_key_display(key: &str) -> String {
    if key.trim() == "+" {
        return "+".to_string();
    }
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "up" | "arrow_up" => "↑".to_string(),
                "down" | "arrow_down" => "↓".to_string(),
                "left" | "arrow_left" => "←".to_string(),
                "right" | "arrow_right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "pageup" | "page_up" | "pgup" => "PgUp".to_string(),
                "pagedown" | "page_down" | "pgdn" => "PgDn".to_string(),
                "plus" => "+".to_string(),
                "minus" => "-".to_string(),
                _ if part.chars().count() == 1 => part.to_uppercase(),
                _ => part,
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let parsed = parse_key_string("j").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('j'));
        assert_eq!(parsed.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_shift_arrow() {
        let parsed = parse_key_string("shift+up").unwrap();
        assert_eq!(parsed.code, KeyCode::Up);
        assert_eq!(parsed.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let parsed = parse_key_string("ctrl+c").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('c'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_plus_and_function_keys() {
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert!(parse_key_string("f13").is_err());
        assert!(parse_key_string("hyper+x").is_err());
    }

    #[test]
    fn test_uppercase_matches_shift_binding() {
        let binding = KeyBinding::new("shift+k", Action::SwipeUp);
        assert!(binding.matches(KeyCode::Char('K'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('K'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('k'), KeyModifiers::NONE));
    }

    #[test]
    fn test_shifted_symbol_matches_plain_binding() {
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("shift+up"), "Shift+↑");
        assert_eq!(format_key_display("ctrl+c"), "Ctrl+C");
        assert_eq!(format_key_display("pagedown"), "PgDn");
        assert_eq!(format_key_display("+"), "+");
    }

    #[test]
    fn test_key_binding_description() {
        let binding = KeyBinding::new("x", Action::CloseApp);
        assert_eq!(binding.get_description(), "Close app");
    }
}
