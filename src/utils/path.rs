use std::path::{Path, PathBuf};

/// Environment variable that replaces the config directory (used by tests and demos)
pub const CONFIG_DIR_ENV: &str = "PEEKPHONE_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/peekphone regardless of OS,
/// unless `PEEKPHONE_CONFIG_DIR` is set)
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("peekphone"),
    }
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the log directory (<cache dir>/peekphone, falling back to the home directory)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("peekphone")
}

/// Format a path for display (show ~ for home)
pub fn format_path_for_display(path: &Path) -> String {
    let home_dir = get_home_dir();

    if let Ok(relative) = path.strip_prefix(&home_dir) {
        if relative.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", relative.to_string_lossy())
        }
    } else {
        path.to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_file_name() {
        assert_eq!(
            get_config_path().file_name().and_then(|n| n.to_str()),
            Some("config.toml")
        );
    }

    #[test]
    fn test_format_path_for_display() {
        let home = get_home_dir();
        assert_eq!(format_path_for_display(&home), "~");
        assert_eq!(
            format_path_for_display(&home.join(".config/peekphone")),
            "~/.config/peekphone"
        );
        assert_eq!(
            format_path_for_display(Path::new("/definitely/not/home")),
            "/definitely/not/home"
        );
    }
}
