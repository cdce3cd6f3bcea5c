//! Home and XDG config locations.

use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// The user's home directory.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// `$XDG_CONFIG_HOME`, else the platform config directory (`~/.config` on Linux).
pub fn config_home() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Replace a leading `~` with the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
