//! Shared test utilities for integration tests
//!
//! Provides setup for projects trees and registry files, plus serialized
//! access to HOME/XDG environment variables for config tests.

use devmap::context::DevmapContext;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
    user: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
            user: std::env::var("USER").ok(),
        }
    }

    fn restore_var(name: &str, value: Option<String>) {
        match value {
            Some(orig) => std::env::set_var(name, orig),
            None => std::env::remove_var(name),
        }
    }

    fn restore(self) {
        Self::restore_var("HOME", self.home);
        Self::restore_var("XDG_CONFIG_HOME", self.xdg_config_home);
        Self::restore_var("USER", self.user);
    }
}

/// Run `f` with HOME at `<test_dir>/home` and XDG_CONFIG_HOME at `<test_dir>/config`.
///
/// The original environment is restored afterwards. A global mutex keeps
/// parallel tests from observing each other's variables.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    let test_config_home = test_dir.path().join("config");
    std::fs::create_dir_all(&test_home).unwrap();
    std::fs::create_dir_all(&test_config_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());

    let result = f();

    env_state.restore();

    result
}

/// Context rooted in a temp dir: `<tmp>/Projects`, `<tmp>/devmap.json`, `<tmp>/templates`.
pub fn temp_context(test_dir: &TempDir) -> DevmapContext {
    DevmapContext::new(
        test_dir.path().join("Projects"),
        test_dir.path().join("devmap.json"),
    )
    .with_templates_root(test_dir.path().join("templates"))
    .with_user("tester")
}

/// Write a file of `len` zero bytes, creating parents.
pub fn write_file(path: &Path, len: usize) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, vec![0u8; len]).unwrap();
}

/// Mark a directory as version controlled.
pub fn add_vcs_marker(project_dir: &Path) -> PathBuf {
    let marker = project_dir.join(".git");
    std::fs::create_dir_all(&marker).unwrap();
    marker
}
