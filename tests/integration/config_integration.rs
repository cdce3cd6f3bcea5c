//! Layered configuration resolved against an isolated HOME/XDG environment.

use super::test_utils::with_xdg_env;
use devmap::config::{ConfigLoader, DevmapConfig};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn defaults_resolve_under_home() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let home = test_dir.path().join("home");
        let config = ConfigLoader::load().unwrap();
        let ctx = config.resolve_context().unwrap();

        assert_eq!(ctx.projects_root, home.join("Projects"));
        assert_eq!(ctx.registry_file, home.join(".config/devmap/devmap.json"));
        assert_eq!(ctx.templates_root, home.join(".config/devmap/templates"));
    });
}

#[test]
fn global_file_sets_paths_and_user() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let global_dir = test_dir.path().join("config").join("devmap");
        std::fs::create_dir_all(&global_dir).unwrap();
        std::fs::write(
            global_dir.join("config.toml"),
            format!(
                "[paths]\nbase_dir = \"{}\"\nprojects_path = \"code\"\n\n[user]\nname = \"dana\"\n",
                test_dir.path().join("base").display()
            ),
        )
        .unwrap();

        assert_eq!(
            ConfigLoader::global_config_path(),
            Some(global_dir.join("config.toml"))
        );
        let ctx = ConfigLoader::load().unwrap().resolve_context().unwrap();
        assert_eq!(ctx.projects_root, test_dir.path().join("base").join("code"));
        assert_eq!(ctx.user, "dana");
    });
}

#[test]
fn explicit_file_ignores_global_file() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let global_dir = test_dir.path().join("config").join("devmap");
        std::fs::create_dir_all(&global_dir).unwrap();
        std::fs::write(
            global_dir.join("config.toml"),
            "[paths]\nprojects_path = \"from-global\"\n",
        )
        .unwrap();
        let explicit = test_dir.path().join("explicit.toml");
        std::fs::write(&explicit, "[paths]\nregistry_file = \"reg.json\"\n").unwrap();

        let config = ConfigLoader::load_from_file(&explicit).unwrap();
        assert_eq!(config.paths.projects_path, PathBuf::from("Projects"));
        assert_eq!(config.paths.registry_file, PathBuf::from("reg.json"));
    });
}

#[test]
fn effective_config_round_trips_through_toml() {
    let mut config = DevmapConfig::default();
    config.paths.base_dir = Some(PathBuf::from("/srv/dev"));
    config.user.name = Some("erin".to_string());

    let text = config.to_toml().unwrap();
    let parsed: DevmapConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.paths.base_dir, config.paths.base_dir);
    assert_eq!(parsed.user.name, config.user.name);
    assert_eq!(parsed.logging.level, "warn");
}
