//! Route table driven end to end against a temp base directory.

use devmap::cli::{map_error, Commands, RunContext};
use devmap::config::DevmapConfig;
use devmap::error::ApiError;
use devmap::registry::store;
use tempfile::TempDir;

fn run_context(test_dir: &TempDir) -> RunContext {
    let mut config = DevmapConfig::default();
    config.paths.base_dir = Some(test_dir.path().to_path_buf());
    config.user.name = Some("frank".to_string());
    RunContext::from_config(config, None, None).unwrap()
}

fn installed(test_dir: &TempDir) -> RunContext {
    let run = run_context(test_dir);
    run.execute(Some(&Commands::Install { force: false }))
        .unwrap();
    run
}

#[test]
fn bare_invocation_syncs_and_reports() {
    let test_dir = TempDir::new().unwrap();
    let run = installed(&test_dir);
    std::fs::create_dir_all(run.context().projects_root.join("Go").join("svc")).unwrap();

    let out = run.execute(None).unwrap();
    assert!(out.contains("Languages discovered (1):\n  + Go"));
    assert!(out.contains("Projects discovered (1):\n  + Go/svc"));

    let out = run.execute(None).unwrap();
    assert!(out.contains("already agree"));
}

#[test]
fn show_prints_persisted_document() {
    let test_dir = TempDir::new().unwrap();
    let run = installed(&test_dir);
    run.execute(Some(&Commands::AddLang {
        name: "Rust".to_string(),
    }))
    .unwrap();

    let out = run.execute(Some(&Commands::Show)).unwrap();
    let on_disk = std::fs::read_to_string(&run.context().registry_file).unwrap();
    assert_eq!(out, on_disk);
    assert!(out.contains("\"Rust\""));
}

#[test]
fn listing_commands_render_tables_and_json() {
    let test_dir = TempDir::new().unwrap();
    let run = installed(&test_dir);
    run.execute(Some(&Commands::New {
        lang: Some("Python".to_string()),
        name: Some("scraper".to_string()),
        folder: None,
        slug: false,
        git: false,
        template: None,
        create_lang: true,
    }))
    .unwrap();

    let out = run
        .execute(Some(&Commands::List {
            extended: true,
            format: "text".to_string(),
        }))
        .unwrap();
    assert!(out.contains("scraper"));
    assert!(out.contains("Created At"));
    assert!(out.contains("Total: 1 project(s)"));

    let out = run
        .execute(Some(&Commands::Users {
            format: "json".to_string(),
        }))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["users"], serde_json::json!(["frank"]));

    let out = run
        .execute(Some(&Commands::Languages {
            format: "xml".to_string(),
        }))
        .unwrap_err();
    assert!(matches!(out, ApiError::InvalidInput(_)));
}

#[test]
fn templates_command_does_not_need_registry() {
    let test_dir = TempDir::new().unwrap();
    let run = run_context(&test_dir);
    std::fs::create_dir_all(run.context().templates_dir("Go").join("api")).unwrap();

    let out = run
        .execute(Some(&Commands::Templates {
            lang: "Go".to_string(),
        }))
        .unwrap();
    assert_eq!(out, "Templates for Go:\n  - api");
    assert!(!run.context().registry_file.exists());
}

#[test]
fn unknown_language_error_suggests_add_lang() {
    let test_dir = TempDir::new().unwrap();
    let run = installed(&test_dir);
    let err = run
        .execute(Some(&Commands::New {
            lang: Some("Zig".to_string()),
            name: Some("x".to_string()),
            folder: None,
            slug: false,
            git: false,
            template: None,
            create_lang: false,
        }))
        .unwrap_err();
    assert!(map_error(&err).contains("devmap add-lang Zig"));
}

#[test]
fn malformed_registry_error_suggests_install() {
    let test_dir = TempDir::new().unwrap();
    let run = run_context(&test_dir);
    let path = run.context().registry_file.clone();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json").unwrap();

    let err: ApiError = store::load(&path).unwrap_err().into();
    assert!(map_error(&err).contains("devmap install"));
}
