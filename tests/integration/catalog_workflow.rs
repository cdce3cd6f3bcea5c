//! Catalog commands followed by reconciliation passes.

use super::test_utils::{temp_context, write_file};
use devmap::catalog::{create_language, create_project, list_templates, NewProject};
use devmap::error::ApiError;
use devmap::install::install_default;
use devmap::registry::{store, ProjectKey};
use devmap::sync::synchronize;
use tempfile::TempDir;

#[test]
fn created_project_survives_sync_unchanged() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    install_default(&ctx.registry_file, false).unwrap();

    let mut registry = store::load(&ctx.registry_file).unwrap();
    synchronize(&mut registry, &ctx).unwrap();
    create_language(&mut registry, &ctx, "Go").unwrap();

    let template = ctx.templates_dir("Go").join("service");
    write_file(&template.join("go.mod"), 40);
    write_file(&template.join("cmd").join("main.go"), 60);
    assert_eq!(list_templates(&ctx, "Go"), vec!["service"]);

    let created = create_project(
        &mut registry,
        &ctx,
        &NewProject {
            name: "Billing API".to_string(),
            language: "Go".to_string(),
            folder_name: None,
            template: Some("service".to_string()),
            init_git: false,
            create_language: false,
        },
    )
    .unwrap();
    assert_eq!(created.key, ProjectKey::new("Go", "billing-api"));
    assert_eq!(created.files_copied, 2);

    let before = std::fs::read(&ctx.registry_file).unwrap();
    let mut reloaded = store::load(&ctx.registry_file).unwrap();
    let report = synchronize(&mut reloaded, &ctx).unwrap();
    assert!(!report.changed(), "unexpected changes: {:?}", report);
    assert_eq!(std::fs::read(&ctx.registry_file).unwrap(), before);

    let project = reloaded.project(&created.key).unwrap();
    assert_eq!(project.size_bytes, 100);
    assert_eq!(project.created_by, "tester");
    assert_eq!(project.name, "Billing API");
}

#[test]
fn folder_collision_with_discovered_project_is_rejected() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    install_default(&ctx.registry_file, false).unwrap();
    std::fs::create_dir_all(ctx.projects_root.join("Rust").join("tool")).unwrap();

    let mut registry = store::load(&ctx.registry_file).unwrap();
    synchronize(&mut registry, &ctx).unwrap();

    let err = create_project(
        &mut registry,
        &ctx,
        &NewProject {
            name: "Tool".to_string(),
            language: "Rust".to_string(),
            folder_name: Some("tool".to_string()),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateProject { .. }));
}

#[test]
fn create_language_flag_registers_language() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    install_default(&ctx.registry_file, false).unwrap();
    let mut registry = store::load(&ctx.registry_file).unwrap();

    let created = create_project(
        &mut registry,
        &ctx,
        &NewProject {
            name: "kernel".to_string(),
            language: "C".to_string(),
            create_language: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert!(created.language_created);
    let reloaded = store::load(&ctx.registry_file).unwrap();
    assert!(reloaded.contains_language("C"));
    assert!(reloaded.contains_project(&ProjectKey::new("C", "kernel")));
}
