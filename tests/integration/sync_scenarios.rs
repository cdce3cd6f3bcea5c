//! End-to-end reconciliation: registry file on disk, projects tree on disk.

use super::test_utils::{add_vcs_marker, temp_context, write_file};
use devmap::probe;
use devmap::registry::{store, timestamp, ProjectKey};
use devmap::sync::synchronize;
use std::fs;
use tempfile::TempDir;

fn write_registry(path: &std::path::Path, json: &str) {
    fs::write(path, json).unwrap();
}

#[test]
fn declared_project_without_directory_is_materialized() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    write_registry(
        &ctx.registry_file,
        r#"{"Languages": ["Go"], "Projects": [{"name": "Service", "folderName": "svc", "lang": "Go",
            "created_by": "alice", "created_at": "09:15 01-03-2024", "size": 777, "git": true}],
            "Users": ["alice"]}"#,
    );

    let mut registry = store::load(&ctx.registry_file).unwrap();
    let report = synchronize(&mut registry, &ctx).unwrap();

    let dir = ctx.projects_root.join("Go").join("svc");
    assert!(dir.is_dir());
    assert_eq!(report.projects_created, vec!["Go/svc"]);

    let project = registry.project(&ProjectKey::new("Go", "svc")).unwrap();
    assert_eq!(project.size_bytes, 0);
    assert!(!project.uses_version_control);

    let reloaded = store::load(&ctx.registry_file).unwrap();
    let persisted = reloaded.project(&ProjectKey::new("Go", "svc")).unwrap();
    assert_eq!(persisted.size_bytes, 0);
    assert!(!persisted.uses_version_control);
}

#[test]
fn undeclared_directory_is_discovered_with_exact_size() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    write_registry(
        &ctx.registry_file,
        r#"{"Languages": [], "Projects": [], "Users": []}"#,
    );
    let foo = ctx.projects_root.join("Python").join("foo");
    write_file(&foo.join("a.py"), 500);
    write_file(&foo.join("b.py"), 700);
    write_file(&foo.join("pkg").join("c.py"), 300);

    let mut registry = store::load(&ctx.registry_file).unwrap();
    let report = synchronize(&mut registry, &ctx).unwrap();

    assert_eq!(report.languages_discovered, vec!["Python"]);
    assert_eq!(report.projects_discovered, vec!["Python/foo"]);
    let project = registry.project(&ProjectKey::new("Python", "foo")).unwrap();
    assert_eq!(project.name, "foo");
    assert_eq!(project.created_by, "unknown");
    assert_eq!(project.size_bytes, 1500);
    assert!(!project.uses_version_control);
    assert!(registry.users().contains("unknown"));
}

#[test]
fn garbage_timestamp_becomes_load_time() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    write_registry(
        &ctx.registry_file,
        r#"{"Languages": ["C"], "Projects": [{"name": "x", "folderName": "x", "lang": "C",
            "created_by": "bob", "created_at": "garbage", "size": 0, "git": false}], "Users": []}"#,
    );

    let before = timestamp::now();
    let registry = store::load(&ctx.registry_file).unwrap();
    let after = timestamp::now();

    let created_at = registry.project(&ProjectKey::new("C", "x")).unwrap().created_at;
    assert!(created_at >= before && created_at <= after);
}

#[test]
fn marker_wins_over_persisted_flag() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    write_registry(
        &ctx.registry_file,
        r#"{"Languages": ["Rust"], "Projects": [{"name": "cli", "folderName": "cli", "lang": "Rust",
            "created_by": "alice", "created_at": "12:00 02-02-2024", "size": 0, "git": false}],
            "Users": ["alice"]}"#,
    );
    let dir = ctx.projects_root.join("Rust").join("cli");
    fs::create_dir_all(&dir).unwrap();
    add_vcs_marker(&dir);
    write_file(&dir.join(".git").join("HEAD"), 23);

    let mut registry = store::load(&ctx.registry_file).unwrap();
    let report = synchronize(&mut registry, &ctx).unwrap();

    let project = registry.project(&ProjectKey::new("Rust", "cli")).unwrap();
    assert!(project.uses_version_control);
    assert_eq!(project.size_bytes, 23);
    assert_eq!(report.projects_refreshed, vec!["Rust/cli"]);
}

#[test]
fn declared_language_directory_is_created() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    write_registry(
        &ctx.registry_file,
        r#"{"Languages": ["Rust"], "Projects": [], "Users": []}"#,
    );

    let mut registry = store::load(&ctx.registry_file).unwrap();
    synchronize(&mut registry, &ctx).unwrap();

    assert!(ctx.projects_root.join("Rust").is_dir());
    assert_eq!(registry.languages(), ["Rust".to_string()]);
}

#[test]
fn second_pass_rewrites_identical_bytes() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    write_registry(
        &ctx.registry_file,
        r#"{"Languages": ["Go", "Go"], "Projects": [
            {"name": "a", "folderName": "a", "lang": "Go", "created_by": "alice", "created_at": "nope"},
            {"name": "dup", "folderName": "a", "lang": "Go", "created_by": "bob"},
            {"name": "b", "folderName": "b", "lang": "Zig"}
        ], "Users": ["carol"]}"#,
    );
    write_file(&ctx.projects_root.join("Go").join("a").join("main.go"), 64);
    fs::create_dir_all(ctx.projects_root.join("Java").join("app")).unwrap();

    let mut registry = store::load(&ctx.registry_file).unwrap();
    let first = synchronize(&mut registry, &ctx).unwrap();
    assert!(first.changed());
    assert_eq!(first.duplicates_dropped, vec!["Go/a"]);
    let first_bytes = fs::read(&ctx.registry_file).unwrap();

    let mut reloaded = store::load(&ctx.registry_file).unwrap();
    let second = synchronize(&mut reloaded, &ctx).unwrap();
    assert!(!second.changed(), "second pass changed: {:?}", second);
    assert_eq!(fs::read(&ctx.registry_file).unwrap(), first_bytes);
}

#[test]
fn every_project_matches_the_tree_after_sync() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    write_registry(
        &ctx.registry_file,
        r#"{"Languages": ["Go"], "Projects": [
            {"name": "svc", "folderName": "svc", "lang": "Go", "created_by": "alice", "size": 99999, "git": true}
        ], "Users": []}"#,
    );
    write_file(&ctx.projects_root.join("Go").join("svc").join("x"), 10);
    write_file(&ctx.projects_root.join("Go").join("tool").join("y"), 20);
    add_vcs_marker(&ctx.projects_root.join("Go").join("tool"));

    let mut registry = store::load(&ctx.registry_file).unwrap();
    synchronize(&mut registry, &ctx).unwrap();

    assert_eq!(registry.projects().len(), 2);
    for project in registry.projects() {
        let dir = ctx.project_path(&project.language, &project.folder_name);
        assert!(dir.is_dir());
        assert_eq!(project.size_bytes, probe::folder_size(&dir));
        assert_eq!(
            project.uses_version_control,
            probe::has_version_control_marker(&dir)
        );
    }
    let owners: Vec<&str> = registry.users().iter().map(String::as_str).collect();
    assert_eq!(owners, vec!["alice", "unknown"]);
}
