//! Registry file format: field defaults and persisted layout.

use devmap::registry::{store, ProjectKey, Registry};
use tempfile::TempDir;

#[test]
fn absent_fields_take_defaults() {
    let test_dir = TempDir::new().unwrap();
    let path = test_dir.path().join("devmap.json");
    std::fs::write(
        &path,
        r#"{"Projects": [{"folderName": "x", "lang": "Go"}]}"#,
    )
    .unwrap();

    let registry = store::load(&path).unwrap();
    assert!(registry.languages().is_empty());
    assert!(registry.users().is_empty());
    let project = registry.project(&ProjectKey::new("Go", "x")).unwrap();
    assert_eq!(project.name, "");
    assert_eq!(project.created_by, "");
    assert_eq!(project.size_bytes, 0);
    assert!(!project.uses_version_control);
}

#[test]
fn saved_file_uses_four_space_indent_and_stable_keys() {
    let test_dir = TempDir::new().unwrap();
    let path = test_dir.path().join("out").join("devmap.json");
    let mut registry = Registry::new();
    registry.add_language("Go");

    store::save(&registry, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "{\n    \"Languages\": [\n        \"Go\"\n    ],\n    \"Projects\": [],\n    \"Users\": []\n}"
    );
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn unreadable_path_is_a_read_error() {
    let test_dir = TempDir::new().unwrap();
    // A directory where the file should be
    let path = test_dir.path().join("devmap.json");
    std::fs::create_dir(&path).unwrap();

    let err = store::load(&path).unwrap_err();
    assert!(!matches!(err, devmap::error::RegistryError::NotFound(_)));
}
