//! Install flow: missing and corrupt registries.

use super::test_utils::temp_context;
use devmap::error::RegistryError;
use devmap::install::{install_default, InstallOutcome, DEFAULT_REGISTRY};
use devmap::registry::store;
use devmap::sync::synchronize;
use tempfile::TempDir;

#[test]
fn missing_registry_needs_install() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);

    let err = store::load(&ctx.registry_file).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
    assert!(err.needs_install());
}

#[test]
fn malformed_registry_needs_install_and_is_not_partially_loaded() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    std::fs::write(&ctx.registry_file, r#"{"Languages": ["Go"], "Projects": [ {"#).unwrap();

    let err = store::load(&ctx.registry_file).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }));
    assert!(err.needs_install());
}

#[test]
fn installed_registry_syncs_cleanly() {
    let test_dir = TempDir::new().unwrap();
    let ctx = temp_context(&test_dir);
    let nested = test_dir.path().join("a").join("b").join("devmap.json");

    assert_eq!(
        install_default(&nested, false).unwrap(),
        InstallOutcome::Installed
    );
    assert_eq!(std::fs::read_to_string(&nested).unwrap(), DEFAULT_REGISTRY);

    let ctx = devmap::context::DevmapContext::new(&ctx.projects_root, &nested);
    let mut registry = store::load(&nested).unwrap();
    let report = synchronize(&mut registry, &ctx).unwrap();
    assert!(!report.changed());
    assert!(report.persisted());
    assert_eq!(std::fs::read_to_string(&nested).unwrap(), DEFAULT_REGISTRY);
}
