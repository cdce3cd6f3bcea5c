//! Merge rules: defaults, override order, conflict handling.

use crate::config::{default_projects_path, default_registry_file, default_templates_path};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use std::path::Path;

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("paths.projects_path", path_value(&default_projects_path()))?
        .set_default("paths.registry_file", path_value(&default_registry_file()))?
        .set_default("paths.templates_path", path_value(&default_templates_path()))
}
