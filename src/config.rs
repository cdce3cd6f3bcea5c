//! Configuration System
//!
//! Layered configuration for devmap: merge-policy defaults, the global
//! config file, an optional explicit file, and `DEVMAP_` environment
//! overrides. Resolves into a [`DevmapContext`] for the registry operations.

use crate::context::DevmapContext;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::registry::UNKNOWN_USER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::{config_home, expand_home, home_dir};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevmapConfig {
    /// Filesystem locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Identity recorded on created projects
    #[serde(default)]
    pub user: UserConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Filesystem locations. Relative paths resolve against `base_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Base for relative paths (defaults to the home directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    /// Root holding one directory per language
    #[serde(default = "default_projects_path")]
    pub projects_path: PathBuf,

    /// Registry JSON file
    #[serde(default = "default_registry_file")]
    pub registry_file: PathBuf,

    /// Project templates, laid out as `<language>/<template>`
    #[serde(default = "default_templates_path")]
    pub templates_path: PathBuf,
}

pub(crate) fn default_projects_path() -> PathBuf {
    PathBuf::from("Projects")
}

pub(crate) fn default_registry_file() -> PathBuf {
    PathBuf::from(".config/devmap/devmap.json")
}

pub(crate) fn default_templates_path() -> PathBuf {
    PathBuf::from(".config/devmap/templates")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            projects_path: default_projects_path(),
            registry_file: default_registry_file(),
            templates_path: default_templates_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Owner name for new projects; falls back to `$USER` / `$USERNAME`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserConfig {
    pub fn resolve(&self) -> String {
        self.name
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_USER.to_string())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Paths(String),
    User(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Paths(msg) => write!(f, "Paths: {}", msg),
            ValidationError::User(msg) => write!(f, "User: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PathsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.projects_path.as_os_str().is_empty() {
            return Err("Projects path cannot be empty".to_string());
        }
        if self.registry_file.as_os_str().is_empty() {
            return Err("Registry file cannot be empty".to_string());
        }
        if self.templates_path.as_os_str().is_empty() {
            return Err("Templates path cannot be empty".to_string());
        }
        Ok(())
    }

    /// Base directory for relative paths.
    pub fn base(&self) -> Result<PathBuf, ApiError> {
        match &self.base_dir {
            Some(dir) => Ok(expand_home(dir)),
            None => home_dir().ok_or_else(|| {
                ApiError::ConfigError(
                    "Cannot determine home directory; set paths.base_dir".to_string(),
                )
            }),
        }
    }

    fn resolve(&self, base: &Path, path: &Path) -> PathBuf {
        base.join(expand_home(path))
    }

    pub fn projects_root(&self) -> Result<PathBuf, ApiError> {
        let root = self.resolve(&self.base()?, &self.projects_path);
        // Canonical form when it already exists, so reports show stable paths.
        Ok(dunce::canonicalize(&root).unwrap_or(root))
    }

    pub fn registry_file(&self) -> Result<PathBuf, ApiError> {
        Ok(self.resolve(&self.base()?, &self.registry_file))
    }

    pub fn templates_root(&self) -> Result<PathBuf, ApiError> {
        Ok(self.resolve(&self.base()?, &self.templates_path))
    }
}

impl DevmapConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.paths.validate() {
            errors.push(ValidationError::Paths(e));
        }

        if let Some(name) = &self.user.name {
            if name.trim().is_empty() {
                errors.push(ValidationError::User("User name cannot be blank".to_string()));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Resolve the run context: projects root, registry file, templates and user.
    pub fn resolve_context(&self) -> Result<DevmapContext, ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(
            DevmapContext::new(self.paths.projects_root()?, self.paths.registry_file()?)
                .with_templates_root(self.paths.templates_root()?)
                .with_user(self.user.resolve()),
        )
    }

    /// Effective configuration rendered as TOML.
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
