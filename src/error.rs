//! Error types for the devmap project registry.

use std::path::PathBuf;
use thiserror::Error;

/// Registry file errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Registry file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read registry file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse registry file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize registry: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write registry file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    /// True when the registry could not be loaded at all and the install flow applies.
    pub fn needs_install(&self) -> bool {
        matches!(
            self,
            RegistryError::NotFound(_) | RegistryError::Parse { .. }
        )
    }
}

/// Directory creation failure for a language or project folder
#[derive(Debug, Error)]
#[error("Failed to create directory {}: {source}", path.display())]
pub struct DirectoryError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Command-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Directory(#[from] DirectoryError),

    #[error("Projects root {} is unavailable: {source}", path.display())]
    ProjectsRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Language not found: {0}")]
    LanguageNotFound(String),

    #[error("Project already registered: {language}/{folder_name}")]
    DuplicateProject {
        language: String,
        folder_name: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Failed to get user input: {0}")]
    Prompt(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
