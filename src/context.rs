//! Resolved locations and identity for one devmap run.

use crate::materialize::Materializer;
use crate::registry::UNKNOWN_USER;
use std::path::{Path, PathBuf};

/// Explicit context passed to every registry operation in place of global state.
#[derive(Debug, Clone)]
pub struct DevmapContext {
    /// Directory holding one folder per language
    pub projects_root: PathBuf,
    /// Registry JSON file
    pub registry_file: PathBuf,
    /// Directory holding `<language>/<template>` folders
    pub templates_root: PathBuf,
    /// Owner recorded on projects created through devmap
    pub user: String,
}

impl DevmapContext {
    pub fn new(projects_root: impl Into<PathBuf>, registry_file: impl Into<PathBuf>) -> Self {
        let projects_root = projects_root.into();
        let templates_root = projects_root.join(".templates");
        Self {
            projects_root,
            registry_file: registry_file.into(),
            templates_root,
            user: UNKNOWN_USER.to_string(),
        }
    }

    pub fn with_templates_root(mut self, templates_root: impl Into<PathBuf>) -> Self {
        self.templates_root = templates_root.into();
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn materializer(&self) -> Materializer {
        Materializer::new(&self.projects_root)
    }

    pub fn project_path(&self, language: &str, folder_name: &str) -> PathBuf {
        self.projects_root.join(language).join(folder_name)
    }

    pub fn templates_dir(&self, language: &str) -> PathBuf {
        self.templates_root.join(language)
    }

    pub fn registry_file(&self) -> &Path {
        &self.registry_file
    }
}
