//! Directory materializer: idempotent creation of language and project folders.

use crate::error::DirectoryError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a successful ensure call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Created,
    AlreadyExisted,
}

/// Creates folders below the projects root
#[derive(Debug, Clone)]
pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `root/language`
    pub fn language_path(&self, language: &str) -> PathBuf {
        self.root.join(language)
    }

    /// `root/language/folder_name`
    pub fn project_path(&self, language: &str, folder_name: &str) -> PathBuf {
        self.root.join(language).join(folder_name)
    }

    /// Ensure `root/language` exists.
    pub fn ensure_language_directory(
        &self,
        language: &str,
    ) -> Result<DirectoryState, DirectoryError> {
        let path = self.language_path(language);
        let state = ensure_dir(&path)?;
        if state == DirectoryState::Created {
            info!("Created language directory: {}", path.display());
        }
        Ok(state)
    }

    /// Ensure `root/language/folder_name` exists, creating missing parents.
    pub fn ensure_project_directory(
        &self,
        language: &str,
        folder_name: &str,
    ) -> Result<DirectoryState, DirectoryError> {
        let path = self.project_path(language, folder_name);
        let state = ensure_dir(&path)?;
        match state {
            DirectoryState::Created => info!("Created project directory: {}", path.display()),
            DirectoryState::AlreadyExisted => {
                debug!("Project directory already exists: {}", path.display())
            }
        }
        Ok(state)
    }
}

fn ensure_dir(path: &Path) -> Result<DirectoryState, DirectoryError> {
    if path.is_dir() {
        return Ok(DirectoryState::AlreadyExisted);
    }
    fs::create_dir_all(path).map_err(|source| DirectoryError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(DirectoryState::Created)
}
