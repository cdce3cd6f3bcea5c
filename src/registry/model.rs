//! In-memory registry aggregate and its persisted document shape.

use crate::error::ApiError;
use crate::probe::Observation;
use crate::registry::timestamp;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::path::{Component, Path};

/// Owner recorded for projects found on disk rather than created through devmap.
pub const UNKNOWN_USER: &str = "unknown";

/// Identity of a project: the language folder and the project folder inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectKey {
    pub language: String,
    pub folder_name: String,
}

impl ProjectKey {
    pub fn new(language: impl Into<String>, folder_name: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            folder_name: folder_name.into(),
        }
    }

    /// Both parts are single folder names, so the key names a folder directly
    /// below a language folder inside the projects root.
    pub fn is_addressable(&self) -> bool {
        is_single_segment(&self.language) && is_single_segment(&self.folder_name)
    }
}

/// True when `value` joins onto a directory as exactly one child folder.
pub fn is_single_segment(value: &str) -> bool {
    if value.is_empty() || value.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => name == value,
        _ => false,
    }
}

/// Reject names that cannot be a single path segment.
pub fn validate_segment(kind: &str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::InvalidInput(format!("{} must not be empty", kind)));
    }
    if !is_single_segment(value) {
        return Err(ApiError::InvalidInput(format!(
            "{} '{}' must be a single folder name",
            kind, value
        )));
    }
    Ok(())
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.language, self.folder_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Display name, free-form
    pub name: String,
    pub language: String,
    /// On-disk folder name
    pub folder_name: String,
    pub created_by: String,
    pub created_at: DateTime<Local>,
    /// Derived from the filesystem on every pass
    pub size_bytes: u64,
    /// Derived from the filesystem on every pass
    pub uses_version_control: bool,
}

impl Project {
    pub fn key(&self) -> ProjectKey {
        ProjectKey::new(self.language.clone(), self.folder_name.clone())
    }

    /// A project found on disk with no registry entry.
    pub fn discovered(language: &str, folder_name: &str, observation: Observation) -> Self {
        Self {
            name: folder_name.to_string(),
            language: language.to_string(),
            folder_name: folder_name.to_string(),
            created_by: UNKNOWN_USER.to_string(),
            created_at: timestamp::now(),
            size_bytes: observation.size_bytes,
            uses_version_control: observation.uses_version_control,
        }
    }

    /// Overwrite derived attributes; returns whether anything changed.
    pub fn apply_observation(&mut self, observation: Observation) -> bool {
        let changed = self.size_bytes != observation.size_bytes
            || self.uses_version_control != observation.uses_version_control;
        self.size_bytes = observation.size_bytes;
        self.uses_version_control = observation.uses_version_control;
        changed
    }

    pub fn from_record(record: ProjectRecord) -> Self {
        Self {
            created_at: timestamp::parse_or_now(&record.created_at),
            name: record.name,
            language: record.lang,
            folder_name: record.folder_name,
            created_by: record.created_by,
            size_bytes: record.size,
            uses_version_control: record.git,
        }
    }

    pub fn to_record(&self) -> ProjectRecord {
        ProjectRecord {
            created_at: timestamp::format(&self.created_at),
            created_by: self.created_by.clone(),
            folder_name: self.folder_name.clone(),
            git: self.uses_version_control,
            lang: self.language.clone(),
            name: self.name.clone(),
            size: self.size_bytes,
        }
    }
}

/// Persisted project entry. Field order is alphabetical so output matches
/// registry files written by earlier tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(rename = "folderName", default)]
    pub folder_name: String,
    #[serde(default)]
    pub git: bool,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
}

/// Persisted registry file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDocument {
    #[serde(rename = "Languages", default)]
    pub languages: Vec<String>,
    #[serde(rename = "Projects", default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(rename = "Users", default)]
    pub users: Vec<String>,
}

/// The registry aggregate: languages, projects indexed by key, and users.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    languages: Vec<String>,
    projects: Vec<Project>,
    users: BTreeSet<String>,
    index: HashMap<ProjectKey, usize>,
    dropped_duplicates: Vec<ProjectKey>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the aggregate from a parsed document.
    ///
    /// Languages are deduplicated keeping first occurrence. Projects whose key
    /// repeats an earlier entry are dropped; see [`Registry::take_dropped_duplicates`].
    pub fn from_document(document: RegistryDocument) -> Self {
        let mut registry = Self::new();
        for language in document.languages {
            if !is_single_segment(&language) {
                tracing::warn!(
                    "Ignoring language entry {:?}: not a single folder name",
                    language
                );
                continue;
            }
            registry.add_language(language);
        }
        registry.projects = document
            .projects
            .into_iter()
            .map(Project::from_record)
            .collect();
        registry.users = document
            .users
            .into_iter()
            .filter(|user| !user.is_empty())
            .collect();
        registry.reindex();
        registry
    }

    pub fn to_document(&self) -> RegistryDocument {
        RegistryDocument {
            languages: self.languages.clone(),
            projects: self.projects.iter().map(Project::to_record).collect(),
            users: self.users.iter().cloned().collect(),
        }
    }

    /// Rebuild the identity index. The first project with a given key wins;
    /// later ones are removed and remembered as dropped duplicates.
    pub fn reindex(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(self.projects.len());
        let mut dropped = 0;
        for project in std::mem::take(&mut self.projects) {
            let key = project.key();
            if seen.insert(key.clone()) {
                kept.push(project);
            } else {
                tracing::warn!(
                    "Dropping duplicate registry entry for {} (name {:?})",
                    key,
                    project.name
                );
                self.dropped_duplicates.push(key);
                dropped += 1;
            }
        }
        self.projects = kept;
        self.index = self
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| (p.key(), i))
            .collect();
        dropped
    }

    /// Keys of duplicate entries dropped since the last call.
    pub fn take_dropped_duplicates(&mut self) -> Vec<ProjectKey> {
        std::mem::take(&mut self.dropped_duplicates)
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// Append a language if absent. Returns whether it was added.
    pub fn add_language(&mut self, language: impl Into<String>) -> bool {
        let language = language.into();
        if self.contains_language(&language) {
            return false;
        }
        self.languages.push(language);
        true
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, key: &ProjectKey) -> Option<&Project> {
        self.index.get(key).map(|&i| &self.projects[i])
    }

    pub fn project_mut(&mut self, key: &ProjectKey) -> Option<&mut Project> {
        match self.index.get(key) {
            Some(&i) => Some(&mut self.projects[i]),
            None => None,
        }
    }

    pub fn contains_project(&self, key: &ProjectKey) -> bool {
        self.index.contains_key(key)
    }

    /// Register a new project; rejects a key that is already taken.
    pub fn insert_project(&mut self, project: Project) -> Result<(), ApiError> {
        let key = project.key();
        if self.index.contains_key(&key) {
            return Err(ApiError::DuplicateProject {
                language: key.language,
                folder_name: key.folder_name,
            });
        }
        self.index.insert(key, self.projects.len());
        self.projects.push(project);
        Ok(())
    }

    pub fn users(&self) -> &BTreeSet<String> {
        &self.users
    }

    /// Recompute users as persisted users plus every project owner.
    /// Returns whether the set grew.
    pub fn rebuild_users(&mut self) -> bool {
        let before = self.users.len();
        for project in &self.projects {
            if !project.created_by.is_empty() {
                self.users.insert(project.created_by.clone());
            }
        }
        self.users.len() != before
    }
}
