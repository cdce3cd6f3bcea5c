//! Reconciliation engine
//!
//! Brings the registry and the projects tree into agreement in both
//! directions, refreshes derived attributes, and writes the registry back.
//!
//! Phases run in a fixed order because later phases read what earlier ones
//! produced:
//!
//! 1. declared languages get a directory
//! 2. language directories on disk become languages
//! 3. declared projects are indexed (duplicates dropped, their languages adopted)
//! 4. declared projects get a directory
//! 5. derived attributes are refreshed for projects with a directory
//! 6. project directories on disk become projects
//! 7. the user set is rebuilt
//! 8. the registry is persisted
//!
//! Directory failures are collected per item and never abort the pass. The
//! pass is idempotent: a second run with no filesystem change reports no
//! changes and rewrites identical bytes.

use crate::context::DevmapContext;
use crate::error::ApiError;
use crate::materialize::DirectoryState;
use crate::probe;
use crate::registry::{
    is_single_segment, store, validate_segment, Project, ProjectKey, Registry,
};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{debug, error, info, warn};

/// What one reconciliation pass did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Declared languages whose directory had to be created
    pub languages_created: Vec<String>,
    /// Directories under the root added as languages
    pub languages_discovered: Vec<String>,
    /// Languages named only by a project entry, added to the language list
    pub languages_adopted: Vec<String>,
    /// Declared projects whose directory had to be created
    pub projects_created: Vec<String>,
    /// Directories under a language added as projects
    pub projects_discovered: Vec<String>,
    /// Projects whose size or version-control flag changed
    pub projects_refreshed: Vec<String>,
    /// Entries with an empty language or folder name, left untouched
    pub projects_skipped: Vec<String>,
    /// Entries dropped because their key repeats an earlier entry
    pub duplicates_dropped: Vec<String>,
    pub users_changed: bool,
    /// Per-item directory failures
    pub failures: Vec<String>,
    /// Set when the registry could not be written back
    pub persist_error: Option<String>,
}

impl SyncReport {
    /// True when the pass changed the registry or the tree.
    pub fn changed(&self) -> bool {
        !(self.languages_created.is_empty()
            && self.languages_discovered.is_empty()
            && self.languages_adopted.is_empty()
            && self.projects_created.is_empty()
            && self.projects_discovered.is_empty()
            && self.projects_refreshed.is_empty()
            && self.duplicates_dropped.is_empty()
            && !self.users_changed)
    }

    pub fn persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Run a full reconciliation pass over `registry` and the tree at `ctx.projects_root`.
///
/// Fails only when the projects root is missing and cannot be created or listed.
pub fn synchronize(registry: &mut Registry, ctx: &DevmapContext) -> Result<SyncReport, ApiError> {
    let root = ctx.projects_root.as_path();
    fs::create_dir_all(root).map_err(|source| ApiError::ProjectsRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut report = SyncReport::default();
    let materializer = ctx.materializer();

    // 1. Declared languages -> directories
    for language in registry.languages() {
        if let Err(e) = validate_segment("Language", language) {
            error!("{}", e);
            report.failures.push(e.to_string());
            continue;
        }
        match materializer.ensure_language_directory(language) {
            Ok(DirectoryState::Created) => report.languages_created.push(language.clone()),
            Ok(DirectoryState::AlreadyExisted) => {}
            Err(e) => {
                error!("{}", e);
                report.failures.push(e.to_string());
            }
        }
    }

    // 2. Root subdirectories -> languages
    let on_disk = probe::list_subdirectories(root).map_err(|source| ApiError::ProjectsRoot {
        path: root.to_path_buf(),
        source,
    })?;
    for language in on_disk {
        if registry.add_language(language.clone()) {
            info!("Added new language from filesystem: {}", language);
            report.languages_discovered.push(language);
        }
    }

    // 3. Declared projects -> identity index
    registry.reindex();
    report.duplicates_dropped = registry
        .take_dropped_duplicates()
        .iter()
        .map(ProjectKey::to_string)
        .collect();
    let declared: Vec<ProjectKey> = registry.projects().iter().map(Project::key).collect();
    for key in &declared {
        if !key.is_addressable() {
            warn!(
                "Registry entry {:?} does not name a folder inside a language folder; skipping",
                key.to_string()
            );
            report.projects_skipped.push(key.to_string());
            continue;
        }
        if registry.add_language(key.language.clone()) {
            info!("Added language {} named by project {}", key.language, key);
            report.languages_adopted.push(key.language.clone());
        }
    }

    // 4. Declared projects -> directories
    for key in declared.iter().filter(|k| k.is_addressable()) {
        if ctx.project_path(&key.language, &key.folder_name).is_dir() {
            continue;
        }
        match materializer.ensure_project_directory(&key.language, &key.folder_name) {
            Ok(_) => report.projects_created.push(key.to_string()),
            Err(e) => {
                error!("Error creating project directory: {}", e);
                report.failures.push(e.to_string());
            }
        }
    }

    // 5. Derived-attribute refresh
    for key in declared.iter().filter(|k| k.is_addressable()) {
        let path = ctx.project_path(&key.language, &key.folder_name);
        if !path.is_dir() {
            debug!("{} still missing, keeping previous derived values", key);
            continue;
        }
        let observation = probe::observe(&path);
        if let Some(project) = registry.project_mut(key) {
            if project.apply_observation(observation) {
                debug!(
                    "Refreshed {}: size={} git={}",
                    key, observation.size_bytes, observation.uses_version_control
                );
                report.projects_refreshed.push(key.to_string());
            }
        }
    }

    // 6. Language subdirectories -> projects
    let languages: Vec<String> = registry
        .languages()
        .iter()
        .filter(|l| is_single_segment(l))
        .cloned()
        .collect();
    for language in &languages {
        let language_path = root.join(language);
        if !language_path.is_dir() {
            continue;
        }
        let folders = match probe::list_subdirectories(&language_path) {
            Ok(folders) => folders,
            Err(e) => {
                warn!("Failed to list {}: {}", language_path.display(), e);
                report
                    .failures
                    .push(format!("Failed to list {}: {}", language_path.display(), e));
                continue;
            }
        };
        for folder_name in folders {
            let key = ProjectKey::new(language.clone(), folder_name.clone());
            if registry.contains_project(&key) {
                continue;
            }
            let observation = probe::observe(&language_path.join(&folder_name));
            let project = Project::discovered(language, &folder_name, observation);
            registry.insert_project(project)?;
            info!(
                "Added new project from filesystem: {} in {}",
                folder_name, language
            );
            report.projects_discovered.push(key.to_string());
        }
    }

    // 7. User-set rebuild
    report.users_changed = registry.rebuild_users();

    // 8. Persist
    if let Err(e) = store::save(registry, &ctx.registry_file) {
        error!("Unable to write registry: {}", e);
        report.persist_error = Some(e.to_string());
    }

    if report.changed() {
        info!(
            "Sync: {} languages discovered, {} projects discovered, {} created, {} refreshed",
            report.languages_discovered.len(),
            report.projects_discovered.len(),
            report.projects_created.len(),
            report.projects_refreshed.len()
        );
    }

    Ok(report)
}
