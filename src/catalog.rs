//! Catalog commands: register new languages and projects.
//!
//! Each command mutates the in-memory registry, materializes the matching
//! directory, and writes the registry back before returning.

use crate::context::DevmapContext;
use crate::error::ApiError;
use crate::probe;
use crate::registry::{store, timestamp, validate_segment, Project, ProjectKey, Registry};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use walkdir::WalkDir;

/// Result of [`create_language`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageOutcome {
    Created,
    AlreadyKnown,
}

/// Everything needed to register a new project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub language: String,
    /// Explicit folder name; derived from `name` with [`folder_name_for`] when absent
    pub folder_name: Option<String>,
    /// Template folder under `<templates_root>/<language>/` to copy into the project
    pub template: Option<String>,
    pub init_git: bool,
    /// Register `language` first when it is not known yet
    pub create_language: bool,
}

/// What [`create_project`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    pub key: ProjectKey,
    pub path: PathBuf,
    pub language_created: bool,
    pub files_copied: usize,
    pub git_initialized: bool,
    /// Non-fatal problems (template copy, git init)
    pub warnings: Vec<String>,
}

/// Register `language` and create its directory under the projects root.
pub fn create_language(
    registry: &mut Registry,
    ctx: &DevmapContext,
    language: &str,
) -> Result<LanguageOutcome, ApiError> {
    let language = language.trim();
    validate_segment("Language", language)?;

    if registry.contains_language(language) {
        ctx.materializer().ensure_language_directory(language)?;
        return Ok(LanguageOutcome::AlreadyKnown);
    }

    ctx.materializer().ensure_language_directory(language)?;
    registry.add_language(language);
    store::save(registry, ctx.registry_file())?;
    info!("Registered language {}", language);
    Ok(LanguageOutcome::Created)
}

/// Derive a folder name from a display name.
///
/// Accents are stripped, letters lowercased, spaces become `-`, and anything
/// outside ASCII letters, digits and `-` is dropped.
pub fn folder_name_for(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_ascii_alphanumeric() || c == '-' => Some(c),
            _ => None,
        })
        .collect()
}

/// Register a project, materialize its folder, and apply the template and git options.
pub fn create_project(
    registry: &mut Registry,
    ctx: &DevmapContext,
    request: &NewProject,
) -> Result<CreatedProject, ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidInput(
            "Project name must not be empty".to_string(),
        ));
    }
    let language = request.language.trim();
    validate_segment("Language", language)?;

    let folder_name = match &request.folder_name {
        Some(folder) => folder.trim().to_string(),
        None => folder_name_for(name),
    };
    validate_segment("Folder name", &folder_name)?;

    let key = ProjectKey::new(language, folder_name.as_str());
    if registry.contains_project(&key) {
        return Err(ApiError::DuplicateProject {
            language: key.language,
            folder_name: key.folder_name,
        });
    }

    let template_dir = match &request.template {
        Some(template) => {
            validate_segment("Template", template)?;
            let dir = ctx.templates_dir(language).join(template);
            if !dir.is_dir() {
                return Err(ApiError::Template(format!(
                    "Template '{}' not found for {} in {}",
                    template,
                    language,
                    ctx.templates_dir(language).display()
                )));
            }
            Some(dir)
        }
        None => None,
    };

    let mut language_created = false;
    if !registry.contains_language(language) {
        if !request.create_language {
            return Err(ApiError::LanguageNotFound(language.to_string()));
        }
        language_created = create_language(registry, ctx, language)? == LanguageOutcome::Created;
    }

    let path = ctx.project_path(language, &folder_name);
    ctx.materializer()
        .ensure_project_directory(language, &folder_name)?;

    let mut warnings = Vec::new();
    let mut files_copied = 0;
    if let Some(template_dir) = &template_dir {
        match copy_template(template_dir, &path) {
            Ok(count) => files_copied = count,
            Err(e) => {
                warn!("{}", e);
                warnings.push(e.to_string());
            }
        }
    }

    let mut git_initialized = false;
    if request.init_git {
        match init_git(&path) {
            Ok(()) => git_initialized = true,
            Err(message) => {
                warn!("{}", message);
                warnings.push(message);
            }
        }
    }

    let observation = probe::observe(&path);
    let project = Project {
        name: name.to_string(),
        language: language.to_string(),
        folder_name: folder_name.clone(),
        created_by: ctx.user.clone(),
        created_at: timestamp::now(),
        size_bytes: observation.size_bytes,
        uses_version_control: observation.uses_version_control,
    };
    registry.insert_project(project)?;
    registry.rebuild_users();
    store::save(registry, ctx.registry_file())?;
    info!("Registered project {} at {}", key, path.display());

    Ok(CreatedProject {
        key,
        path,
        language_created,
        files_copied,
        git_initialized,
        warnings,
    })
}

/// Template folders available for `language`, sorted. Empty when none exist.
pub fn list_templates(ctx: &DevmapContext, language: &str) -> Vec<String> {
    let dir = ctx.templates_dir(language);
    if !dir.is_dir() {
        return Vec::new();
    }
    probe::list_subdirectories(&dir).unwrap_or_else(|e| {
        warn!("Failed to list templates in {}: {}", dir.display(), e);
        Vec::new()
    })
}

/// Copy the contents of `source` into `destination`, overwriting files.
/// Symlinks are skipped. Returns the number of files copied.
fn copy_template(source: &Path, destination: &Path) -> Result<usize, ApiError> {
    let mut copied = 0;
    for entry in WalkDir::new(source).follow_links(false).min_depth(1) {
        let entry = entry.map_err(|e| {
            ApiError::Template(format!("Failed to read template {}: {}", source.display(), e))
        })?;
        let relative = entry.path().strip_prefix(source).map_err(|e| {
            ApiError::Template(format!("Unexpected template path {}: {}", entry.path().display(), e))
        })?;
        let target = destination.join(relative);

        let file_type = entry.file_type();
        let result = if file_type.is_dir() {
            fs::create_dir_all(&target)
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target).map(|_| {
                copied += 1;
            })
        } else {
            continue;
        };
        result.map_err(|e| {
            ApiError::Template(format!("Failed to copy {}: {}", entry.path().display(), e))
        })?;
    }
    Ok(copied)
}

fn init_git(path: &Path) -> Result<(), String> {
    let output = Command::new("git")
        .arg("init")
        .arg("--quiet")
        .current_dir(path)
        .output()
        .map_err(|e| format!("Failed to run git init in {}: {}", path.display(), e))?;
    if !output.status.success() {
        return Err(format!(
            "git init failed in {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }
    Ok(())
}
