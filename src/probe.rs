//! Filesystem probe: read-only size and version-control queries.
//!
//! Every call re-walks the tree; nothing is cached between calls. Paths that
//! disappear while being walked count as empty rather than failing the caller.

use std::path::Path;
use walkdir::WalkDir;

/// Name of the version-control metadata folder looked for directly under a project.
pub const VCS_MARKER: &str = ".git";

/// Observed derived attributes of a project directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Observation {
    pub size_bytes: u64,
    pub uses_version_control: bool,
}

/// Sum the sizes of all regular files below `path`.
///
/// Directories, symlinks and special files contribute nothing themselves;
/// symlinks are not followed. A non-existent path yields 0.
pub fn folder_size(path: &Path) -> u64 {
    if !path.is_dir() {
        return 0;
    }

    let mut total = 0u64;
    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", path.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => total += metadata.len(),
            Err(e) => {
                tracing::debug!(
                    "Skipping {} (metadata unavailable): {}",
                    entry.path().display(),
                    e
                );
            }
        }
    }
    total
}

/// True iff a `.git` directory exists directly under `path`.
pub fn has_version_control_marker(path: &Path) -> bool {
    path.join(VCS_MARKER).is_dir()
}

/// Names of the immediate subdirectories of `path`, sorted by name.
///
/// Symlinks to directories count as directories. Entries that vanish while
/// listing or have non-UTF-8 names are skipped.
pub fn list_subdirectories(path: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping entry in {}: {}", path.display(), e);
                continue;
            }
        };
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => tracing::warn!("Skipping non-UTF-8 directory name {:?}", name),
        }
    }
    names.sort();
    Ok(names)
}

/// Observe both derived attributes of a directory in one call.
pub fn observe(path: &Path) -> Observation {
    Observation {
        size_bytes: folder_size(path),
        uses_version_control: has_version_control_marker(path),
    }
}
