//! Registry file persistence: JSON load and atomic pretty-printed save.

use crate::error::RegistryError;
use crate::registry::model::{Registry, RegistryDocument};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and parse the registry file.
///
/// A missing, unreadable or malformed file is an error; nothing partial is returned.
pub fn load(path: &Path) -> Result<Registry, RegistryError> {
    if !path.exists() {
        return Err(RegistryError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&content).map_err(|source| RegistryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        "Loaded registry {}: {} languages, {} projects, {} users",
        path.display(),
        document.languages.len(),
        document.projects.len(),
        document.users.len()
    );
    Ok(Registry::from_document(document))
}

pub fn parse_document(content: &str) -> Result<RegistryDocument, serde_json::Error> {
    serde_json::from_str(content)
}

/// Serialize the whole registry with four-space indentation.
pub fn to_pretty_json(registry: &Registry) -> Result<String, RegistryError> {
    document_to_pretty_json(&registry.to_document())
}

pub fn document_to_pretty_json(document: &RegistryDocument) -> Result<String, RegistryError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut serializer)
        .map_err(RegistryError::Serialize)?;
    String::from_utf8(buf).map_err(|e| {
        RegistryError::Serialize(serde::ser::Error::custom(format!(
            "registry output is not UTF-8: {}",
            e
        )))
    })
}

/// Rewrite the registry file in full.
///
/// Uses temporary file + rename so readers never observe a half-written file.
pub fn save(registry: &Registry, path: &Path) -> Result<(), RegistryError> {
    let serialized = to_pretty_json(registry)?;
    write_atomic(path, serialized.as_bytes())
}

pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<(), RegistryError> {
    let write_err = |source| RegistryError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).map_err(write_err)?;
    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        write_err(source)
    })?;
    Ok(())
}
