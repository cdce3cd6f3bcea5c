//! Install flow for a missing or unreadable registry file.
//!
//! The default registry is embedded in the binary at build time and written
//! to the configured location on `devmap install`, or when the user accepts
//! the prompt shown after a failed load.

use crate::error::RegistryError;
use crate::registry::{store, Registry};
use std::path::Path;
use tracing::info;

/// Default registry embedded in binary at compile time
pub const DEFAULT_REGISTRY: &str = include_str!("../assets/default_devmap.json");

/// What [`install_default`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// An existing file was replaced (`force`)
    Overwritten,
    /// A loadable registry was already present and left alone
    Skipped,
}

/// The embedded default registry, parsed.
pub fn default_registry() -> Result<Registry, RegistryError> {
    let document = store::parse_document(DEFAULT_REGISTRY).map_err(|source| {
        RegistryError::Parse {
            path: Path::new("<embedded default>").to_path_buf(),
            source,
        }
    })?;
    Ok(Registry::from_document(document))
}

/// Write the default registry to `path`.
///
/// An existing file that loads cleanly is kept unless `force` is set. An
/// existing file that fails to parse is always replaced.
pub fn install_default(path: &Path, force: bool) -> Result<InstallOutcome, RegistryError> {
    let existed = path.exists();
    if existed && !force {
        match store::load(path) {
            Ok(_) => {
                info!("Registry already present at {}", path.display());
                return Ok(InstallOutcome::Skipped);
            }
            Err(e) if e.needs_install() => {}
            Err(e) => return Err(e),
        }
    }

    store::write_atomic(path, DEFAULT_REGISTRY.as_bytes())?;
    info!("Installed default registry at {}", path.display());
    Ok(if existed {
        InstallOutcome::Overwritten
    } else {
        InstallOutcome::Installed
    })
}
