//! Config facade: the single entry point for building a [`DevmapConfig`].

use super::merge::merge_policy;
use super::sources::{env, global_file};
use super::DevmapConfig;
use crate::error::ApiError;
use config::File;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the global config file and the environment.
    pub fn load() -> Result<DevmapConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = env::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load from defaults, an explicit file (which must exist) and the environment.
    pub fn load_from_file(path: &Path) -> Result<DevmapConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = env::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Path of the global config file, when a config home can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
