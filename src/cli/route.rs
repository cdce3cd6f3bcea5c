//! CLI route: single route table and run context. Loads and reconciles the
//! registry, then dispatches to domain services and presentation.

use crate::catalog::{self, NewProject};
use crate::cli::help::{command_name, needs_registry};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_created_project, format_install_outcome, format_language_outcome, format_languages,
    format_projects, format_registry_json, format_sync_report_json, format_sync_report_text,
    format_templates, format_users,
};
use crate::config::{ConfigLoader, DevmapConfig};
use crate::context::DevmapContext;
use crate::error::ApiError;
use crate::install;
use crate::registry::{store, Registry};
use crate::sync::{self, SyncReport};
use crate::views::Verbosity;
use crate::wizard;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{info, warn};

/// Runtime context for CLI execution: effective config and resolved locations.
/// Built from an optional config path using ConfigLoader only.
pub struct RunContext {
    config: DevmapConfig,
    ctx: DevmapContext,
}

impl RunContext {
    /// Create run context from an optional config file and path overrides.
    pub fn new(
        config_path: Option<PathBuf>,
        root: Option<PathBuf>,
        registry_file: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Self::from_config(config, root, registry_file)
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(
        config: DevmapConfig,
        root: Option<PathBuf>,
        registry_file: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let mut ctx = config.resolve_context()?;
        if let Some(root) = root {
            ctx.projects_root = root;
        }
        if let Some(registry_file) = registry_file {
            ctx.registry_file = registry_file;
        }
        Ok(Self { config, ctx })
    }

    pub fn context(&self) -> &DevmapContext {
        &self.ctx
    }

    /// Execute a CLI command via the single route table. `None` runs `sync`.
    pub fn execute(&self, command: Option<&Commands>) -> Result<String, ApiError> {
        info!(command = command_name(command), "Executing command");

        if !needs_registry(command) {
            return self.execute_standalone(command);
        }

        let mut registry = self.load_registry()?;
        let report = sync::synchronize(&mut registry, &self.ctx)?;
        if let Some(ref e) = report.persist_error {
            warn!("Registry could not be saved after sync: {}", e);
        }

        match command {
            None => Ok(format_sync_report_text(&report)),
            Some(command) => self.execute_with_registry(command, &mut registry, &report),
        }
    }

    fn execute_standalone(&self, command: Option<&Commands>) -> Result<String, ApiError> {
        match command {
            Some(Commands::Install { force }) => {
                let path = &self.ctx.registry_file;
                let outcome = install::install_default(path, *force)?;
                Ok(format_install_outcome(path, outcome))
            }
            Some(Commands::Config) => self.effective_config().to_toml(),
            Some(Commands::Templates { lang }) => {
                let templates = catalog::list_templates(&self.ctx, lang);
                Ok(format_templates(lang, &templates))
            }
            _ => Err(ApiError::InvalidInput(format!(
                "'{}' requires the registry",
                command_name(command)
            ))),
        }
    }

    fn execute_with_registry(
        &self,
        command: &Commands,
        registry: &mut Registry,
        report: &SyncReport,
    ) -> Result<String, ApiError> {
        match command {
            Commands::Sync { format } => match format.as_str() {
                "json" => format_sync_report_json(report),
                "text" => Ok(format_sync_report_text(report)),
                other => Err(ApiError::InvalidInput(format!(
                    "Unknown format '{}' (expected 'text' or 'json')",
                    other
                ))),
            },
            Commands::List { extended, format } => {
                let verbosity = if *extended {
                    Verbosity::Extended
                } else {
                    Verbosity::Minimal
                };
                format_projects(registry, verbosity, format)
            }
            Commands::Languages { format } => format_languages(registry, format),
            Commands::Users { format } => format_users(registry, format),
            Commands::AddLang { name } => {
                let outcome = catalog::create_language(registry, &self.ctx, name)?;
                Ok(format_language_outcome(name.trim(), outcome))
            }
            Commands::New {
                lang,
                name,
                folder,
                slug,
                git,
                template,
                create_lang,
            } => {
                let request = match (lang, name) {
                    (Some(lang), Some(name)) => NewProject {
                        name: name.clone(),
                        language: lang.clone(),
                        folder_name: match folder {
                            Some(folder) => Some(folder.clone()),
                            None if *slug => None,
                            None => Some(name.trim().to_string()),
                        },
                        template: template.clone(),
                        init_git: *git,
                        create_language: *create_lang,
                    },
                    _ => {
                        if !std::io::stdin().is_terminal() {
                            return Err(ApiError::InvalidInput(
                                "--lang and --name are required when not running interactively"
                                    .to_string(),
                            ));
                        }
                        match wizard::run(registry, &self.ctx)? {
                            Some(request) => request,
                            None => return Ok("Project creation cancelled".to_string()),
                        }
                    }
                };
                let created = catalog::create_project(registry, &self.ctx, &request)?;
                Ok(format_created_project(&created))
            }
            Commands::Show => format_registry_json(registry),
            Commands::Install { .. } | Commands::Config | Commands::Templates { .. } => {
                self.execute_standalone(Some(command))
            }
        }
    }

    /// Config as loaded, with CLI path overrides folded in.
    fn effective_config(&self) -> DevmapConfig {
        let mut config = self.config.clone();
        config.paths.projects_path = self.ctx.projects_root.clone();
        config.paths.registry_file = self.ctx.registry_file.clone();
        config.paths.templates_path = self.ctx.templates_root.clone();
        config
    }

    /// Load the registry, offering the install flow when it is missing or
    /// malformed and a terminal is attached.
    fn load_registry(&self) -> Result<Registry, ApiError> {
        let path = &self.ctx.registry_file;
        match store::load(path) {
            Ok(registry) => Ok(registry),
            Err(e) if e.needs_install() && std::io::stdin().is_terminal() => {
                use dialoguer::Confirm;
                eprintln!("{}", e);
                let confirmed = Confirm::new()
                    .with_prompt(format!("Install a default registry at {}?", path.display()))
                    .default(true)
                    .interact()
                    .map_err(|e| ApiError::Prompt(e.to_string()))?;
                if !confirmed {
                    return Err(e.into());
                }
                install::install_default(path, true)?;
                Ok(store::load(path)?)
            }
            Err(e) => Err(e.into()),
        }
    }
}
