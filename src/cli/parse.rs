//! CLI parse: clap types for devmap. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// devmap - keep a project registry in step with the projects folder
#[derive(Parser, Debug)]
#[command(name = "devmap")]
#[command(about = "Track projects organized by language and keep the registry in sync with disk")]
pub struct Cli {
    /// Command to run (default: sync)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Projects root directory (overrides paths.projects_path)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Registry file (overrides paths.registry_file)
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (when output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Reconcile the registry with the projects folder and report what changed
    Sync {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List registered projects
    List {
        /// Include folder, creation time, size and git columns
        #[arg(long, short = 'e')]
        extended: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List known languages
    Languages {
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List known users
    Users {
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Register a language and create its folder
    AddLang {
        /// Language name (also the folder name)
        name: String,
    },
    /// Create a project (interactive when --lang or --name is omitted)
    New {
        /// Language the project belongs to
        #[arg(long)]
        lang: Option<String>,
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Folder name under the language folder (default: the display name)
        #[arg(long, conflicts_with = "slug")]
        folder: Option<String>,
        /// Derive the folder name from the display name (lowercase, dashes, ASCII only)
        #[arg(long)]
        slug: bool,
        /// Run `git init` in the new folder
        #[arg(long)]
        git: bool,
        /// Template to copy into the new folder
        #[arg(long)]
        template: Option<String>,
        /// Register the language first when it is unknown
        #[arg(long)]
        create_lang: bool,
    },
    /// List project templates available for a language
    Templates {
        /// Language whose templates to list
        lang: String,
    },
    /// Write the default registry file
    Install {
        /// Overwrite an existing registry file
        #[arg(long)]
        force: bool,
    },
    /// Print the reconciled registry as JSON
    Show,
    /// Print the effective configuration as TOML
    Config,
}
