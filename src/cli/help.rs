//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "list", "add-lang").
pub fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        None => "sync",
        Some(command) => match command {
            Commands::Sync { .. } => "sync",
            Commands::List { .. } => "list",
            Commands::Languages { .. } => "languages",
            Commands::Users { .. } => "users",
            Commands::AddLang { .. } => "add-lang",
            Commands::New { .. } => "new",
            Commands::Templates { .. } => "templates",
            Commands::Install { .. } => "install",
            Commands::Show => "show",
            Commands::Config => "config",
        },
    }
}

/// Whether the command needs a loaded and reconciled registry.
pub fn needs_registry(command: Option<&Commands>) -> bool {
    !matches!(
        command,
        Some(Commands::Install { .. } | Commands::Config | Commands::Templates { .. })
    )
}
