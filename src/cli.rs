//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, needs_registry};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_created_project, format_install_outcome, format_language_outcome, format_languages,
    format_projects, format_registry_json, format_section_heading, format_sync_report_json,
    format_sync_report_text, format_templates, format_users, render_table,
};
pub use route::RunContext;
