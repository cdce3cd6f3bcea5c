//! CLI presentation: text and json formatters per command family.

mod catalog;
mod listing;
mod shared;
mod sync;

pub use catalog::{format_created_project, format_install_outcome, format_language_outcome};
pub use listing::{
    format_languages, format_projects, format_registry_json, format_templates, format_users,
};
pub use shared::{format_section_heading, render_table};
pub use sync::{format_sync_report_json, format_sync_report_text};
