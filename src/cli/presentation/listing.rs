//! Listing presentation: projects, languages, users, templates, registry dump.

use super::shared::{is_json, render_table, to_json};
use crate::error::ApiError;
use crate::registry::{store, Registry};
use crate::views::{self, Verbosity};
use serde_json::json;

pub fn format_projects(
    registry: &Registry,
    verbosity: Verbosity,
    format: &str,
) -> Result<String, ApiError> {
    if is_json(format)? {
        let rows = views::project_rows(registry, verbosity);
        return to_json(&json!({ "projects": rows, "total": rows.len() }));
    }
    let view = views::projects_table(registry, verbosity);
    if view.rows.is_empty() {
        return Ok(render_table(&view));
    }
    Ok(format!(
        "{}\n\nTotal: {} project(s)",
        render_table(&view),
        view.rows.len()
    ))
}

pub fn format_languages(registry: &Registry, format: &str) -> Result<String, ApiError> {
    if is_json(format)? {
        return to_json(&json!({ "languages": registry.languages() }));
    }
    Ok(render_table(&views::languages_table(registry)))
}

pub fn format_users(registry: &Registry, format: &str) -> Result<String, ApiError> {
    if is_json(format)? {
        return to_json(&json!({ "users": registry.users() }));
    }
    Ok(render_table(&views::users_table(registry)))
}

pub fn format_templates(language: &str, templates: &[String]) -> String {
    if templates.is_empty() {
        return format!("No templates found for {}.", language);
    }
    let mut output = format!("Templates for {}:\n", language);
    for template in templates {
        output.push_str(&format!("  - {}\n", template));
    }
    output.trim_end().to_string()
}

/// The registry exactly as it is persisted.
pub fn format_registry_json(registry: &Registry) -> Result<String, ApiError> {
    Ok(store::to_pretty_json(registry)?)
}
