//! Shared presentation: headings, tables and json encoding.

use crate::error::ApiError;
use crate::views::TableView;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Render a view as a bordered table, or a short note when it has no rows.
pub fn render_table(view: &TableView) -> String {
    if view.rows.is_empty() {
        return format!("No {} found.", view.title.to_lowercase());
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(view.header.clone());
    for row in &view.rows {
        table.add_row(row.clone());
    }
    table.to_string()
}

pub(super) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::InvalidInput(format!("Failed to encode json output: {}", e)))
}

/// Validate a `--format` value.
pub(super) fn is_json(format: &str) -> Result<bool, ApiError> {
    match format {
        "json" => Ok(true),
        "text" => Ok(false),
        other => Err(ApiError::InvalidInput(format!(
            "Unknown format '{}' (expected 'text' or 'json')",
            other
        ))),
    }
}
