//! Sync command presentation: per-phase summary text/json.

use super::shared::{format_section_heading, to_json};
use crate::error::ApiError;
use crate::sync::SyncReport;

fn push_section(output: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("{} ({}):\n", label, items.len()));
    for item in items {
        output.push_str(&format!("  + {}\n", item));
    }
}

pub fn format_sync_report_text(report: &SyncReport) -> String {
    let mut output = format!("{}\n\n", format_section_heading("Sync"));

    if !report.changed() && report.failures.is_empty() && report.projects_skipped.is_empty() {
        output.push_str("Registry and projects folder already agree.\n");
    }

    push_section(&mut output, "Language folders created", &report.languages_created);
    push_section(&mut output, "Languages discovered", &report.languages_discovered);
    push_section(&mut output, "Languages adopted from projects", &report.languages_adopted);
    push_section(&mut output, "Project folders created", &report.projects_created);
    push_section(&mut output, "Projects discovered", &report.projects_discovered);
    push_section(&mut output, "Projects refreshed", &report.projects_refreshed);
    push_section(&mut output, "Duplicate entries dropped", &report.duplicates_dropped);
    if report.users_changed {
        output.push_str("Users updated\n");
    }

    if !report.projects_skipped.is_empty() {
        output.push_str(&format!(
            "Entries skipped (missing language or folder) ({}):\n",
            report.projects_skipped.len()
        ));
        for item in &report.projects_skipped {
            output.push_str(&format!("  ⊘ {}\n", item));
        }
    }
    if !report.failures.is_empty() {
        output.push_str(&format!("Errors ({}):\n", report.failures.len()));
        for failure in &report.failures {
            output.push_str(&format!("  ✗ {}\n", failure));
        }
    }
    match &report.persist_error {
        Some(e) => output.push_str(&format!("Registry not saved: {}\n", e)),
        None => output.push_str("Registry saved.\n"),
    }
    output.trim_end().to_string()
}

pub fn format_sync_report_json(report: &SyncReport) -> Result<String, ApiError> {
    to_json(report)
}
