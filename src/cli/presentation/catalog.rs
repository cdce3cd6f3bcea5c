//! Catalog and install presentation.

use crate::catalog::{CreatedProject, LanguageOutcome};
use crate::install::InstallOutcome;
use std::path::Path;

pub fn format_language_outcome(language: &str, outcome: LanguageOutcome) -> String {
    match outcome {
        LanguageOutcome::Created => format!("Language added: {}", language),
        LanguageOutcome::AlreadyKnown => format!("Language already registered: {}", language),
    }
}

pub fn format_created_project(created: &CreatedProject) -> String {
    let mut output = String::new();
    if created.language_created {
        output.push_str(&format!("Language added: {}\n", created.key.language));
    }
    output.push_str(&format!("Project created: {}\n", created.key));
    output.push_str(&format!("  Path: {}\n", created.path.display()));
    if created.files_copied > 0 {
        output.push_str(&format!("  ✓ {} template file(s) copied\n", created.files_copied));
    }
    if created.git_initialized {
        output.push_str("  ✓ git repository initialized\n");
    }
    for warning in &created.warnings {
        output.push_str(&format!("  ✗ {}\n", warning));
    }
    output.trim_end().to_string()
}

pub fn format_install_outcome(path: &Path, outcome: InstallOutcome) -> String {
    match outcome {
        InstallOutcome::Installed => format!("Default registry installed at {}", path.display()),
        InstallOutcome::Overwritten => {
            format!("Registry at {} replaced with the default", path.display())
        }
        InstallOutcome::Skipped => format!(
            "Registry already present at {} (use --force to overwrite)",
            path.display()
        ),
    }
}
