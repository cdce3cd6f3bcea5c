//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
/// A missing or malformed registry gets a pointer to `devmap install`.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Registry(inner) if inner.needs_install() => format!(
            "{}\nRun 'devmap install' to create a default registry.",
            e
        ),
        ApiError::LanguageNotFound(language) => format!(
            "{}\nRun 'devmap add-lang {}' or pass --create-lang.",
            e, language
        ),
        _ => e.to_string(),
    }
}
