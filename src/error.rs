//! Crate error type for the parse boundary.

use thiserror::Error;

/// Errors produced while turning frontend JSON into the document model.
///
/// Analysis never fails: structural problems come back as findings inside
/// the `ValidationReport`, not as `Err` values.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Failed to parse workflow JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
