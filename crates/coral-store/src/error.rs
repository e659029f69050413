//! Content store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading a catalog export.
///
/// Individual records that fail validation are not errors; they are skipped
/// and counted on the [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("failed to {operation} catalog file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("failed to parse catalog JSON{}: {source}", display_path(.path.as_ref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but neither a record array nor a `{ "result": [...] }` response.
    #[error("unexpected catalog document shape: {reason}")]
    InvalidShape { reason: String },
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the catalog at {}", operation, path.display()),
            Self::Parse { path, source } => match path {
                Some(path) => format!(
                    "The catalog at {} is not valid JSON (line {}, column {}).",
                    path.display(),
                    source.line(),
                    source.column()
                ),
                None => format!(
                    "The catalog is not valid JSON (line {}, column {}).",
                    source.line(),
                    source.column()
                ),
            },
            Self::InvalidShape { reason } => {
                format!("The catalog document has an unexpected layout: {reason}")
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { .. } => Some(format!(
                "Pass --catalog <PATH> or set {} to a readable export file.",
                crate::paths::CATALOG_ENV_VAR
            )),
            Self::Parse { .. } => Some("Re-export the catalog from the content store.".into()),
            Self::InvalidShape { .. } => Some(
                "Export the coral query result as a JSON array or a response with a `result` array."
                    .into(),
            ),
        }
    }
}

/// Result type alias for content store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
