//! Error types for the TikZ exporter.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that terminate an export.
#[derive(Debug, Error)]
pub enum TikzError {
    /// Nothing exportable was selected.
    #[error("ERROR: Please select at least one curve")]
    EmptySelection,

    /// The output file could not be written.
    #[error("Failed to write file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The clipboard rejected the text.
    #[error("Failed to write to clipboard")]
    Clipboard,

    /// Clipboard output was requested but no clipboard is available.
    #[error("Failed to write to clipboard: no clipboard available")]
    ClipboardUnavailable,

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scene or options description is not valid JSON.
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type TikzResult<T> = Result<T, TikzError>;
