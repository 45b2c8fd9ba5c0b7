//! Error handling for `gedmap`.
//!
//! Errors only arise at the I/O and deserialization boundary (reading the
//! GEDCOM file and the gazetteer tables). Malformed record lines and
//! unresolved places are not errors: the parser skips the former and the
//! resolver degrades to absent fields for the latter.

use std::io;

/// Specialized error type for file and reference-data loading
#[derive(Debug, thiserror::Error)]
pub enum GedmapError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error deserializing a gazetteer table
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed reference data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for `gedmap` operations
pub type Result<T> = std::result::Result<T, GedmapError>;
