//! Logging utilities
//!
//! Standardized logging for the load → parse → report pipeline.

use std::path::Path;
use std::time::Duration;

use crate::models::GenealogyCollection;

/// Log the start of a file load with consistent format
pub fn log_load_start(what: &str, path: &Path) {
    log::info!("Loading {} from {}", what, path.display());
}

/// Log a completed parse with its headline counts
///
/// # Arguments
/// * `collection` - The freshly built genealogy
/// * `elapsed` - Optional elapsed time for the parse
pub fn log_parse_complete(collection: &GenealogyCollection, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!(
            "Parsed {} individuals and {} families in {duration:?}",
            collection.individual_count(),
            collection.family_count(),
        );
    } else {
        log::info!(
            "Parsed {} individuals and {} families",
            collection.individual_count(),
            collection.family_count(),
        );
    }
}

/// Log a degraded-mode warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_degraded(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
