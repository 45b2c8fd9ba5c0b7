//! Async loading of the gazetteer reference tables.
//!
//! This is the one asynchronous boundary in the crate: the resolver must be
//! fully built before parsing begins. A caller that lets the load fail can
//! log it and fall back to `Gazetteer::default()` — every resolution then
//! misses, which is the accepted degraded mode.

use std::path::Path;

use futures::future::try_join_all;
use log::info;

use crate::error::Result;
use crate::gazetteer::{Gazetteer, loader};

/// Read one or more JSON commune tables concurrently and merge them, in
/// argument order, into a single gazetteer index.
pub async fn load_gazetteer<P: AsRef<Path>>(paths: &[P]) -> Result<Gazetteer> {
    let reads = paths
        .iter()
        .map(|path| tokio::fs::read_to_string(path.as_ref()));
    let contents = try_join_all(reads).await?;

    let mut rows = Vec::new();
    for table in &contents {
        rows.extend(loader::rows_from_json(table)?);
    }

    info!(
        "Loaded {} gazetteer rows from {} tables",
        rows.len(),
        paths.len()
    );
    Ok(Gazetteer::from_rows(rows))
}
