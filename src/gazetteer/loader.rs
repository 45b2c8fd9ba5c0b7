//! Gazetteer table deserialization.
//!
//! The reference data is shipped as JSON arrays of commune correspondence
//! rows; multiple tables are concatenated before indexing.

use serde::Deserialize;

use crate::error::Result;

/// One row of a commune correspondence table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommuneRow {
    /// Postal code, possibly slash-joined ("75001/75002")
    pub postal_code: String,
    /// Commune display name
    pub nom_comm: String,
    /// INSEE commune code
    pub insee_com: String,
}

/// Deserialize one JSON array of correspondence rows
pub fn rows_from_json(json: &str) -> Result<Vec<CommuneRow>> {
    Ok(serde_json::from_str(json)?)
}
