//! Individual representation
//!
//! An individual is created when its record block opens and mutated as the
//! block's lines are parsed; once the file has been fully consumed it is
//! effectively immutable.

use serde::{Deserialize, Serialize};

/// A person parsed from an individual record block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Unique identifier from the source file
    pub id: String,
    /// Display name, reordered to "surname given"; empty until a name line
    /// has been seen
    pub name: String,
    /// Four-digit birth year, when a dated birth event was seen
    pub birth_year: Option<String>,
    /// Four-digit death year, when a dated death event was seen
    pub death_year: Option<String>,
    /// Family in which this individual is a child
    pub famc: Option<String>,
}

impl Individual {
    /// Create a new individual with only its identifier set
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Selection-control label: `"<name> (<birth|X> - <death|X>)"`
    #[must_use]
    pub fn listing_label(&self) -> String {
        format!(
            "{} ({} - {})",
            self.name,
            self.birth_year.as_deref().unwrap_or("X"),
            self.death_year.as_deref().unwrap_or("X"),
        )
    }
}
