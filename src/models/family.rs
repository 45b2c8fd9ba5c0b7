//! Family unit representation
//!
//! A family links up to two spouses; its children are derived after parsing
//! from the individuals' family-as-child references, not stored here.

use serde::{Deserialize, Serialize};

/// A family unit parsed from a family record block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Unique family identifier from the source file
    pub id: String,
    /// Husband's individual identifier, if declared
    pub husband: Option<String>,
    /// Wife's individual identifier, if declared
    pub wife: Option<String>,
}

impl Family {
    /// Create a new family with only its identifier set
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Spouse ids present on this family
    pub fn spouses(&self) -> impl Iterator<Item = &str> {
        self.husband.as_deref().into_iter().chain(self.wife.as_deref())
    }

    /// Whether `id` is one of this family's spouses
    #[must_use]
    pub fn has_spouse(&self, id: &str) -> bool {
        self.spouses().any(|spouse| spouse == id)
    }
}
