//! Data model for a parsed genealogy.
//!
//! Individuals and families mirror the source record blocks; events carry
//! place occurrences per individual; the collection owns everything and is
//! rebuilt wholesale on each file load.

pub mod collections;
pub mod event;
pub mod family;
pub mod individual;

pub use collections::GenealogyCollection;
pub use event::{EventIndex, EventKind, PlaceOccurrence};
pub use family::Family;
pub use individual::Individual;
