//! A Rust library for parsing GEDCOM genealogy files, resolving event
//! places against a commune gazetteer, and reporting descendant sets and
//! per-event place frequencies.

pub mod algorithm;
pub mod async_io;
pub mod config;
pub mod error;
pub mod gazetteer;
pub mod models;
pub mod parser;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::EventKindSet;
pub use error::{GedmapError, Result};
pub use models::{EventIndex, EventKind, Family, GenealogyCollection, Individual, PlaceOccurrence};
pub use parser::GedcomParser;

// Place resolution
pub use gazetteer::{CommuneRow, Gazetteer, normalize, split_place_text};

// Analysis
pub use algorithm::{aggregate, descendants_of, individual_listing, place_label, resolved_codes};

// Async functionality
pub use async_io::load_gazetteer;
