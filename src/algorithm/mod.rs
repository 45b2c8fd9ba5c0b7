//! Read-only analysis over a parsed genealogy.

pub mod aggregate;
pub mod descendants;

pub use aggregate::{aggregate, individual_listing, place_label, resolved_codes};
pub use descendants::descendants_of;
