//! Console output utilities
//!
//! Formatted console output for the demonstration binary: summary counts,
//! frequency tables and the resolved-commune listing.

use crate::gazetteer::Gazetteer;
use crate::models::{EventKind, GenealogyCollection};

/// Print summary counts for a parsed genealogy
pub fn print_dataset_summary(collection: &GenealogyCollection) {
    println!("Individuals: {}", collection.individual_count());
    println!("Families: {}", collection.family_count());
    for kind in EventKind::ALL {
        println!("  {kind} occurrences: {}", collection.events.occurrence_count(kind));
    }
}

/// Print one event kind's place-frequency table
pub fn print_frequency_table(kind: EventKind, rows: &[(String, usize)]) {
    println!("{kind} places:");
    if rows.is_empty() {
        println!("  (none)");
        return;
    }
    for (label, count) in rows {
        println!("  {label}: {count}");
    }
}

/// Print resolved INSEE codes with their commune names where known
pub fn print_resolved_codes(codes: &[&String], gazetteer: &Gazetteer) {
    println!("Resolved communes: {}", codes.len());
    for code in codes {
        match gazetteer.info(code) {
            Some(info) => println!("  {code} ({})", info.nom_comm),
            None => println!("  {code}"),
        }
    }
}
