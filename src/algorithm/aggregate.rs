//! Place-frequency aggregation over the event index.

use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::config::EventKindSet;
use crate::models::{EventKind, GenealogyCollection, PlaceOccurrence};

/// Table label for one occurrence: `"<city>, <postal>, <insee>"` with the
/// literal token `X` for every absent field
#[must_use]
pub fn place_label(occurrence: &PlaceOccurrence) -> String {
    format!(
        "{}, {}, {}",
        occurrence.city_raw.as_deref().unwrap_or("X"),
        occurrence.postal_code.as_deref().unwrap_or("X"),
        occurrence.insee_code.as_deref().unwrap_or("X"),
    )
}

/// Frequency table of place labels for one event kind, sorted by descending
/// count.
///
/// Candidates are the filter ids when given, else every id present in the
/// kind's bucket; a filter disjoint from the bucket yields an empty table.
/// Marriage counts are halved with round-half-up, compensating for the
/// dual-spouse recording of marriage places.
#[must_use]
pub fn aggregate(
    collection: &GenealogyCollection,
    kind: EventKind,
    id_filter: Option<&FxHashSet<String>>,
) -> Vec<(String, usize)> {
    let candidates: Vec<&str> = match id_filter {
        Some(ids) => ids.iter().map(String::as_str).collect(),
        None => collection.events.ids(kind).collect(),
    };

    let mut counts = candidates
        .into_iter()
        .flat_map(|id| collection.events.occurrences(kind, id))
        .map(place_label)
        .counts();

    if kind == EventKind::Marriage {
        for count in counts.values_mut() {
            *count = count.div_ceil(2);
        }
    }

    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .collect()
}

/// INSEE codes reachable from the enabled event kinds, optionally restricted
/// to an id set (the map-coloring feed: candidate selection without the
/// counting step)
#[must_use]
pub fn resolved_codes(
    collection: &GenealogyCollection,
    kinds: &EventKindSet,
    id_filter: Option<&FxHashSet<String>>,
) -> FxHashSet<String> {
    let mut codes = FxHashSet::default();

    for kind in EventKind::ALL {
        if !kinds.contains(kind) {
            continue;
        }
        let candidates: Vec<&str> = match id_filter {
            Some(ids) => ids.iter().map(String::as_str).collect(),
            None => collection.events.ids(kind).collect(),
        };
        for id in candidates {
            for occurrence in collection.events.occurrences(kind, id) {
                if let Some(code) = &occurrence.insee_code {
                    codes.insert(code.clone());
                }
            }
        }
    }

    codes
}

/// Individuals with a display name, labelled for a selection control and
/// sorted by name
#[must_use]
pub fn individual_listing(collection: &GenealogyCollection) -> Vec<(String, String)> {
    collection
        .individuals()
        .filter(|individual| !individual.name.is_empty())
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .map(|individual| (individual.id.clone(), individual.listing_label()))
        .collect()
}
