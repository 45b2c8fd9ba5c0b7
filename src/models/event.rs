//! Life event kinds and their place occurrences.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The six life event kinds tracked by the dataset.
///
/// GEDCOM tags outside this set are dropped silently during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Birth (BIRT)
    Birth,
    /// Baptism / christening (CHR)
    Baptism,
    /// Marriage (MARR)
    Marriage,
    /// Death (DEAT)
    Death,
    /// Burial (BURI)
    Burial,
    /// Residence (RESI, or a generic EVEN typed "residence")
    Residence,
}

impl EventKind {
    /// All six kinds, in table-rendering order
    pub const ALL: [Self; 6] = [
        Self::Birth,
        Self::Baptism,
        Self::Marriage,
        Self::Death,
        Self::Burial,
        Self::Residence,
    ];

    /// Map a GEDCOM level-1 tag to an event kind
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BIRT" => Some(Self::Birth),
            "CHR" => Some(Self::Baptism),
            "MARR" => Some(Self::Marriage),
            "DEAT" => Some(Self::Death),
            "BURI" => Some(Self::Burial),
            "RESI" => Some(Self::Residence),
            _ => None,
        }
    }

    /// The GEDCOM tag for this kind
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Birth => "BIRT",
            Self::Baptism => "CHR",
            Self::Marriage => "MARR",
            Self::Death => "DEAT",
            Self::Burial => "BURI",
            Self::Residence => "RESI",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Birth => "Birth",
            Self::Baptism => "Baptism",
            Self::Marriage => "Marriage",
            Self::Death => "Death",
            Self::Burial => "Burial",
            Self::Residence => "Residence",
        };
        write!(f, "{name}")
    }
}

/// A place attached to one event occurrence.
///
/// Every field degrades independently: an unresolved place keeps its raw
/// text, a missing postal code blocks resolution but not recording.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOccurrence {
    /// City text as written in the source
    pub city_raw: Option<String>,
    /// Five-digit postal code, when one of the leading place parts was one
    pub postal_code: Option<String>,
    /// INSEE commune code, when the gazetteer matched
    pub insee_code: Option<String>,
}

/// For each event kind, individual id → place occurrences in file order.
///
/// Marriage occurrences are recorded under both spouse ids; aggregation
/// halves the counts to compensate.
#[derive(Debug, Default)]
pub struct EventIndex {
    buckets: FxHashMap<EventKind, FxHashMap<String, Vec<PlaceOccurrence>>>,
}

impl EventIndex {
    /// Create a new empty `EventIndex`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an occurrence to one individual's list under one kind
    pub fn record(&mut self, kind: EventKind, individual_id: &str, occurrence: PlaceOccurrence) {
        self.buckets
            .entry(kind)
            .or_default()
            .entry(individual_id.to_string())
            .or_default()
            .push(occurrence);
    }

    /// Occurrences for one individual under one kind, in file order
    #[must_use]
    pub fn occurrences(&self, kind: EventKind, individual_id: &str) -> &[PlaceOccurrence] {
        self.buckets
            .get(&kind)
            .and_then(|bucket| bucket.get(individual_id))
            .map_or(&[], Vec::as_slice)
    }

    /// Ids with at least one occurrence under a kind
    pub fn ids(&self, kind: EventKind) -> impl Iterator<Item = &str> {
        self.buckets
            .get(&kind)
            .into_iter()
            .flat_map(|bucket| bucket.keys().map(String::as_str))
    }

    /// Total occurrence count under a kind, across all individuals
    #[must_use]
    pub fn occurrence_count(&self, kind: EventKind) -> usize {
        self.buckets
            .get(&kind)
            .map_or(0, |bucket| bucket.values().map(Vec::len).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::EventKind;

    #[test]
    fn tags_round_trip_for_all_six_kinds() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn unknown_tags_map_to_none() {
        assert_eq!(EventKind::from_tag("OCCU"), None);
        assert_eq!(EventKind::from_tag("EVEN"), None);
        assert_eq!(EventKind::from_tag(""), None);
    }
}
