//! Commune gazetteer: (postal code, normalized name) → INSEE code.
//!
//! The index is built once from the concatenated correspondence tables and
//! queried for every place field the parser encounters. Resolution misses
//! are silent: an unresolved place simply carries no INSEE code through the
//! rest of the pipeline.

pub mod loader;

use rustc_hash::FxHashMap;

pub use loader::CommuneRow;

use crate::models::PlaceOccurrence;

/// Commune info retained per INSEE code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommuneInfo {
    /// Commune display name, as in the reference table
    pub nom_comm: String,
    /// Postal code field, possibly slash-joined
    pub postal_code: String,
}

/// Preloaded reference index resolving place names to INSEE commune codes.
///
/// `Gazetteer::default()` is the empty resolver: every lookup misses, raw
/// place text still flows through unresolved.
#[derive(Debug, Default)]
pub struct Gazetteer {
    index: FxHashMap<String, String>,
    info: FxHashMap<String, CommuneInfo>,
}

impl Gazetteer {
    /// Build the index from concatenated correspondence rows.
    ///
    /// A slash-joined `postal_code` ("75001/75002") expands to one index
    /// entry per code, all mapping to the same INSEE code.
    #[must_use]
    pub fn from_rows(rows: Vec<CommuneRow>) -> Self {
        let mut gazetteer = Self::default();
        for row in rows {
            let name_key = normalize(&row.nom_comm);
            for postal in row.postal_code.split('/') {
                gazetteer
                    .index
                    .insert(index_key(postal.trim(), &name_key), row.insee_com.clone());
            }
            gazetteer.info.insert(
                row.insee_com.clone(),
                CommuneInfo {
                    nom_comm: row.nom_comm,
                    postal_code: row.postal_code,
                },
            );
        }
        gazetteer
    }

    /// Build from one or more JSON table strings, concatenated in order
    pub fn from_json_slices(tables: &[&str]) -> crate::error::Result<Self> {
        let mut rows = Vec::new();
        for table in tables {
            rows.extend(loader::rows_from_json(table)?);
        }
        Ok(Self::from_rows(rows))
    }

    /// Look up the INSEE code for a (postal code, city text) pair
    #[must_use]
    pub fn resolve(&self, postal_code: &str, city: &str) -> Option<&str> {
        self.index
            .get(&index_key(postal_code, &normalize(city)))
            .map(String::as_str)
    }

    /// Split and resolve a raw place value into an occurrence.
    ///
    /// The raw city text and postal code are kept even when resolution
    /// misses.
    #[must_use]
    pub fn resolve_place(&self, raw: &str) -> PlaceOccurrence {
        let (city_raw, postal_code) = split_place_text(raw);
        let insee_code = match (&postal_code, &city_raw) {
            (Some(postal), Some(city)) => self.resolve(postal, city).map(str::to_string),
            _ => None,
        };
        PlaceOccurrence {
            city_raw,
            postal_code,
            insee_code,
        }
    }

    /// Commune info for a resolved INSEE code
    #[must_use]
    pub fn info(&self, insee_code: &str) -> Option<&CommuneInfo> {
        self.info.get(insee_code)
    }

    /// Number of indexed (postal code, name) entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn index_key(postal_code: &str, normalized_name: &str) -> String {
    format!("{postal_code}|{normalized_name}")
}

/// Fold a place name to its diacritic-stripped, upper-cased, trimmed form.
///
/// The fold covers the Latin accented range used by French commune names;
/// ligatures such as `œ` pass through unchanged, matching NFD behavior.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .map(fold_diacritic)
        .collect::<String>()
        .to_uppercase()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' | 'ã' => 'a',
        'À' | 'Á' | 'Â' | 'Ä' | 'Ã' => 'A',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Split a raw place value into (city, postal code).
///
/// Comma-split and trim; among the first two parts, a 5-digit token is the
/// postal code and the other the city, whichever order the source used. With
/// no 5-digit token, the first part is the city and there is no postal code.
#[must_use]
pub fn split_place_text(raw: &str) -> (Option<String>, Option<String>) {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();

    let (city, postal) = if parts.len() >= 2 {
        if is_postal_code(parts[0]) {
            (Some(parts[1]), Some(parts[0]))
        } else if is_postal_code(parts[1]) {
            (Some(parts[0]), Some(parts[1]))
        } else {
            (Some(parts[0]), None)
        }
    } else {
        (parts.first().copied(), None)
    };

    (
        city.filter(|c| !c.is_empty()).map(str::to_string),
        postal.map(str::to_string),
    )
}

fn is_postal_code(text: &str) -> bool {
    text.len() == 5 && text.bytes().all(|b| b.is_ascii_digit())
}
