//! Owning collection for one parsed genealogy.
//!
//! A collection is rebuilt wholesale on each file load; prior state is
//! discarded, never merged. Traversal and aggregation read it without
//! mutation and may run repeatedly.

use rustc_hash::FxHashMap;

use super::event::EventIndex;
use super::family::Family;
use super::individual::Individual;

/// All graph structures produced by one parse
#[derive(Debug, Default)]
pub struct GenealogyCollection {
    individuals: FxHashMap<String, Individual>,
    // insertion order of individual ids; drives children-index ordering
    individual_order: Vec<String>,
    families: FxHashMap<String, Family>,
    /// Per-kind place occurrences
    pub events: EventIndex,
    children: FxHashMap<String, Vec<String>>,
}

impl GenealogyCollection {
    /// Create a new empty `GenealogyCollection`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an individual, replacing any prior entry with the same id.
    ///
    /// A replaced id keeps its original insertion position.
    pub fn insert_individual(&mut self, individual: Individual) {
        let id = individual.id.clone();
        if self.individuals.insert(id.clone(), individual).is_none() {
            self.individual_order.push(id);
        }
    }

    /// Insert a family, replacing any prior entry with the same id
    pub fn insert_family(&mut self, family: Family) {
        self.families.insert(family.id.clone(), family);
    }

    /// Get an individual by id
    #[must_use]
    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Get a mutable individual by id (used while its block is open)
    pub fn individual_mut(&mut self, id: &str) -> Option<&mut Individual> {
        self.individuals.get_mut(id)
    }

    /// Get a family by id
    #[must_use]
    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    /// Get a mutable family by id (used while its block is open)
    pub fn family_mut(&mut self, id: &str) -> Option<&mut Family> {
        self.families.get_mut(id)
    }

    /// Individuals in file insertion order
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individual_order
            .iter()
            .filter_map(|id| self.individuals.get(id))
    }

    /// All families, in no particular order
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    /// Families in which `id` is a spouse
    pub fn families_with_spouse(&self, id: &str) -> impl Iterator<Item = &Family> {
        self.families.values().filter(move |family| family.has_spouse(id))
    }

    /// Number of individuals
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Number of families
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Children of a family, in individual insertion order
    #[must_use]
    pub fn children_of(&self, family_id: &str) -> &[String] {
        self.children.get(family_id).map_or(&[], Vec::as_slice)
    }

    /// Rebuild the family → children mapping from the individuals'
    /// family-as-child references.
    ///
    /// Runs as a post-pass after the full file has been consumed: a
    /// family-as-child reference may be parsed before or after the family
    /// block it points at, so the index cannot be built incrementally.
    pub fn rebuild_children_index(&mut self) {
        self.children.clear();
        for id in &self.individual_order {
            let Some(individual) = self.individuals.get(id) else {
                continue;
            };
            if let Some(famc) = &individual.famc {
                self.children.entry(famc.clone()).or_default().push(id.clone());
            }
        }
    }
}
