//! Descendant closure over the family graph.

use rustc_hash::FxHashSet;

use crate::models::GenealogyCollection;

/// All descendants of `root_id`, including the root itself.
///
/// Expansion follows "is spouse in family" → "that family's children",
/// transitively, using an explicit worklist and a visited set: deep or wide
/// trees never recurse, and a malformed self-referential ancestry cannot
/// loop. A root matching no individual or family yields a singleton set.
/// Only membership is meaningful; iteration order is not.
#[must_use]
pub fn descendants_of(collection: &GenealogyCollection, root_id: &str) -> FxHashSet<String> {
    let mut result = FxHashSet::default();
    let mut worklist = vec![root_id.to_string()];

    while let Some(id) = worklist.pop() {
        if !result.insert(id.clone()) {
            continue;
        }
        for family in collection.families_with_spouse(&id) {
            worklist.extend(collection.children_of(&family.id).iter().cloned());
        }
    }

    result
}
