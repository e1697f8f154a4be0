//! Genetic operators over job-subset chromosomes.
//!
//! All operators take an explicit `Rng` so that runs are reproducible
//! under a seeded generator.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::chromosome::Selection;

/// Performs single-point crossover between two parents.
///
/// The cut point is drawn uniformly from `[1, min(len1, len2) - 1]` when
/// that range is non-empty, otherwise 1. The child is parent 1's prefix up
/// to the cut, followed by parent 2's ids that are not already in that
/// prefix, in parent 2's order. The child may exceed the daily capacity;
/// the caller truncates.
pub fn single_point_crossover<R: Rng>(
    parent1: &Selection,
    parent2: &Selection,
    rng: &mut R,
) -> Selection {
    let min_len = parent1.len().min(parent2.len());
    let cut = if min_len > 1 {
        rng.random_range(1..min_len)
    } else {
        1
    };

    let prefix_len = cut.min(parent1.len());
    let mut ids: Vec<String> = parent1.ids()[..prefix_len].to_vec();
    for id in parent2.ids() {
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.clone());
        }
    }
    Selection::new(ids)
}

/// Pads a selection up to `capacity` with a uniform random sample of valid
/// ids it does not already contain.
///
/// No-op when the selection is already at capacity or no unused valid ids
/// remain.
pub fn fill_with_unused<R: Rng>(
    selection: &mut Selection,
    valid_ids: &[String],
    capacity: usize,
    rng: &mut R,
) {
    if selection.len() >= capacity {
        return;
    }
    let mut unused: Vec<&String> = valid_ids
        .iter()
        .filter(|id| !selection.contains(id.as_str()))
        .collect();
    unused.shuffle(rng);

    let deficit = capacity - selection.len();
    for id in unused.into_iter().take(deficit) {
        selection.ids_mut().push(id.clone());
    }
}

/// Replaces one random position with a uniformly random valid id not
/// already present in the selection.
///
/// No-op when the selection is empty or no replacement candidate exists.
pub fn replace_mutation<R: Rng>(selection: &mut Selection, valid_ids: &[String], rng: &mut R) {
    if selection.is_empty() {
        return;
    }
    let idx = rng.random_range(0..selection.len());
    let unused: Vec<&String> = valid_ids
        .iter()
        .filter(|id| !selection.contains(id.as_str()))
        .collect();
    if let Some(replacement) = unused.choose(rng) {
        selection.ids_mut()[idx] = (*replacement).clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn selection(raw: &[&str]) -> Selection {
        Selection::new(raw.iter().map(|s| s.to_string()).collect())
    }

    fn id_pool(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("J{i}")).collect()
    }

    fn has_duplicates(selection: &Selection) -> bool {
        let mut seen = selection.ids().to_vec();
        seen.sort();
        let before = seen.len();
        seen.dedup();
        seen.len() != before
    }

    #[test]
    fn test_crossover_keeps_parent1_prefix() {
        let p1 = selection(&["A", "B", "C"]);
        let p2 = selection(&["D", "E", "F"]);
        let mut rng = SmallRng::seed_from_u64(42);
        let child = single_point_crossover(&p1, &p2, &mut rng);

        // Cut is in [1, 2]; the first id always comes from parent 1.
        assert_eq!(child.ids()[0], "A");
        // Disjoint parents: child carries all of parent 2 after the prefix.
        assert!(child.contains("D") && child.contains("E") && child.contains("F"));
    }

    #[test]
    fn test_crossover_skips_duplicate_ids() {
        let p1 = selection(&["A", "B", "C"]);
        let p2 = selection(&["C", "B", "D"]);
        let mut rng = SmallRng::seed_from_u64(42);
        let child = single_point_crossover(&p1, &p2, &mut rng);
        assert!(!has_duplicates(&child));
    }

    #[test]
    fn test_crossover_preserves_parent2_order() {
        let p1 = selection(&["A"]);
        let p2 = selection(&["X", "Y", "Z"]);
        let mut rng = SmallRng::seed_from_u64(42);
        // min_len == 1 forces cut = 1: child = [A] + parent2 remainder.
        let child = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(child.ids(), &["A", "X", "Y", "Z"].map(String::from)[..]);
    }

    #[test]
    fn test_crossover_single_id_parents() {
        let p1 = selection(&["A"]);
        let p2 = selection(&["B"]);
        let mut rng = SmallRng::seed_from_u64(42);
        let child = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(child.ids(), &["A", "B"].map(String::from)[..]);
    }

    #[test]
    fn test_fill_pads_to_capacity_with_unused() {
        let pool = id_pool(10);
        let mut sel = selection(&["J0", "J1"]);
        let mut rng = SmallRng::seed_from_u64(42);
        fill_with_unused(&mut sel, &pool, 5, &mut rng);

        assert_eq!(sel.len(), 5);
        assert!(!has_duplicates(&sel));
        for id in sel.ids() {
            assert!(pool.contains(id));
        }
        // Original ids keep their positions.
        assert_eq!(&sel.ids()[..2], &["J0", "J1"].map(String::from)[..]);
    }

    #[test]
    fn test_fill_limited_by_unused_pool() {
        let pool = id_pool(3);
        let mut sel = selection(&["J0", "J1"]);
        let mut rng = SmallRng::seed_from_u64(42);
        fill_with_unused(&mut sel, &pool, 10, &mut rng);
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn test_fill_noop_at_capacity() {
        let pool = id_pool(10);
        let mut sel = selection(&["J0", "J1"]);
        let before = sel.clone();
        let mut rng = SmallRng::seed_from_u64(42);
        fill_with_unused(&mut sel, &pool, 2, &mut rng);
        assert_eq!(sel, before);
    }

    #[test]
    fn test_mutation_swaps_in_unused_id() {
        let pool = id_pool(10);
        let mut sel = selection(&["J0", "J1", "J2"]);
        let mut rng = SmallRng::seed_from_u64(42);
        replace_mutation(&mut sel, &pool, &mut rng);

        assert_eq!(sel.len(), 3);
        assert!(!has_duplicates(&sel));
        // Exactly one position changed, to an id outside the original three.
        let changed: Vec<&String> = sel
            .ids()
            .iter()
            .filter(|id| !["J0", "J1", "J2"].contains(&id.as_str()))
            .collect();
        assert_eq!(changed.len(), 1);
    }

    #[test]
    fn test_mutation_noop_without_candidates() {
        let pool = id_pool(3);
        let mut sel = selection(&["J0", "J1", "J2"]);
        let before = sel.clone();
        let mut rng = SmallRng::seed_from_u64(42);
        replace_mutation(&mut sel, &pool, &mut rng);
        assert_eq!(sel, before);
    }

    #[test]
    fn test_mutation_noop_on_empty_selection() {
        let pool = id_pool(3);
        let mut sel = Selection::new(vec![]);
        let mut rng = SmallRng::seed_from_u64(42);
        replace_mutation(&mut sel, &pool, &mut rng);
        assert!(sel.is_empty());
    }

    proptest! {
        /// Offspring never contain duplicate ids, before any padding or
        /// truncation.
        #[test]
        fn prop_crossover_offspring_duplicate_free(
            len1 in 1usize..8,
            len2 in 1usize..8,
            overlap in 0usize..8,
            seed in any::<u64>(),
        ) {
            // Parents share `overlap` ids and are otherwise disjoint.
            let p1: Vec<String> = (0..len1).map(|i| format!("P{i}")).collect();
            let p2: Vec<String> = (0..len2)
                .map(|i| {
                    if i < overlap.min(len1) {
                        format!("P{i}")
                    } else {
                        format!("Q{i}")
                    }
                })
                .collect();
            let mut rng = SmallRng::seed_from_u64(seed);
            let child = single_point_crossover(&Selection::new(p1), &Selection::new(p2), &mut rng);
            prop_assert!(!has_duplicates(&child));
        }
    }
}
