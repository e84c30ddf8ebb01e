//! Property-based tests for the loading enumerator.
//!
//! Inventories use weights and thicknesses on a quarter/half grid so every
//! sum is exact, and are checked against a brute-force listing.

use std::collections::HashSet;

use plate_planner::{
    combo::ComboResult, enumerator::enumerate, loading_mode::LoadingMode, plate::Plate,
};
use proptest::prelude::*;

fn arb_plate() -> impl Strategy<Value = Plate> {
    (1..=40u32, 1..=12u32, 0..=12usize).prop_map(|(w, t, count)| {
        Plate::new(f64::from(w) * 0.25, f64::from(t) * 0.5, count)
    })
}

fn arb_inventory() -> impl Strategy<Value = Vec<Plate>> {
    prop::collection::vec(arb_plate(), 0..=4)
}

fn arb_mode() -> impl Strategy<Value = LoadingMode> {
    prop::sample::select(LoadingMode::ALL.to_vec())
}

fn arb_side_length() -> impl Strategy<Value = f64> {
    (0..=50u32).prop_map(|half_cm| f64::from(half_cm) * 0.5)
}

/// Every per-side loading with positive weight, by counting through all caps.
fn brute_force(plates: &[Plate], side_length: f64, mode: LoadingMode) -> HashSet<Vec<(usize, usize)>> {
    let caps: Vec<usize> = plates.iter().map(|p| p.per_side_cap(mode)).collect();
    let mut found = HashSet::new();
    let mut counts = vec![0usize; plates.len()];

    loop {
        let thickness: f64 = plates
            .iter()
            .zip(&counts)
            .map(|(p, &n)| p.thickness() * n as f64)
            .sum();
        if counts.iter().any(|&n| n > 0) && thickness <= side_length + 1e-9 {
            found.insert(
                counts
                    .iter()
                    .enumerate()
                    .filter(|(_, n)| **n > 0)
                    .map(|(i, &n)| (i, n))
                    .collect(),
            );
        }

        let Some(slot) = (0..counts.len()).find(|&i| counts[i] < caps[i]) else {
            break;
        };
        counts[slot] += 1;
        counts[..slot].iter_mut().for_each(|n| *n = 0);
    }

    found
}

fn pairs(combo: &ComboResult) -> Vec<(usize, usize)> {
    combo
        .per_side_counts()
        .iter()
        .map(|(&i, &n)| (i, n))
        .collect()
}

proptest! {
    #[test]
    fn matches_brute_force(
        plates in arb_inventory(),
        side_length in arb_side_length(),
        mode in arb_mode(),
    ) {
        let results = enumerate(&plates, side_length, mode, false).unwrap();
        let listed: HashSet<_> = results.iter().map(pairs).collect();

        prop_assert_eq!(listed.len(), results.len());
        prop_assert_eq!(listed, brute_force(&plates, side_length, mode));
    }

    #[test]
    fn results_respect_caps_and_length(
        plates in arb_inventory(),
        side_length in arb_side_length(),
        mode in arb_mode(),
    ) {
        let results = enumerate(&plates, side_length, mode, false).unwrap();

        for combo in &results {
            prop_assert!(combo.per_side_thickness() <= side_length + 1e-9);
            for (&idx, &n) in combo.per_side_counts() {
                prop_assert!(n > 0);
                prop_assert!(n <= plates[idx].count() / mode.sharing_factor());
            }
        }
    }

    #[test]
    fn weight_and_thickness_follow_counts(
        plates in arb_inventory(),
        side_length in arb_side_length(),
        mode in arb_mode(),
    ) {
        let results = enumerate(&plates, side_length, mode, false).unwrap();

        for combo in &results {
            let (weight, thickness) = combo
                .per_side_counts()
                .iter()
                .fold((0.0, 0.0), |(w, t), (&idx, &n)| {
                    (w + plates[idx].weight() * n as f64, t + plates[idx].thickness() * n as f64)
                });
            prop_assert!((combo.total_weight() - 2.0 * weight).abs() < 1e-9);
            prop_assert!((combo.per_side_thickness() - thickness).abs() < 1e-9);
            prop_assert!(combo.total_weight() > 0.0);
        }
    }

    #[test]
    fn sorted_heaviest_then_shortest(
        plates in arb_inventory(),
        side_length in arb_side_length(),
        mode in arb_mode(),
    ) {
        let results = enumerate(&plates, side_length, mode, false).unwrap();

        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.total_weight() >= b.total_weight());
            if a.total_weight() == b.total_weight() {
                prop_assert!(a.per_side_thickness() <= b.per_side_thickness());
            }
        }
    }

    #[test]
    fn zero_load_adds_exactly_one_empty_result(
        plates in arb_inventory(),
        side_length in arb_side_length(),
        mode in arb_mode(),
    ) {
        let without = enumerate(&plates, side_length, mode, false).unwrap();
        let with = enumerate(&plates, side_length, mode, true).unwrap();

        prop_assert_eq!(with.len(), without.len() + 1);
        let empty = with.last().unwrap();
        prop_assert!(empty.per_side_counts().is_empty());
        prop_assert_eq!(empty.total_weight(), 0.0);
        prop_assert_eq!(empty.summary(), "(empty)");
    }

    #[test]
    fn too_few_plates_for_one_per_side_gives_nothing(
        weights in prop::collection::vec(1..=40u32, 1..=4),
        mode in arb_mode(),
    ) {
        let plates: Vec<Plate> = weights
            .iter()
            .map(|&w| Plate::new(f64::from(w) * 0.25, 1.0, mode.sharing_factor() - 1))
            .collect();
        prop_assert!(enumerate(&plates, 25.0, mode, false).unwrap().is_empty());
    }
}

#[test]
fn brute_force_counts_every_combination() {
    let plates = vec![Plate::new(1.0, 1.0, 4), Plate::new(2.0, 1.0, 2)];
    let found = brute_force(&plates, 10.0, LoadingMode::Single);
    assert_eq!(found.len(), 3 * 2 - 1);
    assert!(found.contains(&vec![(0, 2), (1, 1)]));
}
