use metonic_core::{Cycle, Segment, Symbol};
use metonic_cycles::{
    canonical_form, cycle_set, generate, in_cycle, longest_cyclic_run, occurs_in, orbit_size,
    segments, Rules,
};
use proptest::prelude::*;

fn cycle_strategy() -> impl Strategy<Value = Cycle> {
    prop::collection::vec(any::<bool>(), 1..20).prop_map(|bits| {
        let symbols = bits
            .into_iter()
            .map(|bit| if bit { Symbol::Intercalary } else { Symbol::Ordinary })
            .collect();
        Cycle::from_symbols(symbols).unwrap()
    })
}

fn all_rotations(cycle: &Cycle) -> Vec<Cycle> {
    (0..cycle.len()).map(|shift| cycle.rotate(shift)).collect()
}

proptest! {
    #[test]
    fn canonical_form_ignores_rotation(cycle in cycle_strategy(), shift in 0usize..64) {
        prop_assert_eq!(canonical_form(&cycle.rotate(shift)), canonical_form(&cycle));
    }

    #[test]
    fn canonical_form_is_the_smallest_rotation(cycle in cycle_strategy()) {
        let smallest = all_rotations(&cycle).into_iter().min().unwrap();
        prop_assert_eq!(canonical_form(&cycle), smallest);
    }

    #[test]
    fn orbit_size_counts_distinct_rotations(cycle in cycle_strategy()) {
        let mut rotations = all_rotations(&cycle);
        rotations.sort();
        rotations.dedup();
        prop_assert_eq!(orbit_size(&cycle), rotations.len());
    }

    #[test]
    fn rotations_reduce_to_one_class(cycle in cycle_strategy()) {
        let classes = cycle_set(all_rotations(&cycle)).unwrap();
        prop_assert_eq!(classes, vec![canonical_form(&cycle)]);
    }

    #[test]
    fn generated_cycles_respect_limits(n in 1usize..12, count in 0usize..12, max_i in 1usize..4, max_o in 1usize..4) {
        prop_assume!(count <= n);
        let rules = Rules::new(n, count, max_i, max_o);
        let cycles = generate(&rules).unwrap();
        prop_assert!(cycles.windows(2).all(|pair| pair[0] < pair[1]));
        for cycle in &cycles {
            prop_assert_eq!(cycle.len(), n);
            prop_assert_eq!(cycle.intercalary_count(), count);
            prop_assert!(longest_cyclic_run(cycle.symbols(), Symbol::Intercalary) <= max_i);
            prop_assert!(longest_cyclic_run(cycle.symbols(), Symbol::Ordinary) <= max_o);
        }
        let total: usize = cycle_set(cycles.clone()).unwrap().iter().map(orbit_size).sum();
        prop_assert_eq!(total, cycles.len());
    }

    #[test]
    fn extracted_segments_are_members(cycle in cycle_strategy(), k in 1usize..30) {
        let found = segments(&cycle, k).unwrap();
        prop_assert!(found.len() <= cycle.len());
        for segment in &found {
            prop_assert_eq!(segment.len(), k);
            prop_assert!(occurs_in(segment, &cycle));
        }
    }

    #[test]
    fn membership_agrees_with_extraction(cycle in cycle_strategy(), probe in cycle_strategy()) {
        let segment: Segment = probe.as_segment();
        let expected = segments(&cycle, segment.len()).unwrap().contains(&segment);
        prop_assert_eq!(occurs_in(&segment, &cycle), expected);
        let matched = in_cycle(&segment, std::slice::from_ref(&cycle));
        prop_assert_eq!(matched.is_empty(), !expected);
    }
}
