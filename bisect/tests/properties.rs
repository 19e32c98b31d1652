//! Randomized checks of the search contract
//!
//! Sequences are generated from a fixed seed so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bisect::{
    binary_search, search_batch, to_sentinel, SearchConfig, SortedSequence, SortedVec, NOT_FOUND,
};

fn random_sorted(rng: &mut StdRng, len: usize, spread: i32) -> Vec<i32> {
    let mut values: Vec<i32> = (0..len).map(|_| rng.gen_range(-spread..=spread)).collect();
    values.sort_unstable();
    values
}

#[test]
fn test_present_values_are_found() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let len = rng.gen_range(1..300);
        let values = random_sorted(&mut rng, len, 1000);

        for _ in 0..20 {
            let target = values[rng.gen_range(0..len)];
            let index = binary_search(&values, &target).expect("present value not found");
            assert_eq!(values[index], target);
        }
    }
}

#[test]
fn test_absent_values_are_not_found() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.gen_range(0..300);
        let values = random_sorted(&mut rng, len, 500);

        for _ in 0..20 {
            let target = rng.gen_range(-600..=600);
            let expected = values.contains(&target);
            let result = binary_search(&values, &target);
            assert_eq!(result.is_some(), expected, "target {target} in {values:?}");
            if !expected {
                assert_eq!(to_sentinel(result), NOT_FOUND);
            }
        }
    }
}

#[test]
fn test_duplicates_resolve_to_an_equal_element() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let len = rng.gen_range(1..200);
        // Narrow spread forces long runs of equal values
        let values = random_sorted(&mut rng, len, 3);

        for target in -3..=3 {
            match binary_search(&values, &target) {
                Some(index) => assert_eq!(values[index], target),
                None => assert!(!values.contains(&target)),
            }
        }
    }
}

#[test]
fn test_owned_sequence_agrees_with_slice_search() {
    let mut rng = StdRng::seed_from_u64(99);
    let values = random_sorted(&mut rng, 5_000, 100_000);
    let seq = SortedVec::from_sorted(values.clone()).unwrap();

    let targets: Vec<i32> = (0..2_000).map(|_| rng.gen_range(-100_000..=100_000)).collect();
    let config = SearchConfig::default().with_parallel_threshold(64);
    let batch = search_batch(&seq, &targets, &config);

    for (target, result) in targets.iter().zip(batch) {
        assert_eq!(result, binary_search(&values, target));
        assert_eq!(result, seq.search(target));
    }
}

#[test]
fn test_repeated_search_is_stable() {
    let mut rng = StdRng::seed_from_u64(1);
    let values = random_sorted(&mut rng, 1_000, 50);

    for target in -50..=50 {
        let first = binary_search(&values, &target);
        for _ in 0..5 {
            assert_eq!(binary_search(&values, &target), first);
        }
    }
}
