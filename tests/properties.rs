//! Property tests for the data-processing functions
//!
//! Verifies:
//! - Exactness: duplicates are precisely the values counted twice or more
//! - Bounds: the mean lies between the minimum and maximum
//! - Order independence: the median ignores permutation
//! - Determinism: repeated calls give identical output
//! - Parity: the quadratic reference versions agree with the linear ones

use std::collections::{HashMap, HashSet};

use perf_detective::{
    calculate_statistics, filter_and_transform, find_duplicates, naive, process_large_dataset,
};
use proptest::prelude::*;

fn counts(items: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for &item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn duplicates_are_exactly_repeated_values(items in prop::collection::vec(-20i32..20, 0..200)) {
        let duplicates = find_duplicates(&items);
        let expected: HashSet<i32> = counts(&items)
            .into_iter()
            .filter(|&(_, count)| count >= 2)
            .map(|(value, _)| value)
            .collect();

        prop_assert_eq!(duplicates, expected);
    }

    #[test]
    fn mean_within_bounds(data in prop::collection::vec(-1_000_000i64..1_000_000, 1..200)) {
        let mean = calculate_statistics(&data).mean.unwrap();
        let min = *data.iter().min().unwrap() as f64;
        let max = *data.iter().max().unwrap() as f64;

        prop_assert!(mean >= min && mean <= max);
    }

    #[test]
    fn median_ignores_order(
        data in prop::collection::vec(-1000i32..1000, 1..100),
        shift in 0usize..100,
    ) {
        let mut rotated = data.clone();
        rotated.rotate_left(shift % data.len());
        let mut reversed = data.clone();
        reversed.reverse();

        let median = calculate_statistics(&data).median;
        prop_assert_eq!(median, calculate_statistics(&rotated).median);
        prop_assert_eq!(median, calculate_statistics(&reversed).median);
    }

    #[test]
    fn mode_has_maximum_count(data in prop::collection::vec(0i32..10, 1..100)) {
        let counts = counts(&data);
        let mode = calculate_statistics(&data).mode.unwrap();
        let max_count = counts.values().copied().max().unwrap();

        prop_assert_eq!(counts[&mode], max_count);
        let first = data.iter().find(|value| counts[*value] == max_count).copied();
        prop_assert_eq!(Some(mode), first);
    }

    #[test]
    fn filter_keeps_count_and_order(
        data in prop::collection::vec(-500i32..500, 0..200),
        threshold in -500i32..500,
    ) {
        let result = filter_and_transform(&data, threshold);
        let expected: Vec<String> = data
            .iter()
            .filter(|&&value| value > threshold)
            .map(|value| value.to_string())
            .collect();

        prop_assert_eq!(result, expected);
    }

    #[test]
    fn repeated_calls_are_deterministic(data in prop::collection::vec(0u32..50, 1..100)) {
        let operations = ["duplicates", "statistics", "filter"];

        prop_assert_eq!(find_duplicates(&data), find_duplicates(&data));
        prop_assert_eq!(calculate_statistics(&data), calculate_statistics(&data));
        prop_assert_eq!(filter_and_transform(&data, 25), filter_and_transform(&data, 25));
        prop_assert_eq!(
            process_large_dataset(&data, &operations).unwrap(),
            process_large_dataset(&data, &operations).unwrap()
        );
    }

    #[test]
    fn processor_duplicates_match_set_version(data in prop::collection::vec(-20i64..20, 0..150)) {
        let report = process_large_dataset(&data, &["duplicates"]).unwrap();
        let duplicates = report.duplicates.unwrap();
        let unique: HashSet<i64> = duplicates.iter().copied().collect();

        prop_assert_eq!(unique.len(), duplicates.len());
        prop_assert_eq!(unique, find_duplicates(&data));
    }

    #[test]
    fn float_text_reads_back(data in prop::collection::vec(-1e20f64..1e20, 0..50)) {
        for (text, value) in filter_and_transform(&data, f64::NEG_INFINITY).iter().zip(&data) {
            prop_assert_eq!(text.parse::<f64>().unwrap(), *value);
            prop_assert!(text.contains('.') || text.contains('E'));
        }
    }

    #[test]
    fn naive_versions_agree(data in prop::collection::vec(-30i32..30, 0..80)) {
        let naive_duplicates: HashSet<i32> = naive::find_duplicates(&data).into_iter().collect();

        prop_assert_eq!(naive_duplicates, find_duplicates(&data));
        prop_assert_eq!(naive::calculate_statistics(&data), calculate_statistics(&data));
        prop_assert_eq!(naive::filter_and_transform(&data, 0), filter_and_transform(&data, 0));
    }
}
