#![allow(dead_code)]

/// 50 unique items, each duplicated.
pub fn small_dataset() -> Vec<u64> {
    (0..50).chain(0..50).collect()
}

/// 500 unique items, each duplicated.
pub fn medium_dataset() -> Vec<u64> {
    (0..500).chain(0..500).collect()
}

/// 5000 unique items, each duplicated.
pub fn large_dataset() -> Vec<u64> {
    (0..5000).chain(0..5000).collect()
}

pub fn numeric_data() -> Vec<u64> {
    [1, 2, 3, 4, 5, 5, 6, 7, 8, 9, 10].repeat(100)
}

/// Fixtures paired with the filter threshold used against them.
pub fn sized_datasets() -> Vec<(&'static str, Vec<u64>, u64)> {
    vec![
        ("small", small_dataset(), 25),
        ("medium", medium_dataset(), 250),
        ("large", large_dataset(), 2500),
    ]
}
