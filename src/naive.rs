//! Quadratic reference implementations.
//!
//! Used by the profiler and benchmarks to show the cost of the
//! straightforward approach next to the linear versions in
//! [crate::duplicates], [crate::statistics] and [crate::transform]. Results
//! match the linear versions exactly. Do not use these for real work.

use crate::numeric::Numeric;
use crate::statistics::{mean, median, Statistics};

/// Compare every pair, scanning the output list before each insert.
pub fn find_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut duplicates: Vec<T> = Vec::new();
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if items[i] == items[j] && !duplicates.contains(&items[i]) {
                duplicates.push(items[i].clone());
            }
        }
    }
    duplicates
}

/// Recount every element against the whole dataset.
pub fn mode<T: Numeric>(data: &[T]) -> Option<T> {
    let mut mode = None;
    let mut max_count = 0;
    for &value in data {
        let count = data.iter().filter(|&&other| other == value).count();
        if count > max_count {
            max_count = count;
            mode = Some(value);
        }
    }
    mode
}

pub fn calculate_statistics<T: Numeric>(data: &[T]) -> Statistics<T> {
    if data.is_empty() {
        return Statistics::default();
    }
    Statistics {
        mean: mean(data).ok(),
        median: median(data),
        mode: mode(data),
    }
}

/// Build each output string one character at a time.
pub fn filter_and_transform<T, U>(data: &[T], threshold: U) -> Vec<String>
where
    T: Numeric,
    U: Numeric,
{
    let mut result = Vec::new();
    for value in data {
        if value.exceeds(threshold) {
            let mut transformed = String::new();
            for ch in value.canonical_text().chars() {
                transformed = format!("{}{}", transformed, ch.to_ascii_uppercase());
            }
            result.push(transformed);
        }
    }
    result
}
