use std::collections::HashMap;

use serde::Serialize;

use crate::error::{ProcessError, Result};
use crate::numeric::Numeric;

/// Mean, median and mode of a numeric dataset. Every field is `None` for an
/// empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics<T> {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<T>,
}

impl<T> Default for Statistics<T> {
    fn default() -> Self {
        Statistics {
            mean: None,
            median: None,
            mode: None,
        }
    }
}

/// Arithmetic mean. Fails with [ProcessError::DivisionUndefined] on empty input.
pub fn mean<T: Numeric>(data: &[T]) -> Result<f64> {
    if data.is_empty() {
        return Err(ProcessError::DivisionUndefined);
    }
    let sum: f64 = data.iter().map(|value| value.to_f64()).sum();
    Ok(sum / data.len() as f64)
}

pub fn median<T: Numeric>(data: &[T]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sorted: Vec<f64> = data.iter().map(|value| value.to_f64()).collect();
    sorted.sort_unstable_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Most frequent value. Ties go to the value encountered first in `data`.
pub fn mode<T: Numeric>(data: &[T]) -> Option<T> {
    let mut occurrences: HashMap<T::Key, usize> = HashMap::with_capacity(data.len());

    for &value in data {
        *occurrences.entry(value.key()).or_insert(0) += 1;
    }

    let mut mode = None;
    let mut max_count = 0;
    for &value in data {
        let count = occurrences[&value.key()];
        if count > max_count {
            max_count = count;
            mode = Some(value);
        }
    }
    mode
}

pub fn calculate_statistics<T: Numeric>(data: &[T]) -> Statistics<T> {
    if data.is_empty() {
        log::debug!("calculate_statistics: empty input");
        return Statistics::default();
    }

    Statistics {
        mean: mean(data).ok(),
        median: median(data),
        mode: mode(data),
    }
}
