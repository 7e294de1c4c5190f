use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::duplicates::find_duplicates_by_key;
use crate::error::Result;
use crate::numeric::Numeric;
use crate::statistics::{calculate_statistics, mean, Statistics};
use crate::transform::filter_and_transform;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operation {
    Duplicates,
    Statistics,
    Filter,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Duplicates,
        Operation::Statistics,
        Operation::Filter,
    ];

    /// Parse a requested operation name. Unrecognized names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "duplicates" => Some(Operation::Duplicates),
            "statistics" => Some(Operation::Statistics),
            "filter" => Some(Operation::Filter),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Duplicates => "duplicates",
            Operation::Statistics => "statistics",
            Operation::Filter => "filter",
        }
    }

    /// Key the operation's result is stored under in a [DatasetReport].
    pub fn result_key(self) -> &'static str {
        match self {
            Operation::Duplicates => "duplicates",
            Operation::Statistics => "statistics",
            Operation::Filter => "filtered",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Results of [process_large_dataset]. Only requested operations are present,
/// always ordered duplicates, statistics, filtered.
///
/// `duplicates` holds each repeated value once, as first seen, in the order
/// the values became repeated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicates: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered: Option<Vec<String>>,
}

impl<T> Default for DatasetReport<T> {
    fn default() -> Self {
        DatasetReport {
            duplicates: None,
            statistics: None,
            filtered: None,
        }
    }
}

impl<T> DatasetReport<T> {
    pub fn keys(&self) -> Vec<&'static str> {
        let present = [
            (Operation::Duplicates, self.duplicates.is_some()),
            (Operation::Statistics, self.statistics.is_some()),
            (Operation::Filter, self.filtered.is_some()),
        ];
        present
            .iter()
            .filter(|(_, is_some)| *is_some)
            .map(|(operation, _)| operation.result_key())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}

/// Run the requested operations over `data`.
///
/// The `"filter"` operation uses the mean of `data` as its threshold and
/// therefore fails with [crate::ProcessError::DivisionUndefined] on empty data.
pub fn process_large_dataset<T, I, S>(data: &[T], operations: I) -> Result<DatasetReport<T>>
where
    T: Numeric,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let requested: HashSet<Operation> = operations
        .into_iter()
        .filter_map(|name| {
            let operation = Operation::from_name(name.as_ref());
            if operation.is_none() {
                log::debug!("Ignoring unknown operation `{}`", name.as_ref());
            }
            operation
        })
        .collect();

    let mut report = DatasetReport::default();

    if requested.contains(&Operation::Duplicates) {
        report.duplicates = Some(find_duplicates_by_key(data, |value| value.key()));
    }

    if requested.contains(&Operation::Statistics) {
        report.statistics = Some(calculate_statistics(data));
    }

    if requested.contains(&Operation::Filter) {
        let threshold = mean(data)?;
        report.filtered = Some(filter_and_transform(data, threshold));
    }

    log::debug!(
        "process_large_dataset: {} items, produced {:?}",
        data.len(),
        report.keys()
    );
    Ok(report)
}
