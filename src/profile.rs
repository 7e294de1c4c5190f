use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use typed_builder::TypedBuilder;

use crate::error::{ProcessError, Result};
use crate::naive;
use crate::processor::{process_large_dataset, Operation};
use crate::{calculate_statistics, filter_and_transform, find_duplicates};

pub const DEFAULT_SIZES: [usize; 6] = [100, 500, 1000, 2000, 5000, 10000];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    FindDuplicates,
    CalculateStatistics,
    FilterAndTransform,
    ProcessLargeDataset,
}

impl Target {
    pub const ALL: [Target; 4] = [
        Target::FindDuplicates,
        Target::CalculateStatistics,
        Target::FilterAndTransform,
        Target::ProcessLargeDataset,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Target::FindDuplicates => "find_duplicates",
            Target::CalculateStatistics => "calculate_statistics",
            Target::FilterAndTransform => "filter_and_transform",
            Target::ProcessLargeDataset => "process_large_dataset",
        }
    }

    fn has_naive(self) -> bool {
        self != Target::ProcessLargeDataset
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Linear,
    Naive,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Linear => f.write_str("linear"),
            Variant::Naive => f.write_str("naive"),
        }
    }
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct ProfileConfig {
    #[builder(default = DEFAULT_SIZES.to_vec())]
    pub sizes: Vec<usize>,
    /// Runs per measurement. The fastest run is reported.
    #[builder(default = 1)]
    pub repetitions: usize,
    #[builder(default)]
    pub include_naive: bool,
    #[builder(default = Target::ALL.to_vec())]
    pub targets: Vec<Target>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig::builder().build()
    }
}

impl ProfileConfig {
    fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(ProcessError::InvalidSize(0));
        }
        match self.sizes.iter().find(|&&size| size < 2) {
            Some(&size) => Err(ProcessError::InvalidSize(size)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub target: Target,
    pub variant: Variant,
    pub size: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    /// Pairwise comparisons the naive duplicate search performs at this size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<u64>,
}

impl Measurement {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    pub fn nanos_per_comparison(&self) -> Option<f64> {
        match self.comparisons {
            Some(comparisons) if comparisons > 0 => {
                Some(self.elapsed.as_nanos() as f64 / comparisons as f64)
            }
            _ => None,
        }
    }
}

fn serialize_millis<S>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64() * 1_000.0)
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileReport {
    pub measurements: Vec<Measurement>,
}

impl ProfileReport {
    pub fn for_target(&self, target: Target) -> impl Iterator<Item = &Measurement> {
        self.measurements
            .iter()
            .filter(move |measurement| measurement.target == target)
    }
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(72);
        let mut targets: Vec<Target> = Vec::new();
        for measurement in &self.measurements {
            if !targets.contains(&measurement.target) {
                targets.push(measurement.target);
            }
        }

        for target in targets {
            writeln!(f, "{}", "=".repeat(72))?;
            writeln!(f, "PROFILING {}()", target)?;
            writeln!(f, "{}", "=".repeat(72))?;
            writeln!(
                f,
                "{:<10} {:<8} {:<15} {:<20} {}",
                "Size", "Variant", "Time (ms)", "Comparisons", "Time/Comp (ns)"
            )?;
            writeln!(f, "{}", rule)?;
            for measurement in self.for_target(target) {
                let comparisons = measurement
                    .comparisons
                    .map(|count| count.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let per_comparison = measurement
                    .nanos_per_comparison()
                    .map(|nanos| format!("{:.3}", nanos))
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    f,
                    "{:<10} {:<8} {:<15.3} {:<20} {}",
                    measurement.size,
                    measurement.variant,
                    measurement.elapsed_ms(),
                    comparisons,
                    per_comparison
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Number of pairwise comparisons an all-pairs duplicate search makes over
/// `size` items.
pub fn naive_comparisons(size: usize) -> u64 {
    let size = size as u64;
    size * size.saturating_sub(1) / 2
}

/// Profiling input: `0..size / 2` repeated twice, so half the items repeat.
pub fn dataset(size: usize) -> Vec<u64> {
    let half = (size / 2) as u64;
    (0..half).chain(0..half).collect()
}

fn time<R>(repetitions: usize, mut run: impl FnMut() -> R) -> (Duration, R) {
    let start = Instant::now();
    let mut output = black_box(run());
    let mut best = start.elapsed();
    for _ in 1..repetitions {
        let start = Instant::now();
        output = black_box(run());
        best = best.min(start.elapsed());
    }
    (best, output)
}

fn measure(target: Target, variant: Variant, data: &[u64], repetitions: usize) -> Result<Duration> {
    let threshold = (data.len() / 4) as u64;
    let elapsed = match (target, variant) {
        (Target::FindDuplicates, Variant::Linear) => time(repetitions, || find_duplicates(data)).0,
        (Target::FindDuplicates, Variant::Naive) => {
            time(repetitions, || naive::find_duplicates(data)).0
        }
        (Target::CalculateStatistics, Variant::Linear) => {
            time(repetitions, || calculate_statistics(data)).0
        }
        (Target::CalculateStatistics, Variant::Naive) => {
            time(repetitions, || naive::calculate_statistics(data)).0
        }
        (Target::FilterAndTransform, Variant::Linear) => {
            time(repetitions, || filter_and_transform(data, threshold)).0
        }
        (Target::FilterAndTransform, Variant::Naive) => {
            time(repetitions, || naive::filter_and_transform(data, threshold)).0
        }
        (Target::ProcessLargeDataset, _) => {
            let operations = Operation::ALL.iter().map(|operation| operation.name());
            let (elapsed, report) = time(repetitions, || {
                process_large_dataset(data, operations.clone())
            });
            report?;
            elapsed
        }
    };
    Ok(elapsed)
}

/// Time every configured target at every configured size.
pub fn run(config: &ProfileConfig) -> Result<ProfileReport> {
    config.validate()?;
    let mut report = ProfileReport::default();

    for &target in &config.targets {
        let mut variants = vec![Variant::Linear];
        if config.include_naive && target.has_naive() {
            variants.push(Variant::Naive);
        }

        for &size in &config.sizes {
            let data = dataset(size);
            for &variant in &variants {
                let elapsed = measure(target, variant, &data, config.repetitions)?;
                let comparisons = match target {
                    Target::FindDuplicates => Some(naive_comparisons(size)),
                    _ => None,
                };
                log::info!(
                    "{} ({}) size={} elapsed={:?}",
                    target,
                    variant,
                    size,
                    elapsed
                );
                report.measurements.push(Measurement {
                    target,
                    variant,
                    size,
                    elapsed,
                    comparisons,
                });
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_comparisons() {
        assert_eq!(naive_comparisons(0), 0);
        assert_eq!(naive_comparisons(1), 0);
        assert_eq!(naive_comparisons(100), 4_950);
        assert_eq!(naive_comparisons(10_000), 49_995_000);
    }

    #[test]
    fn test_dataset_is_half_duplicates() {
        let data = dataset(10);

        assert_eq!(data, vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
        assert_eq!(find_duplicates(&data).len(), 5);
    }

    #[test]
    fn test_default_config() {
        let config = ProfileConfig::default();

        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(config.repetitions, 1);
        assert!(!config.include_naive);
        assert_eq!(config.targets.len(), 4);
    }

    #[test]
    fn test_run_small_sizes() {
        let config = ProfileConfig::builder()
            .sizes(vec![10, 20])
            .include_naive(true)
            .build();
        let report = run(&config).unwrap();

        // Three targets with both variants, one linear only, at two sizes.
        assert_eq!(report.measurements.len(), (3 * 2 + 1) * 2);
        let duplicates: Vec<&Measurement> = report.for_target(Target::FindDuplicates).collect();
        assert!(duplicates.iter().all(|m| m.comparisons.is_some()));
        assert_eq!(duplicates[0].comparisons, Some(45));
        assert!(report
            .for_target(Target::CalculateStatistics)
            .all(|m| m.comparisons.is_none()));
    }

    #[test]
    fn test_comparisons_use_configured_size() {
        let config = ProfileConfig::builder()
            .sizes(vec![5, 101])
            .targets(vec![Target::FindDuplicates])
            .build();
        let report = run(&config).unwrap();
        let comparisons: Vec<Option<u64>> = report
            .for_target(Target::FindDuplicates)
            .map(|m| m.comparisons)
            .collect();

        // Datasets hold 4 and 100 items, counts follow the requested size.
        assert_eq!(comparisons, vec![Some(10), Some(5_050)]);
    }

    #[test]
    fn test_run_rejects_bad_sizes() {
        let empty = ProfileConfig::builder().sizes(Vec::new()).build();
        assert!(matches!(run(&empty), Err(ProcessError::InvalidSize(0))));

        let tiny = ProfileConfig::builder().sizes(vec![100, 1]).build();
        assert!(matches!(run(&tiny), Err(ProcessError::InvalidSize(1))));
    }

    #[test]
    fn test_report_table_and_json() {
        let config = ProfileConfig::builder()
            .sizes(vec![4])
            .targets(vec![Target::FindDuplicates])
            .build();
        let report = run(&config).unwrap();

        let table = report.to_string();
        assert!(table.contains("PROFILING find_duplicates()"));
        assert!(table.contains("Time/Comp (ns)"));

        let json = serde_json::to_value(&report).unwrap();
        let first = &json["measurements"][0];
        assert_eq!(first["target"], "find_duplicates");
        assert_eq!(first["variant"], "linear");
        assert_eq!(first["size"], 4);
        assert_eq!(first["comparisons"], 6);
        assert!(first["elapsed_ms"].is_f64());
    }
}
