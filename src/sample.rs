use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::Result;

pub const HEADER: [&str; 4] = ["id", "value", "category", "score"];
pub const CATEGORIES: [&str; 5] = ["A", "B", "C", "D", "E"];
pub const DEFAULT_ROWS: usize = 1000;
pub const DEFAULT_PATH: &str = "data/sample_data.csv";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    pub id: usize,
    pub value: usize,
    pub category: &'static str,
    pub score: u8,
}

impl SampleRow {
    /// Random row. `value` falls in `1..=rows / 2` so repeats are common.
    pub fn random<R: Rng>(id: usize, rows: usize, rng: &mut R) -> Self {
        let max_value = (rows / 2).max(1);
        SampleRow {
            id,
            value: rng.random_range(1..=max_value),
            category: CATEGORIES[rng.random_range(0..CATEGORIES.len())],
            score: rng.random_range(0..=100),
        }
    }
}

/// Write a header and `rows` random rows as CSV.
pub fn generate_sample_data<W, R>(writer: W, rows: usize, rng: &mut R) -> Result<()>
where
    W: Write,
    R: Rng,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(&HEADER)?;

    for id in 1..=rows {
        writer.serialize(SampleRow::random(id, rows, rng))?;
    }
    writer.flush()?;
    Ok(())
}

/// Generate a sample file at `path`, creating its parent directory. A seed
/// makes the output reproducible.
pub fn write_sample_file<P: AsRef<Path>>(path: P, rows: usize, seed: Option<u64>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let file = File::create(path)?;
    generate_sample_data(file, rows, &mut rng)?;

    log::info!("Generated {} with {} rows", path.display(), rows);
    Ok(())
}
