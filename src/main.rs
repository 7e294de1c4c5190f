use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use perf_detective::profile::{self, ProfileConfig, Target};
use perf_detective::sample;

/// Profile the data-processing functions and generate sample data
#[derive(Parser)]
#[command(name = "perf-detective")]
struct Cli {
    /// Raise log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time each function across growing input sizes
    Profile {
        /// Input sizes to measure
        #[arg(short, long, value_delimiter = ',', default_values_t = profile::DEFAULT_SIZES.to_vec())]
        sizes: Vec<usize>,

        /// Runs per measurement; the fastest is reported
        #[arg(short, long, default_value = "1")]
        repetitions: usize,

        /// Also time the quadratic reference implementations
        #[arg(long)]
        naive: bool,

        /// Restrict profiling to these functions
        #[arg(short, long, value_enum, value_delimiter = ',')]
        target: Vec<TargetArg>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a CSV of synthetic rows (id,value,category,score)
    Generate {
        /// Output file
        #[arg(short, long, default_value = sample::DEFAULT_PATH)]
        output: PathBuf,

        /// Number of data rows
        #[arg(short, long, default_value_t = sample::DEFAULT_ROWS)]
        rows: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    Duplicates,
    Statistics,
    Filter,
    Process,
}

impl From<TargetArg> for Target {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Duplicates => Target::FindDuplicates,
            TargetArg::Statistics => Target::CalculateStatistics,
            TargetArg::Filter => Target::FilterAndTransform,
            TargetArg::Process => Target::ProcessLargeDataset,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Profile {
            sizes,
            repetitions,
            naive,
            target,
            json,
        } => {
            let targets = if target.is_empty() {
                Target::ALL.to_vec()
            } else {
                target.into_iter().map(Target::from).collect()
            };
            let config = ProfileConfig::builder()
                .sizes(sizes)
                .repetitions(repetitions)
                .include_naive(naive)
                .targets(targets)
                .build();

            let report = profile::run(&config).context("Profiling failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
        Commands::Generate { output, rows, seed } => {
            sample::write_sample_file(&output, rows, seed)
                .with_context(|| format!("Unable to generate {}", output.display()))?;
        }
    }
    Ok(())
}
