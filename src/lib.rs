pub mod duplicates;
pub mod error;
pub mod naive;
pub mod numeric;
pub mod processor;
pub mod profile;
pub mod sample;
pub mod statistics;
pub mod transform;

pub use duplicates::find_duplicates;
pub use error::{ProcessError, Result};
pub use numeric::Numeric;
pub use processor::{process_large_dataset, DatasetReport, Operation};
pub use statistics::{calculate_statistics, Statistics};
pub use transform::filter_and_transform;
