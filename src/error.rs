use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Unable to compute a mean over zero elements. Division by zero is undefined.")]
    DivisionUndefined,
    #[error("Unable to profile with input size `{0}`. Sizes must be non-zero and at least one is required.")]
    InvalidSize(usize),
    #[error("Unable to write sample data. Reason: `{0}`.")]
    Io(#[from] std::io::Error),
    #[error("Unable to encode sample data as CSV. Reason: `{0}`.")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ProcessError>;
