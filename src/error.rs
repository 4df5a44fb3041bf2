use thiserror::Error;

/// The unified error type for boarding sequence generation.
///
/// Every variant is fatal to the batch: a single bad record invalidates the
/// whole run, so there is no partial output and nothing to retry.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid seat format: {0}")]
    InvalidSeatFormat(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
