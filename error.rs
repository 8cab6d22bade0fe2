use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by any stage of the petition word pipeline.
#[derive(Debug, Error)]
pub enum PetitionError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to parse JSON input {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no record in {path} carries the field '{field}'")]
    MissingField { path: PathBuf, field: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("invalid parameter {name}: {details}")]
    InvalidParameter { name: &'static str, details: String },
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, PetitionError>;
