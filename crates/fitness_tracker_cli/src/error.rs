//! Error types for the command-line front-end.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("tracker error: {0}")]
    Tracker(#[from] fitness_tracker::TrackerError),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid sensor packages: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{failed} of {total} packages failed")]
    PackagesFailed { failed: usize, total: usize },
}

pub type CliResult<T> = Result<T, CliError>;
