use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    /// A registered source has no record cache yet; run a refresh first.
    #[error("no cached records for {source_url} at {}", path.display())]
    MissingCache { source_url: String, path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed cache file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("could not parse bibliography: {0}")]
    Parse(String),
    #[error("thresholds must be increasing and within [0, 1], got {0:?}")]
    InvalidThresholds([f64; 3]),
}

pub type Result<T> = std::result::Result<T, CheckError>;
