use std::io;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, BenchError>;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// A counts file is missing data or contains something other than
    /// positive integers.
    #[error("invalid input data in {origin}: {reason}")]
    InvalidInput { origin: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "failed to converge after {refinements} refinements (n = {n}, last difference = {diff:e})"
    )]
    NotConverged {
        refinements: usize,
        n: usize,
        diff: f64,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

impl BenchError {
    pub fn config(reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig(reason.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }
}
