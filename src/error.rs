//! Error types for corpus-pagerank

use algograph::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),

    #[error("page {0:?} is not in the corpus")]
    UnknownPage(VertexId),

    #[error("damping factor must lie in [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("convergence threshold must be positive, got {0}")]
    InvalidThreshold(f64),

    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    #[error("invalid start distribution: {0}")]
    InvalidStart(String),

    #[error("no convergence after {iterations} iterations (last delta {delta})")]
    Convergence { iterations: usize, delta: f64 },

    #[error("sampling error: {0}")]
    Sampling(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),
}
