use std::path::PathBuf;

/// Error type for list generation.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("Failed to fetch list: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Fetching '{url}' returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Failed to start tokio runtime: {0}")]
    Runtime(std::io::Error),
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type GenResult<T> = Result<T, GenError>;
