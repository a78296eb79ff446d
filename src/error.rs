// Error types for ego-ranking.
// Covers catalog API failures, cache IO, and invalid filter patterns.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, RankingError>;
