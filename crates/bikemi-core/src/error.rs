// crates/bikemi-core/src/error.rs

use thiserror::Error;

/// Which of the two inputs a reconciliation problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The open-data feed (identity + coordinates).
    Basic,
    /// The scraped live availability.
    Extra,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Basic => f.write_str("basic info"),
            Side::Extra => f.write_str("extra info"),
        }
    }
}

/// The two station collections cannot be paired 1:1 by `station_id`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconciliationError {
    #[error("station count mismatch: {basic} basic records vs {extra} extra records")]
    LengthMismatch { basic: usize, extra: usize },

    #[error("station id mismatch at sorted position {index}: basic `{basic_id}` vs extra `{extra_id}`")]
    IdMismatch {
        index: usize,
        basic_id: String,
        extra_id: String,
    },

    #[error("station id `{station_id}` appears more than once in {side}")]
    DuplicateId { side: Side, station_id: String },
}

#[derive(Debug, Error)]
pub enum StationError {
    #[error(transparent)]
    Reconciliation(#[from] ReconciliationError),

    #[error("field `{key}` is not present on every station")]
    FieldNotFound { key: String },

    #[error("no stations to search")]
    EmptyInput,

    #[error("could not extract station data from page: {0}")]
    Scrape(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, StationError>;
