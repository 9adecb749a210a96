//! Error types for the three pipeline stages
//!
//! Each stage fails fast with its own error kind and surfaces it to the
//! caller; no stage recovers from an upstream contract violation.

use std::fmt;
use std::path::PathBuf;

/// Identifies a product record in error messages, by id when the record
/// carries one and by ordinal position in the response array otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRef {
    pub id: Option<u64>,
    pub ordinal: usize,
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "id {}", id),
            None => write!(f, "position {}", self.ordinal),
        }
    }
}

/// Failure retrieving or decoding the product catalog
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Catalog response is not a JSON array of products: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A product record lacks a field the aggregation requires
#[derive(Debug, thiserror::Error)]
pub enum MalformedRecordError {
    #[error("Product record ({record}) has no category")]
    MissingCategory { record: RecordRef },

    #[error("Product record ({record}) has no rating.count")]
    MissingRatingCount { record: RecordRef },
}

/// The summary CSV cannot be persisted
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write summary file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize summary row: {0}")]
    Csv(#[from] csv::Error),
}
