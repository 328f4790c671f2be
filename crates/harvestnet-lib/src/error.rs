use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the harvestnet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be found at the given path.
    #[error("input file not found at {path}")]
    InputNotFound { path: PathBuf },

    /// Raised when a CSV source lacks one or more required columns.
    #[error("{source_name} is missing required columns: {}", .missing.join(", "))]
    MissingColumns {
        source_name: String,
        missing: Vec<String>,
    },

    /// Raised when a row could not be parsed into a typed record.
    #[error("{source_name} line {line}: {message}")]
    InvalidRecord {
        source_name: String,
        line: u64,
        message: String,
    },

    /// Raised when a transport lane carries a weight the graph cannot use.
    #[error("invalid lane {origin} -> {destination}: {message}")]
    InvalidLane {
        origin: String,
        destination: String,
        message: String,
    },

    /// Raised when an inventory formula would divide by zero or take the
    /// square root of a negative quantity.
    #[error("inventory policy for warehouse {warehouse} is undefined: {reason}")]
    UndefinedPolicy { warehouse: String, reason: String },

    /// Raised when a ratio metric has a zero denominator.
    #[error("metric {metric} is undefined: {reason}")]
    UndefinedMetric {
        metric: &'static str,
        reason: &'static str,
    },

    /// Raised when clustering is requested over no facilities.
    #[error("cannot cluster an empty facility set")]
    EmptyFacilitySet,

    /// Raised when configuration values are out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Wrapper for JSON (de)serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
