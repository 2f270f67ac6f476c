//! Error handling and error types for Pure Rust AdaBoost.
//!
//! This module provides error handling using Rust's Result type system,
//! ensuring clear error propagation from configuration checks, label
//! normalization, boosting, classification and model persistence.

use std::io;
use thiserror::Error;

/// Main error type for the AdaBoost library.
///
/// Degenerate termination of the boosting loop is deliberately absent: a weak
/// learner that stops improving ends training normally and is reported
/// through [`TerminationReason`](crate::core::types::TerminationReason).
#[derive(Error, Debug)]
pub enum AdaBoostError {
    /// Contradictory, missing or invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid input data (empty labels, count mismatches, bad class indices)
    #[error("Data error: {message}")]
    Data { message: String },

    /// Stored model dimensionality does not match the supplied data
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Corrupt or unrecognized persisted model
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Operation invoked on a model in the wrong lifecycle state
    #[error("State error: {message}")]
    State { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Weak learner failed to train
    #[error("Training error: {message}")]
    Training { message: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        #[from]
        source: io::Error,
    },

    /// CSV parsing errors
    #[cfg(feature = "csv")]
    #[error("CSV parsing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Bincode serialization errors
    #[error("Bincode error: {source}")]
    Bincode {
        #[from]
        source: bincode::Error,
    },

    /// Internal library errors (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results using AdaBoostError
pub type Result<T> = std::result::Result<T, AdaBoostError>;

impl AdaBoostError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        AdaBoostError::Config {
            message: message.into(),
        }
    }

    /// Create a data error
    pub fn data<S: Into<String>>(message: S) -> Self {
        AdaBoostError::Data {
            message: message.into(),
        }
    }

    /// Create a persistence error
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        AdaBoostError::Persistence {
            message: message.into(),
        }
    }

    /// Create a state error
    pub fn state<S: Into<String>>(message: S) -> Self {
        AdaBoostError::State {
            message: message.into(),
        }
    }

    /// Create a training error
    pub fn training<S: Into<String>>(message: S) -> Self {
        AdaBoostError::Training {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        AdaBoostError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        AdaBoostError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an internal error (should be used sparingly)
    pub fn internal<S: Into<String>>(message: S) -> Self {
        AdaBoostError::Internal {
            message: message.into(),
        }
    }

    /// Whether this error belongs to the configuration family
    /// (checked before any computation starts).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AdaBoostError::Config { .. } | AdaBoostError::InvalidParameter { .. }
        )
    }

    /// Whether this error belongs to the data family.
    pub fn is_data(&self) -> bool {
        matches!(
            self,
            AdaBoostError::Data { .. } | AdaBoostError::DimensionMismatch { .. }
        )
    }

    /// Whether this error belongs to the persistence family.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            AdaBoostError::Persistence { .. }
                | AdaBoostError::Json { .. }
                | AdaBoostError::Bincode { .. }
        )
    }

    /// Check if this error is recoverable.
    ///
    /// Training is deterministic for a fixed random source, so nothing is
    /// worth retrying except failed I/O.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AdaBoostError::IO { .. })
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AdaBoostError::Config { .. } => "config",
            AdaBoostError::Data { .. } => "data",
            AdaBoostError::DimensionMismatch { .. } => "dimension_mismatch",
            AdaBoostError::Persistence { .. } => "persistence",
            AdaBoostError::State { .. } => "state",
            AdaBoostError::InvalidParameter { .. } => "invalid_parameter",
            AdaBoostError::Training { .. } => "training",
            AdaBoostError::IO { .. } => "io",
            #[cfg(feature = "csv")]
            AdaBoostError::Csv { .. } => "csv",
            AdaBoostError::Json { .. } => "json",
            AdaBoostError::Bincode { .. } => "bincode",
            AdaBoostError::Internal { .. } => "internal",
        }
    }
}

impl From<toml::de::Error> for AdaBoostError {
    fn from(err: toml::de::Error) -> Self {
        AdaBoostError::config(format!("Failed to parse TOML config: {}", err))
    }
}

impl From<toml::ser::Error> for AdaBoostError {
    fn from(err: toml::ser::Error) -> Self {
        AdaBoostError::config(format!("Failed to serialize TOML config: {}", err))
    }
}

/// Convenience macros for error creation
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::AdaBoostError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::AdaBoostError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! data_error {
    ($msg:expr) => {
        $crate::core::error::AdaBoostError::data($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::AdaBoostError::data(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
