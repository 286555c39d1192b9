//! Error types shared by the collectors, loaders and exporters.

use std::path::PathBuf;
use thiserror::Error;

/// A single typed-in value failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("'{input}' is not a valid number")]
    NotANumber { input: String },

    #[error("value cannot be negative (got {value})")]
    Negative { value: f64 },

    #[error("value must be greater than zero (got {value})")]
    NotPositive { value: f64 },

    #[error("'{input}' is not one of the listed choices")]
    UnknownChoice { input: String },
}

/// Errors from the interactive prompt layer.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input closed")]
    Eof,

    #[error("gave up after {attempts} invalid attempts: {last}")]
    TooManyAttempts { attempts: usize, last: InputError },

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading a `name,value` source file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Errors from writing an exported report.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write table to {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// A session could not be built from the collected records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("no data to analyze")]
    NoData,

    #[error("daily limit must be a positive number (got {limit})")]
    InvalidLimit { limit: f64 },
}
