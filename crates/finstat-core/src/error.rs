//! Error types for the finstat-core library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::document::Category;

/// Main error type for the finstat library.
#[derive(Error, Debug)]
pub enum FinstatError {
    /// The session gate refused the run.
    #[error("authorization error: {0}")]
    Auth(#[from] AuthError),

    /// Walking the document tree failed.
    #[error("traversal error: {0}")]
    Traversal(#[from] TraversalError),

    /// A destination directory could not be prepared before the run.
    #[error("failed to prepare {}: {source}", .path.display())]
    Prepare {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration value cannot be used.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the session gate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No session was supplied.
    #[error("session does not exist")]
    Missing,

    /// The session token is malformed or has expired.
    #[error("session is not valid")]
    Invalid,
}

/// Errors that abort the whole traversal.
#[derive(Error, Debug)]
pub enum TraversalError {
    /// The root directory cannot be resolved.
    #[error("cannot read root {}: {source}", .root.display())]
    Root {
        root: PathBuf,
        source: std::io::Error,
    },

    /// Enumeration failed part way through the tree.
    #[error("failed while walking {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },
}

/// A single document could not be moved.
#[derive(Error, Debug)]
#[error("failed to move {} into {}: {source}", .file.display(), .destination.display())]
pub struct MovementError {
    /// File that was being moved.
    pub file: PathBuf,
    /// Destination area.
    pub destination: PathBuf,
    /// Underlying filesystem error.
    pub source: std::io::Error,
}

/// Errors related to amount extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document has no non-empty line.
    #[error("no content line in {}", .0.display())]
    Empty(PathBuf),

    /// The final line holds no amount in the expected format.
    #[error("invalid number format for {category}: {line}")]
    Parse { category: Category, line: String },

    /// No extraction rule exists for the category.
    #[error("unknown file type for {}", .0.display())]
    UnknownCategory(PathBuf),
}

/// The report file could not be written.
#[derive(Error, Debug)]
#[error("error writing statistics file {}: {source}", .path.display())]
pub struct ReportError {
    /// Report destination.
    pub path: PathBuf,
    /// Underlying filesystem error.
    pub source: std::io::Error,
}

/// Result type for the finstat library.
pub type Result<T> = std::result::Result<T, FinstatError>;
