//! Error types for docblock rewriting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a rewrite run.
///
/// Matching failures happen during transformation; `Read`/`Write` happen
/// before and after it, so they are kept as distinct variants.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Docblock for {name} not found.")]
    MatchNotFound { name: String },

    #[error("Docblock for {name} is ambiguous: {count} candidates found")]
    AmbiguousMatch { name: String, count: usize },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid docblock pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;
