//! Unified error types for fuse diagnostics.
//!
//! Faults (a missing or broken fuse) are *not* errors: they are modelled
//! outcomes returned by the classifier. This module only covers the
//! conditions the diagnostic flow cannot turn into a blink code.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible library operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A status source could not be read for a reason other than absence.
    Source(SourceError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "status source: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Status source errors
// ---------------------------------------------------------------------------

/// Errors from [`StatusSource`](crate::app::ports::StatusSource) reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The record does not exist. Classified as a missing fuse.
    NotFound,
    /// Any other I/O failure (permissions, device errors).
    Io(std::io::ErrorKind),
}

impl SourceError {
    /// Map an `std::io::Error` onto the two cases the classifier distinguishes.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            kind => Self::Io(kind),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "record not found"),
            Self::Io(kind) => write!(f, "I/O error ({kind})"),
        }
    }
}

impl From<SourceError> for Error {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
