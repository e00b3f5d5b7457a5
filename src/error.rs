//! Error types.
//!
//! Shaping itself has no failure modes: every character either matches a
//! table entry or passes through unchanged. The fallible surface is the
//! front end reading input text.

use std::fmt;
use std::io;

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the front-end layers.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading input text.
    Io(io::Error),
    /// Invalid command-line usage.
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Usage(s) => write!(f, "usage error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Usage(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
