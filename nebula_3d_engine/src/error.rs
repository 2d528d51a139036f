//! Error types for the Nebula3D engine
//!
//! Construction-time contract violations are the only failures signaled to
//! the caller; numerical degeneracy is handled locally by the math kernel
//! and never surfaces as an error.

use std::fmt;

/// Result type for Nebula3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Constructor parameter out of contract (fov, near/far, field size, ...)
    InvalidParameter(String),

    /// A shared lock was poisoned by a panicking thread
    LockPoisoned(String),

    /// An output boundary (display sink, image encoder) failed
    OutputFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
            Error::OutputFailed(msg) => write!(f, "Output failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
