//! Error types for the gpucaps library
//!
//! Classification itself never fails: unrecognized vendors and models
//! resolve to `Unknown` sentinels by design. The only fallible operation
//! is pulling a `major.minor` tuple out of a driver version string.

use thiserror::Error;

/// Main error type for gpucaps operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// No `major.minor` version tuple found in the driver version string
    #[error("no GL version tuple found in {0:?}")]
    MalformedVersion(String),
}

/// Result type for gpucaps operations
pub type ClassifyResult<T> = std::result::Result<T, ClassifyError>;
