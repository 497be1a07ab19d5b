//! Error types for dasm-core.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No architecture is registered under this name.
    #[error("unknown architecture: {0}")]
    UnknownArchitecture(String),
}
