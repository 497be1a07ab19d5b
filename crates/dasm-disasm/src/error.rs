//! Disassembly error types.

use std::io;

use thiserror::Error;

/// Error type for instruction decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The stream ended before the first byte of an instruction.
    #[error("end of input at {address:#06x}")]
    EndOfInput { address: u16 },

    /// The stream ended part way through an instruction.
    ///
    /// The consumed bytes still count: `next_address` is where decoding
    /// would resume.
    #[error("truncated instruction at {address:#06x}: input ended at {next_address:#06x}")]
    Truncated {
        address: u16,
        next_address: u16,
        bytes: Vec<u8>,
    },

    /// No decoder is registered under the requested name.
    #[error("unknown architecture: {0}")]
    UnknownArchitecture(String),

    /// The underlying reader failed.
    #[error("read failed at {address:#06x}: {source}")]
    Io {
        address: u16,
        #[source]
        source: io::Error,
    },
}

impl DecodeError {
    /// Creates a new EndOfInput error.
    pub fn end_of_input(address: u16) -> Self {
        Self::EndOfInput { address }
    }

    /// Creates a new Truncated error.
    pub fn truncated(address: u16, next_address: u16, bytes: &[u8]) -> Self {
        Self::Truncated {
            address,
            next_address,
            bytes: bytes.to_vec(),
        }
    }

    /// Creates a new UnknownArchitecture error.
    pub fn unknown_architecture(name: impl Into<String>) -> Self {
        Self::UnknownArchitecture(name.into())
    }
}

impl From<dasm_core::Error> for DecodeError {
    fn from(err: dasm_core::Error) -> Self {
        match err {
            dasm_core::Error::UnknownArchitecture(name) => Self::UnknownArchitecture(name),
        }
    }
}
