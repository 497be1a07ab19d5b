//! Raw bytes consumed while decoding one instruction.

use std::fmt;

/// Maximum number of bytes a trace keeps.
pub const TRACE_CAPACITY: usize = 32;

/// The bytes consumed for a single instruction, in stream order.
///
/// Only the first [`TRACE_CAPACITY`] bytes are stored; later bytes are still
/// counted so that the instruction size stays exact even for long runs of
/// redundant prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawByteTrace {
    bytes: Vec<u8>,
    consumed: usize,
}

impl RawByteTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one consumed byte.
    pub fn push(&mut self, byte: u8) {
        if self.bytes.len() < TRACE_CAPACITY {
            self.bytes.push(byte);
        }
        self.consumed += 1;
    }

    /// The stored bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Total number of bytes consumed, stored or not.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns true if nothing has been consumed.
    pub fn is_empty(&self) -> bool {
        self.consumed == 0
    }

    /// Returns true if bytes were dropped because the trace was full.
    pub fn is_clipped(&self) -> bool {
        self.consumed > self.bytes.len()
    }
}

impl fmt::Display for RawByteTrace {
    /// Space-separated lowercase hex pairs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl From<&[u8]> for RawByteTrace {
    fn from(bytes: &[u8]) -> Self {
        let mut trace = Self::new();
        for &byte in bytes {
            trace.push(byte);
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let trace = RawByteTrace::from(&[0xdd, 0x21, 0x34, 0x12][..]);
        assert_eq!(trace.to_string(), "dd 21 34 12");
        assert_eq!(RawByteTrace::new().to_string(), "");
    }

    #[test]
    fn test_capacity_is_bounded() {
        let mut trace = RawByteTrace::new();
        for _ in 0..100 {
            trace.push(0xdd);
        }
        assert_eq!(trace.consumed(), 100);
        assert_eq!(trace.as_slice().len(), TRACE_CAPACITY);
        assert!(trace.is_clipped());
    }
}
