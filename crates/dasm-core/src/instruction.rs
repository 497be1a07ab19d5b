//! Architecture-agnostic instruction representation.

use std::fmt;

use crate::RawByteTrace;

/// A decoded instruction, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Logical address of the first byte.
    pub address: u16,
    /// Size in bytes, including every prefix, displacement and operand byte.
    pub size: usize,
    /// Raw bytes of the instruction.
    pub bytes: RawByteTrace,
    /// Mnemonic string (e.g., "ld", "jr", "lda").
    pub mnemonic: String,
    /// Operand text, already formatted (e.g., "a,(ix+5)"). Empty if none.
    pub operands: String,
}

impl Instruction {
    /// Creates a new instruction without operands.
    ///
    /// The size is taken from the trace.
    pub fn new(address: u16, bytes: RawByteTrace, mnemonic: impl Into<String>) -> Self {
        Self {
            address,
            size: bytes.consumed(),
            bytes,
            mnemonic: mnemonic.into(),
            operands: String::new(),
        }
    }

    /// Sets the operand text.
    pub fn with_operands(mut self, operands: impl Into<String>) -> Self {
        self.operands = operands.into();
        self
    }

    /// Returns the address following this instruction.
    pub fn end_address(&self) -> u16 {
        self.address.wrapping_add(self.size as u16)
    }

    /// Returns the mnemonic and operands as a single string.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operands.is_empty() {
            f.write_str(&self.mnemonic)
        } else {
            write!(f, "{} {}", self.mnemonic, self.operands)
        }
    }
}
