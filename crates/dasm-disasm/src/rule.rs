//! Decode rules shared by every architecture.
//!
//! A [`DecodeRule`] ties an opcode to its mnemonic and to the kind of
//! operand that follows it in the stream. Table-driven decoders store one
//! rule per opcode; the Z80 decoder uses [`OperandKind::fetch`] directly for
//! the operands its bit-field dispatch selects.

use std::fmt::Write as _;

use crate::error::DecodeError;
use crate::source::ByteSource;
use crate::traits::DecodedInstruction;

/// Kind of operand that follows an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// No operand bytes.
    None,
    /// One unsigned byte, shown as `$xx`.
    Byte,
    /// Two bytes, low byte first, shown as `$xxxx`.
    Word,
    /// One signed displacement, resolved against the address after it and
    /// shown as `$xxxx`.
    Relative,
    /// No operand bytes; the current byte sequence is shown as data.
    Data,
}

impl OperandKind {
    /// Number of operand bytes read from the stream.
    pub const fn size(self) -> usize {
        match self {
            Self::None | Self::Data => 0,
            Self::Byte | Self::Relative => 1,
            Self::Word => 2,
        }
    }

    /// Reads the operand and formats it.
    pub fn fetch(self, source: &mut ByteSource<'_>) -> Result<String, DecodeError> {
        Ok(match self {
            Self::None => String::new(),
            Self::Byte => hex_byte(source.next_byte()?),
            Self::Word => hex_word(source.next_word_lsb_first()?),
            Self::Relative => hex_word(source.next_relative_address()?),
            Self::Data => data_bytes(source.sequence()),
        })
    }
}

/// Formats a byte as `$xx`.
pub fn hex_byte(value: u8) -> String {
    format!("${:02x}", value)
}

/// Formats a word as `$xxxx`.
pub fn hex_word(value: u16) -> String {
    format!("${:04x}", value)
}

/// Formats bytes as a comma-separated `$xx` list.
pub fn data_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "${:02x}", byte);
    }
    out
}

/// Mnemonic used for bytes that do not decode to an instruction.
pub const DATA_MNEMONIC: &str = "db";

/// Static association of an opcode with its mnemonic and operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeRule {
    /// Mnemonic
    pub mnemonic: &'static str,
    /// Operand fetched after the opcode
    pub operand: OperandKind,
    /// Text printed before the operand (e.g. `#`, `(`)
    pub prefix: &'static str,
    /// Text printed after the operand (e.g. `,x`, `),y`)
    pub suffix: &'static str,
}

impl DecodeRule {
    pub const fn new(
        mnemonic: &'static str,
        operand: OperandKind,
        prefix: &'static str,
        suffix: &'static str,
    ) -> Self {
        Self {
            mnemonic,
            operand,
            prefix,
            suffix,
        }
    }

    /// A rule with no operand.
    pub const fn implied(mnemonic: &'static str) -> Self {
        Self::new(mnemonic, OperandKind::None, "", "")
    }

    /// Placeholder rule for undefined opcodes.
    pub const fn undefined() -> Self {
        Self::new(DATA_MNEMONIC, OperandKind::Data, "", "")
    }

    /// Returns true if this is the undefined-opcode placeholder.
    pub fn is_undefined(&self) -> bool {
        self.operand == OperandKind::Data
    }

    /// Instruction length in bytes, opcode included.
    pub const fn length(&self) -> usize {
        1 + self.operand.size()
    }

    /// Fetches the operand and completes the instruction.
    ///
    /// The opcode must already have been read from `source`.
    pub fn decode(&self, mut source: ByteSource<'_>) -> Result<DecodedInstruction, DecodeError> {
        let operand = self.operand.fetch(&mut source)?;
        let operands = if operand.is_empty() && self.prefix.is_empty() && self.suffix.is_empty() {
            String::new()
        } else {
            format!("{}{}{}", self.prefix, operand, self.suffix)
        };
        Ok(source.finish(self.mnemonic, operands))
    }
}
