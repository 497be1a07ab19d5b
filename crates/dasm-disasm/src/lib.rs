//! # dasm-disasm
//!
//! Instruction decoders for dasm.
//!
//! This crate provides disassembly backends for:
//! - Zilog Z80, including the CB, ED, DD and FD prefixed tables
//! - MOS 6502, documented opcodes
//!
//! Decoders read from any [`std::io::Read`] one byte at a time, so the
//! stream never needs to be buffered in full. [`disassemble_stream`] drives
//! a decoder over a whole stream.

pub mod driver;
pub mod error;
pub mod rule;
pub mod source;
pub mod traits;

#[cfg(feature = "z80")]
pub mod z80;

#[cfg(feature = "mos6502")]
pub mod mos6502;

use dasm_core::Architecture;

pub use driver::{disassemble_stream, StreamSummary, TruncatedTail};
pub use error::DecodeError;
pub use rule::{DecodeRule, OperandKind};
pub use source::ByteSource;
pub use traits::{DecodedInstruction, Disassembler};

#[cfg(feature = "z80")]
pub use z80::Z80Disassembler;

#[cfg(feature = "mos6502")]
pub use mos6502::Mos6502Disassembler;

/// Returns the decoder for `arch`.
///
/// Fails with [`DecodeError::UnknownArchitecture`] if support for `arch`
/// was not compiled in.
pub fn disassembler_for(arch: Architecture) -> Result<Box<dyn Disassembler>, DecodeError> {
    match arch {
        #[cfg(feature = "z80")]
        Architecture::Z80 => Ok(Box::new(Z80Disassembler::new())),
        #[cfg(feature = "mos6502")]
        Architecture::Mos6502 => Ok(Box::new(Mos6502Disassembler::new())),
        #[allow(unreachable_patterns)]
        other => Err(DecodeError::unknown_architecture(other.name())),
    }
}

/// Returns the decoder registered under `name` ("z80", "6502").
pub fn disassembler_by_name(name: &str) -> Result<Box<dyn Disassembler>, DecodeError> {
    let arch: Architecture = name.parse()?;
    disassembler_for(arch)
}
