//! MOS 6502 instruction decoder.
//!
//! Every documented opcode has a fixed length determined by its addressing
//! mode, so decoding is a single table lookup followed by the operand fetch.

mod decoder;
mod opcodes;

pub use decoder::Mos6502Disassembler;
pub use opcodes::{AddressingMode, OPCODE_TABLE};
