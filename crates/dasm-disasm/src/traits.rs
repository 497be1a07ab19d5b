//! Disassembler traits.

use std::io::Read;

use crate::DecodeError;
use dasm_core::{Architecture, Instruction};

/// Result of decoding an instruction.
#[derive(Debug, Clone)]
pub struct DecodedInstruction {
    /// The decoded instruction.
    pub instruction: Instruction,
    /// Address following the instruction.
    pub next_address: u16,
}

impl DecodedInstruction {
    /// Number of bytes consumed.
    pub fn size(&self) -> usize {
        self.instruction.size
    }
}

/// Trait for architecture-specific instruction decoders.
pub trait Disassembler {
    /// Decode a single instruction from a stream.
    ///
    /// # Arguments
    /// * `input` - The stream, positioned at the first byte of the instruction
    /// * `address` - The logical address of that byte
    ///
    /// # Returns
    /// The decoded instruction and the address following it. When the
    /// stream ends part way through, the error carries the address after the
    /// consumed bytes.
    fn decode_instruction(&self, input: &mut dyn Read, address: u16) -> Result<DecodedInstruction, DecodeError>;

    /// Returns the minimum instruction size for this architecture.
    fn min_instruction_size(&self) -> usize;

    /// Returns the maximum instruction size for this architecture, not
    /// counting redundant prefix bytes.
    fn max_instruction_size(&self) -> usize;

    /// Returns true if every instruction has the same size.
    fn is_fixed_width(&self) -> bool {
        self.min_instruction_size() == self.max_instruction_size()
    }

    /// Returns the target architecture.
    fn architecture(&self) -> Architecture;

    /// Decode a single instruction from the start of a byte slice.
    fn decode_bytes(&self, bytes: &[u8], address: u16) -> Result<DecodedInstruction, DecodeError> {
        let mut input = bytes;
        self.decode_instruction(&mut input, address)
    }

    /// Disassemble a block of code into instructions.
    ///
    /// Stops at the end of the block; a trailing partial instruction is
    /// dropped.
    fn disassemble_block(&self, bytes: &[u8], start_address: u16) -> Vec<Instruction> {
        let mut instructions = Vec::new();
        let mut input = bytes;
        let mut address = start_address;

        while let Ok(decoded) = self.decode_instruction(&mut input, address) {
            address = decoded.next_address;
            instructions.push(decoded.instruction);
        }

        instructions
    }
}
