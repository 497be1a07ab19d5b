//! Sequential byte reader with address tracking.

use std::io::{self, Read};

use dasm_core::{Instruction, RawByteTrace};

use crate::error::DecodeError;
use crate::traits::DecodedInstruction;

/// Reads the bytes of one instruction from a stream.
///
/// Every successful read advances the logical address by one and appends
/// the byte to the instruction's raw trace. A source is created per decode
/// call and consumed by [`ByteSource::finish`].
///
/// Alongside the bounded trace it keeps the current byte sequence: every
/// byte since the last [`ByteSource::restart_sequence`], unbounded. This
/// is what an undefined opcode lists as data.
pub struct ByteSource<'a> {
    input: &'a mut dyn Read,
    start: u16,
    address: u16,
    trace: RawByteTrace,
    sequence: Vec<u8>,
}

impl<'a> ByteSource<'a> {
    /// Creates a source reading from `input`, starting at `address`.
    pub fn new(input: &'a mut dyn Read, address: u16) -> Self {
        Self {
            input,
            start: address,
            address,
            trace: RawByteTrace::new(),
            sequence: Vec::with_capacity(4),
        }
    }

    /// Reads the next byte.
    pub fn next_byte(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0u8; 1];
        match self.input.read_exact(&mut buf) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(self.end_of_input());
            }
            Err(source) => {
                return Err(DecodeError::Io {
                    address: self.address,
                    source,
                });
            }
        }

        self.address = self.address.wrapping_add(1);
        self.trace.push(buf[0]);
        self.sequence.push(buf[0]);
        Ok(buf[0])
    }

    /// Reads the next byte as a signed 8-bit value.
    pub fn next_relative(&mut self) -> Result<i8, DecodeError> {
        Ok(self.next_byte()? as i8)
    }

    /// Reads a signed displacement and resolves it against the address
    /// following the displacement byte.
    pub fn next_relative_address(&mut self) -> Result<u16, DecodeError> {
        let offset = self.next_relative()?;
        Ok(self.address.wrapping_add_signed(i16::from(offset)))
    }

    /// Reads a 16-bit word stored low byte first.
    pub fn next_word_lsb_first(&mut self) -> Result<u16, DecodeError> {
        let lo = self.next_byte()?;
        let hi = self.next_byte()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Reads a 16-bit word stored high byte first.
    pub fn next_word_msb_first(&mut self) -> Result<u16, DecodeError> {
        let hi = self.next_byte()?;
        let lo = self.next_byte()?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    /// Address of the first byte of the instruction.
    pub fn start_address(&self) -> u16 {
        self.start
    }

    /// Address of the next byte to be read.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Number of bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.trace.consumed()
    }

    /// Bytes consumed so far.
    pub fn trace(&self) -> &RawByteTrace {
        &self.trace
    }

    /// Bytes read since the sequence last restarted.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Starts a new sequence at the last byte read.
    ///
    /// Earlier bytes still count towards the size and the trace.
    pub fn restart_sequence(&mut self) {
        let start = self.sequence.len().saturating_sub(1);
        self.sequence.drain(..start);
    }

    /// Completes the instruction.
    pub fn finish(self, mnemonic: impl Into<String>, operands: impl Into<String>) -> DecodedInstruction {
        let instruction = Instruction::new(self.start, self.trace, mnemonic).with_operands(operands);
        DecodedInstruction {
            instruction,
            next_address: self.address,
        }
    }

    fn end_of_input(&self) -> DecodeError {
        if self.trace.is_empty() {
            DecodeError::end_of_input(self.start)
        } else {
            DecodeError::truncated(self.start, self.address, self.trace.as_slice())
        }
    }
}
