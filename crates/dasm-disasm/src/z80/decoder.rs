//! Z80 instruction decoder.

use std::io::Read;

use super::fields::BitFields;
use super::prefix::{IndexRegister, PrefixState, SubTable};
use super::tables::{self, RegisterVariant, MEMORY_SLOT};
use crate::error::DecodeError;
use crate::rule::{OperandKind, DATA_MNEMONIC};
use crate::source::ByteSource;
use crate::traits::{DecodedInstruction, Disassembler};
use dasm_core::Architecture;

/// Mnemonic and operand text of a decoded instruction.
pub(super) type Decoded = (&'static str, String);

/// Z80 instruction decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Z80Disassembler;

impl Z80Disassembler {
    /// Creates a new Z80 disassembler.
    pub fn new() -> Self {
        Self
    }
}

impl Disassembler for Z80Disassembler {
    fn decode_instruction(&self, input: &mut dyn Read, address: u16) -> Result<DecodedInstruction, DecodeError> {
        let mut source = ByteSource::new(input, address);
        let (prefixes, mut opcode) = PrefixState::parse(&mut source)?;

        // DD CB d op / FD CB d op
        let mut displacement = None;
        if prefixes.has_leading_displacement() {
            displacement = Some(opcode as i8);
            opcode = source.next_byte()?;
        }

        let fields = BitFields::parse(opcode);
        let mut cursor = Cursor {
            source,
            variant: prefixes.variant(),
            displacement,
        };

        let (mnemonic, operands) = match prefixes.table {
            None => cursor.main(fields)?,
            Some(SubTable::Bits) => cursor.bits(fields)?,
            Some(SubTable::Extended) => cursor.extended(fields)?,
        };

        Ok(cursor.source.finish(mnemonic, operands))
    }

    fn min_instruction_size(&self) -> usize {
        1
    }

    fn max_instruction_size(&self) -> usize {
        4
    }

    fn architecture(&self) -> Architecture {
        Architecture::Z80
    }
}

/// Decode state for one instruction after its prefixes are known.
pub(super) struct Cursor<'a> {
    pub(super) source: ByteSource<'a>,
    pub(super) variant: RegisterVariant,
    /// Index displacement, once read.
    pub(super) displacement: Option<i8>,
}

impl<'a> Cursor<'a> {
    /// Reads an operand of the given kind.
    pub(super) fn fetch(&mut self, kind: OperandKind) -> Result<String, DecodeError> {
        kind.fetch(&mut self.source)
    }

    /// 8-bit register operand for `slot`, in the current variant.
    ///
    /// Slot 6 under an index prefix is `(ix+d)`; its displacement is read
    /// the first time it is needed.
    pub(super) fn register(&mut self, slot: u8) -> Result<String, DecodeError> {
        match self.variant.index() {
            Some(index) if slot == MEMORY_SLOT => self.indexed(index),
            _ => Ok(tables::register(self.variant, slot).to_string()),
        }
    }

    /// `(ix+d)` or `(iy+d)`.
    pub(super) fn indexed(&mut self, index: IndexRegister) -> Result<String, DecodeError> {
        let displacement = match self.displacement {
            Some(d) => d,
            None => {
                let d = self.source.next_relative()?;
                self.displacement = Some(d);
                d
            }
        };
        Ok(format!("({}{:+})", index.name(), displacement))
    }

    /// Returns true if `slot` refers to `(ix+d)` / `(iy+d)`.
    fn is_indexed_memory(&self, slot: u8) -> bool {
        slot == MEMORY_SLOT && self.variant.index().is_some()
    }

    /// Placeholder for byte sequences with no instruction.
    pub(super) fn undefined(&mut self) -> Result<Decoded, DecodeError> {
        log::debug!(
            "undefined z80 opcode at {:#06x}: {}",
            self.source.start_address(),
            self.source.trace()
        );
        Ok((DATA_MNEMONIC, self.fetch(OperandKind::Data)?))
    }

    /// Unprefixed, DD and FD opcodes.
    pub(super) fn main(&mut self, f: BitFields) -> Result<Decoded, DecodeError> {
        let v = self.variant;

        match (f.x, f.z) {
            (0, 0) => match f.y {
                0 => Ok(("nop", String::new())),
                1 => Ok(("ex", "af,af'".to_string())),
                2 => Ok(("djnz", self.fetch(OperandKind::Relative)?)),
                3 => Ok(("jr", self.fetch(OperandKind::Relative)?)),
                y => {
                    let target = self.fetch(OperandKind::Relative)?;
                    Ok(("jr", format!("{},{}", tables::condition(y - 4), target)))
                }
            },
            (0, 1) if f.q == 0 => {
                let nn = self.fetch(OperandKind::Word)?;
                Ok(("ld", format!("{},{}", tables::register_pair(v, f.p), nn)))
            }
            (0, 1) => Ok(("add", format!("{},{}", tables::hl(v), tables::register_pair(v, f.p)))),
            (0, 2) => self.indirect_load(f),
            (0, 3) => {
                let mnemonic = if f.q == 0 { "inc" } else { "dec" };
                Ok((mnemonic, tables::register_pair(v, f.p).to_string()))
            }
            (0, 4) => Ok(("inc", self.register(f.y)?)),
            (0, 5) => Ok(("dec", self.register(f.y)?)),
            (0, 6) => {
                // DD 36 d n: the displacement precedes the immediate.
                let dst = self.register(f.y)?;
                let n = self.fetch(OperandKind::Byte)?;
                Ok(("ld", format!("{},{}", dst, n)))
            }
            (0, 7) => Ok((tables::accumulator_op(f.y), String::new())),

            (1, 6) if f.y == 6 => Ok(("halt", String::new())),
            (1, _) => self.load_register(f.y, f.z),

            (2, _) => {
                let operand = self.register(f.z)?;
                Ok(alu(f.y, operand))
            }

            (3, 0) => Ok(("ret", tables::condition(f.y).to_string())),
            (3, 1) if f.q == 0 => Ok(("pop", tables::register_pair_af(v, f.p).to_string())),
            (3, 1) => match f.p {
                0 => Ok(("ret", String::new())),
                1 => Ok(("exx", String::new())),
                2 => Ok(("jp", format!("({})", tables::hl(v)))),
                _ => Ok(("ld", format!("sp,{}", tables::hl(v)))),
            },
            (3, 2) => {
                let nn = self.fetch(OperandKind::Word)?;
                Ok(("jp", format!("{},{}", tables::condition(f.y), nn)))
            }
            (3, 3) => match f.y {
                0 => Ok(("jp", self.fetch(OperandKind::Word)?)),
                2 => Ok(("out", format!("({}),a", self.fetch(OperandKind::Byte)?))),
                3 => Ok(("in", format!("a,({})", self.fetch(OperandKind::Byte)?))),
                4 => Ok(("ex", format!("(sp),{}", tables::hl(v)))),
                5 => Ok(("ex", "de,hl".to_string())),
                6 => Ok(("di", String::new())),
                7 => Ok(("ei", String::new())),
                // y=1 is the CB prefix, consumed before dispatch.
                _ => self.undefined(),
            },
            (3, 4) => {
                let nn = self.fetch(OperandKind::Word)?;
                Ok(("call", format!("{},{}", tables::condition(f.y), nn)))
            }
            (3, 5) if f.q == 0 => Ok(("push", tables::register_pair_af(v, f.p).to_string())),
            (3, 5) if f.p == 0 => Ok(("call", self.fetch(OperandKind::Word)?)),
            // DD, ED and FD are prefixes, consumed before dispatch.
            (3, 5) => self.undefined(),
            (3, 6) => {
                let n = self.fetch(OperandKind::Byte)?;
                Ok(alu(f.y, n))
            }
            (3, 7) => Ok(("rst", format!("${:02x}", f.y * 8))),

            _ => unreachable!("x and z are 2- and 3-bit fields"),
        }
    }

    /// x=0, z=2: loads through BC, DE or an absolute address.
    fn indirect_load(&mut self, f: BitFields) -> Result<Decoded, DecodeError> {
        let hl = tables::hl(self.variant);

        let operands = match (f.q, f.p) {
            (0, 0) => "(bc),a".to_string(),
            (0, 1) => "(de),a".to_string(),
            (0, 2) => format!("({}),{}", self.fetch(OperandKind::Word)?, hl),
            (0, _) => format!("({}),a", self.fetch(OperandKind::Word)?),
            (_, 0) => "a,(bc)".to_string(),
            (_, 1) => "a,(de)".to_string(),
            (_, 2) => format!("{},({})", hl, self.fetch(OperandKind::Word)?),
            (_, _) => format!("a,({})", self.fetch(OperandKind::Word)?),
        };

        Ok(("ld", operands))
    }

    /// x=1: `ld r[y],r[z]`.
    ///
    /// When one side is `(ix+d)` the other side names H or L, not IXH/IXL.
    fn load_register(&mut self, y: u8, z: u8) -> Result<Decoded, DecodeError> {
        let (dst, src) = if self.is_indexed_memory(y) {
            (self.register(y)?, tables::register(RegisterVariant::Base, z).to_string())
        } else if self.is_indexed_memory(z) {
            (tables::register(RegisterVariant::Base, y).to_string(), self.register(z)?)
        } else {
            (self.register(y)?, self.register(z)?)
        };

        Ok(("ld", format!("{},{}", dst, src)))
    }
}

/// ALU operation `y` applied to `operand`.
fn alu(y: u8, operand: String) -> Decoded {
    match tables::alu(y) {
        (mnemonic, Some(accumulator)) => (mnemonic, format!("{},{}", accumulator, operand)),
        (mnemonic, None) => (mnemonic, operand),
    }
}
