//! 6502 opcode table.

use crate::rule::{DecodeRule, OperandKind};

/// 6502 addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    /// `($nn,x)`
    IndexedIndirect,
    /// `($nn),y`
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    /// Builds the decode rule for `mnemonic` in this mode.
    pub const fn rule(self, mnemonic: &'static str) -> DecodeRule {
        use OperandKind::{Byte, None, Relative, Word};

        let (operand, prefix, suffix) = match self {
            Self::Implied => (None, "", ""),
            Self::Accumulator => (None, "a", ""),
            Self::Immediate => (Byte, "#", ""),
            Self::ZeroPage => (Byte, "", ""),
            Self::ZeroPageX => (Byte, "", ",x"),
            Self::ZeroPageY => (Byte, "", ",y"),
            Self::Absolute => (Word, "", ""),
            Self::AbsoluteX => (Word, "", ",x"),
            Self::AbsoluteY => (Word, "", ",y"),
            Self::Indirect => (Word, "(", ")"),
            Self::IndexedIndirect => (Byte, "(", ",x)"),
            Self::IndirectIndexed => (Byte, "(", "),y"),
            Self::Relative => (Relative, "", ""),
        };

        DecodeRule::new(mnemonic, operand, prefix, suffix)
    }
}

/// One-byte opcode table. Undocumented opcodes decode as data.
pub static OPCODE_TABLE: [DecodeRule; 256] = {
    use AddressingMode::*;

    let mut table = [DecodeRule::undefined(); 256];

    // Loads
    table[0xA9] = Immediate.rule("lda");
    table[0xA5] = ZeroPage.rule("lda");
    table[0xB5] = ZeroPageX.rule("lda");
    table[0xAD] = Absolute.rule("lda");
    table[0xBD] = AbsoluteX.rule("lda");
    table[0xB9] = AbsoluteY.rule("lda");
    table[0xA1] = IndexedIndirect.rule("lda");
    table[0xB1] = IndirectIndexed.rule("lda");

    table[0xA2] = Immediate.rule("ldx");
    table[0xA6] = ZeroPage.rule("ldx");
    table[0xB6] = ZeroPageY.rule("ldx");
    table[0xAE] = Absolute.rule("ldx");
    table[0xBE] = AbsoluteY.rule("ldx");

    table[0xA0] = Immediate.rule("ldy");
    table[0xA4] = ZeroPage.rule("ldy");
    table[0xB4] = ZeroPageX.rule("ldy");
    table[0xAC] = Absolute.rule("ldy");
    table[0xBC] = AbsoluteX.rule("ldy");

    // Stores
    table[0x85] = ZeroPage.rule("sta");
    table[0x95] = ZeroPageX.rule("sta");
    table[0x8D] = Absolute.rule("sta");
    table[0x9D] = AbsoluteX.rule("sta");
    table[0x99] = AbsoluteY.rule("sta");
    table[0x81] = IndexedIndirect.rule("sta");
    table[0x91] = IndirectIndexed.rule("sta");

    table[0x86] = ZeroPage.rule("stx");
    table[0x96] = ZeroPageY.rule("stx");
    table[0x8E] = Absolute.rule("stx");

    table[0x84] = ZeroPage.rule("sty");
    table[0x94] = ZeroPageX.rule("sty");
    table[0x8C] = Absolute.rule("sty");

    // Transfers
    table[0xAA] = Implied.rule("tax");
    table[0xA8] = Implied.rule("tay");
    table[0xBA] = Implied.rule("tsx");
    table[0x8A] = Implied.rule("txa");
    table[0x9A] = Implied.rule("txs");
    table[0x98] = Implied.rule("tya");

    // Stack
    table[0x48] = Implied.rule("pha");
    table[0x08] = Implied.rule("php");
    table[0x68] = Implied.rule("pla");
    table[0x28] = Implied.rule("plp");

    // Arithmetic
    table[0x69] = Immediate.rule("adc");
    table[0x65] = ZeroPage.rule("adc");
    table[0x75] = ZeroPageX.rule("adc");
    table[0x6D] = Absolute.rule("adc");
    table[0x7D] = AbsoluteX.rule("adc");
    table[0x79] = AbsoluteY.rule("adc");
    table[0x61] = IndexedIndirect.rule("adc");
    table[0x71] = IndirectIndexed.rule("adc");

    table[0xE9] = Immediate.rule("sbc");
    table[0xE5] = ZeroPage.rule("sbc");
    table[0xF5] = ZeroPageX.rule("sbc");
    table[0xED] = Absolute.rule("sbc");
    table[0xFD] = AbsoluteX.rule("sbc");
    table[0xF9] = AbsoluteY.rule("sbc");
    table[0xE1] = IndexedIndirect.rule("sbc");
    table[0xF1] = IndirectIndexed.rule("sbc");

    // Logical
    table[0x29] = Immediate.rule("and");
    table[0x25] = ZeroPage.rule("and");
    table[0x35] = ZeroPageX.rule("and");
    table[0x2D] = Absolute.rule("and");
    table[0x3D] = AbsoluteX.rule("and");
    table[0x39] = AbsoluteY.rule("and");
    table[0x21] = IndexedIndirect.rule("and");
    table[0x31] = IndirectIndexed.rule("and");

    table[0x49] = Immediate.rule("eor");
    table[0x45] = ZeroPage.rule("eor");
    table[0x55] = ZeroPageX.rule("eor");
    table[0x4D] = Absolute.rule("eor");
    table[0x5D] = AbsoluteX.rule("eor");
    table[0x59] = AbsoluteY.rule("eor");
    table[0x41] = IndexedIndirect.rule("eor");
    table[0x51] = IndirectIndexed.rule("eor");

    table[0x09] = Immediate.rule("ora");
    table[0x05] = ZeroPage.rule("ora");
    table[0x15] = ZeroPageX.rule("ora");
    table[0x0D] = Absolute.rule("ora");
    table[0x1D] = AbsoluteX.rule("ora");
    table[0x19] = AbsoluteY.rule("ora");
    table[0x01] = IndexedIndirect.rule("ora");
    table[0x11] = IndirectIndexed.rule("ora");

    table[0x24] = ZeroPage.rule("bit");
    table[0x2C] = Absolute.rule("bit");

    // Compare
    table[0xC9] = Immediate.rule("cmp");
    table[0xC5] = ZeroPage.rule("cmp");
    table[0xD5] = ZeroPageX.rule("cmp");
    table[0xCD] = Absolute.rule("cmp");
    table[0xDD] = AbsoluteX.rule("cmp");
    table[0xD9] = AbsoluteY.rule("cmp");
    table[0xC1] = IndexedIndirect.rule("cmp");
    table[0xD1] = IndirectIndexed.rule("cmp");

    table[0xE0] = Immediate.rule("cpx");
    table[0xE4] = ZeroPage.rule("cpx");
    table[0xEC] = Absolute.rule("cpx");

    table[0xC0] = Immediate.rule("cpy");
    table[0xC4] = ZeroPage.rule("cpy");
    table[0xCC] = Absolute.rule("cpy");

    // Increment / decrement
    table[0xE6] = ZeroPage.rule("inc");
    table[0xF6] = ZeroPageX.rule("inc");
    table[0xEE] = Absolute.rule("inc");
    table[0xFE] = AbsoluteX.rule("inc");
    table[0xE8] = Implied.rule("inx");
    table[0xC8] = Implied.rule("iny");

    table[0xC6] = ZeroPage.rule("dec");
    table[0xD6] = ZeroPageX.rule("dec");
    table[0xCE] = Absolute.rule("dec");
    table[0xDE] = AbsoluteX.rule("dec");
    table[0xCA] = Implied.rule("dex");
    table[0x88] = Implied.rule("dey");

    // Shifts and rotates
    table[0x0A] = Accumulator.rule("asl");
    table[0x06] = ZeroPage.rule("asl");
    table[0x16] = ZeroPageX.rule("asl");
    table[0x0E] = Absolute.rule("asl");
    table[0x1E] = AbsoluteX.rule("asl");

    table[0x4A] = Accumulator.rule("lsr");
    table[0x46] = ZeroPage.rule("lsr");
    table[0x56] = ZeroPageX.rule("lsr");
    table[0x4E] = Absolute.rule("lsr");
    table[0x5E] = AbsoluteX.rule("lsr");

    table[0x2A] = Accumulator.rule("rol");
    table[0x26] = ZeroPage.rule("rol");
    table[0x36] = ZeroPageX.rule("rol");
    table[0x2E] = Absolute.rule("rol");
    table[0x3E] = AbsoluteX.rule("rol");

    table[0x6A] = Accumulator.rule("ror");
    table[0x66] = ZeroPage.rule("ror");
    table[0x76] = ZeroPageX.rule("ror");
    table[0x6E] = Absolute.rule("ror");
    table[0x7E] = AbsoluteX.rule("ror");

    // Jumps and calls
    table[0x4C] = Absolute.rule("jmp");
    table[0x6C] = Indirect.rule("jmp");
    table[0x20] = Absolute.rule("jsr");
    table[0x60] = Implied.rule("rts");
    table[0x40] = Implied.rule("rti");
    table[0x00] = Implied.rule("brk");

    // Branches
    table[0x10] = Relative.rule("bpl");
    table[0x30] = Relative.rule("bmi");
    table[0x50] = Relative.rule("bvc");
    table[0x70] = Relative.rule("bvs");
    table[0x90] = Relative.rule("bcc");
    table[0xB0] = Relative.rule("bcs");
    table[0xD0] = Relative.rule("bne");
    table[0xF0] = Relative.rule("beq");

    // Flags
    table[0x18] = Implied.rule("clc");
    table[0x38] = Implied.rule("sec");
    table[0x58] = Implied.rule("cli");
    table[0x78] = Implied.rule("sei");
    table[0xB8] = Implied.rule("clv");
    table[0xD8] = Implied.rule("cld");
    table[0xF8] = Implied.rule("sed");

    table[0xEA] = Implied.rule("nop");

    table
};
