//! Z80 register and operation name tables.
//!
//! Every table is indexed by a field of the opcode byte. The register tables
//! come in three parallel variants, one per index mode; a slot index names
//! the same register position in all three.

use super::prefix::IndexRegister;

/// Which set of register names is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterVariant {
    /// No index prefix: HL, H, L
    Base,
    /// DD prefix: IX, IXH, IXL
    Ix,
    /// FD prefix: IY, IYH, IYL
    Iy,
}

impl RegisterVariant {
    /// The index register this variant substitutes for HL.
    pub fn index(self) -> Option<IndexRegister> {
        match self {
            Self::Base => None,
            Self::Ix => Some(IndexRegister::Ix),
            Self::Iy => Some(IndexRegister::Iy),
        }
    }

    fn row(self) -> usize {
        match self {
            Self::Base => 0,
            Self::Ix => 1,
            Self::Iy => 2,
        }
    }
}

/// Slot of `r` that addresses memory through HL.
pub const MEMORY_SLOT: u8 = 6;

/// 8-bit registers. Slot 6 under an index prefix is rewritten to `(ix+d)`
/// by the decoder, since it needs the displacement.
const R: [[&str; 8]; 3] = [
    ["b", "c", "d", "e", "h", "l", "(hl)", "a"],
    ["b", "c", "d", "e", "ixh", "ixl", "(ix)", "a"],
    ["b", "c", "d", "e", "iyh", "iyl", "(iy)", "a"],
];

/// Register pairs, SP convention.
const RP: [[&str; 4]; 3] = [
    ["bc", "de", "hl", "sp"],
    ["bc", "de", "ix", "sp"],
    ["bc", "de", "iy", "sp"],
];

/// Register pairs, AF convention (push/pop).
const RP2: [[&str; 4]; 3] = [
    ["bc", "de", "hl", "af"],
    ["bc", "de", "ix", "af"],
    ["bc", "de", "iy", "af"],
];

/// Condition codes.
const CC: [&str; 8] = ["nz", "z", "nc", "c", "po", "pe", "p", "m"];

/// ALU operations, with the accumulator operand where the syntax shows it.
const ALU: [(&str, Option<&str>); 8] = [
    ("add", Some("a")),
    ("adc", Some("a")),
    ("sub", None),
    ("sbc", Some("a")),
    ("and", None),
    ("xor", None),
    ("or", None),
    ("cp", None),
];

/// Rotate and shift operations.
const ROT: [&str; 8] = ["rlc", "rrc", "rl", "rr", "sla", "sra", "sll", "srl"];

/// Interrupt modes. The encoding repeats every four entries.
const IM: [&str; 8] = ["0", "0/1", "1", "2", "0", "0/1", "1", "2"];

/// Block instructions, indexed by `[y - 4][z]`.
const BLI: [[&str; 4]; 4] = [
    ["ldi", "cpi", "ini", "outi"],
    ["ldd", "cpd", "ind", "outd"],
    ["ldir", "cpir", "inir", "otir"],
    ["lddr", "cpdr", "indr", "otdr"],
];

/// x=0, z=7: accumulator and flag operations.
const ACCUMULATOR_OPS: [&str; 8] = ["rlca", "rrca", "rla", "rra", "daa", "cpl", "scf", "ccf"];

/// ED x=1, z=7.
const ED_MISC: [(&str, &str); 8] = [
    ("ld", "i,a"),
    ("ld", "r,a"),
    ("ld", "a,i"),
    ("ld", "a,r"),
    ("rrd", ""),
    ("rld", ""),
    ("nop", ""),
    ("nop", ""),
];

/// 8-bit register in `slot` (0-7).
pub fn register(variant: RegisterVariant, slot: u8) -> &'static str {
    R[variant.row()][usize::from(slot & 7)]
}

/// Register pair `p` (0-3), SP convention.
pub fn register_pair(variant: RegisterVariant, p: u8) -> &'static str {
    RP[variant.row()][usize::from(p & 3)]
}

/// Register pair `p` (0-3), AF convention.
pub fn register_pair_af(variant: RegisterVariant, p: u8) -> &'static str {
    RP2[variant.row()][usize::from(p & 3)]
}

/// HL or the index register replacing it.
pub fn hl(variant: RegisterVariant) -> &'static str {
    register_pair(variant, 2)
}

/// Condition code `y` (nz, z, nc, ...).
pub fn condition(y: u8) -> &'static str {
    CC[usize::from(y & 7)]
}

/// ALU mnemonic and optional accumulator operand.
pub fn alu(y: u8) -> (&'static str, Option<&'static str>) {
    ALU[usize::from(y & 7)]
}

/// Rotate or shift mnemonic for CB x=0 operation `y`.
pub fn rotation(y: u8) -> &'static str {
    ROT[usize::from(y & 7)]
}

/// Operand of `im` for ED x=1, z=6 with field `y`.
pub fn interrupt_mode(y: u8) -> &'static str {
    IM[usize::from(y & 7)]
}

/// Block instruction for `y` in 4-7 and `z` in 0-3.
pub fn block(y: u8, z: u8) -> &'static str {
    BLI[usize::from(y.wrapping_sub(4) & 3)][usize::from(z & 3)]
}

/// Accumulator and flag operation for x=0, z=7 with field `y`.
pub fn accumulator_op(y: u8) -> &'static str {
    ACCUMULATOR_OPS[usize::from(y & 7)]
}

/// Mnemonic and operands for ED x=1, z=7 with field `y`.
pub fn extended_misc(y: u8) -> (&'static str, &'static str) {
    ED_MISC[usize::from(y & 7)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_agree_outside_hl() {
        for slot in [0, 1, 2, 3, 7] {
            assert_eq!(register(RegisterVariant::Base, slot), register(RegisterVariant::Ix, slot));
            assert_eq!(register(RegisterVariant::Base, slot), register(RegisterVariant::Iy, slot));
        }
        for p in [0, 1, 3] {
            assert_eq!(register_pair(RegisterVariant::Base, p), register_pair(RegisterVariant::Iy, p));
            assert_eq!(register_pair_af(RegisterVariant::Base, p), register_pair_af(RegisterVariant::Ix, p));
        }
    }

    #[test]
    fn test_substituted_slots() {
        assert_eq!(register(RegisterVariant::Ix, 4), "ixh");
        assert_eq!(register(RegisterVariant::Iy, 5), "iyl");
        assert_eq!(hl(RegisterVariant::Base), "hl");
        assert_eq!(hl(RegisterVariant::Ix), "ix");
        assert_eq!(register_pair_af(RegisterVariant::Iy, 2), "iy");
        assert_eq!(register_pair_af(RegisterVariant::Base, 3), "af");
        assert_eq!(register_pair(RegisterVariant::Base, 3), "sp");
    }

    #[test]
    fn test_block_matrix() {
        assert_eq!(block(4, 0), "ldi");
        assert_eq!(block(6, 0), "ldir");
        assert_eq!(block(7, 3), "otdr");
        assert_eq!(block(5, 1), "cpd");
    }

    #[test]
    fn test_interrupt_modes_repeat() {
        for y in 0..4 {
            assert_eq!(interrupt_mode(y), interrupt_mode(y + 4));
        }
    }
}
