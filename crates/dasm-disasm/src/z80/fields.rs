//! Opcode bit-field extraction.

/// The structural fields of a Z80 opcode byte.
///
/// ```text
///   7 6 | 5 4 3 | 2 1 0
///    x  |   y   |   z
///       | p   q |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitFields {
    /// Bits 7-6
    pub x: u8,
    /// Bits 5-3
    pub y: u8,
    /// Bits 2-0
    pub z: u8,
    /// Bits 5-4 (`y >> 1`)
    pub p: u8,
    /// Bit 3 (`y & 1`)
    pub q: u8,
}

impl BitFields {
    /// Splits an opcode byte into its fields.
    pub fn parse(opcode: u8) -> Self {
        let y = (opcode >> 3) & 0x7;
        Self {
            x: (opcode >> 6) & 0x3,
            y,
            z: opcode & 0x7,
            p: y >> 1,
            q: y & 1,
        }
    }
}

impl From<u8> for BitFields {
    fn from(opcode: u8) -> Self {
        Self::parse(opcode)
    }
}
