//! Z80 prefix parsing.

use crate::error::DecodeError;
use crate::source::ByteSource;

use super::tables::RegisterVariant;

/// Selects IX in place of HL.
pub const PREFIX_IX: u8 = 0xDD;
/// Selects IY in place of HL.
pub const PREFIX_IY: u8 = 0xFD;
/// Selects the rotate/shift/bit sub-table.
pub const PREFIX_CB: u8 = 0xCB;
/// Selects the extended sub-table.
pub const PREFIX_ED: u8 = 0xED;

/// Index register selected by a DD or FD prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRegister {
    Ix,
    Iy,
}

impl IndexRegister {
    /// Register name as printed.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ix => "ix",
            Self::Iy => "iy",
        }
    }
}

/// Opcode sub-table selected by a CB or ED prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubTable {
    /// CB: rotates, shifts, bit test/set/reset
    Bits,
    /// ED: block transfers, I/O, 16-bit arithmetic, interrupt modes
    Extended,
}

/// Prefixes seen while decoding one instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixState {
    /// Last index prefix seen.
    pub index: Option<IndexRegister>,
    /// Sub-table prefix, if any.
    pub table: Option<SubTable>,
}

impl PrefixState {
    /// Records `byte` if it is a prefix, returning false otherwise.
    ///
    /// Index prefixes replace each other. CB and ED end the prefixes, in the
    /// order the CPU fetches them: the next byte is an opcode or a DD CB /
    /// FD CB displacement.
    pub fn absorb(&mut self, byte: u8) -> bool {
        if self.table.is_some() {
            return false;
        }

        match byte {
            PREFIX_IX => self.index = Some(IndexRegister::Ix),
            PREFIX_IY => self.index = Some(IndexRegister::Iy),
            PREFIX_CB => self.table = Some(SubTable::Bits),
            PREFIX_ED => self.table = Some(SubTable::Extended),
            _ => return false,
        }

        true
    }

    /// Reads prefix bytes until the first non-prefix byte.
    ///
    /// Returns the prefixes and that byte.
    pub fn parse(source: &mut ByteSource<'_>) -> Result<(Self, u8), DecodeError> {
        let mut prefixes = Self::default();

        loop {
            let byte = source.next_byte()?;
            if !prefixes.absorb(byte) {
                return Ok((prefixes, byte));
            }
            if prefixes.table.is_none() {
                // A newer index prefix makes the earlier ones redundant.
                source.restart_sequence();
            }
            log::trace!("prefix {:#04x} at {:#06x}", byte, source.address().wrapping_sub(1));
        }
    }

    /// Returns true if a displacement byte sits between the prefixes and
    /// the opcode (DD CB d op, FD CB d op).
    pub fn has_leading_displacement(&self) -> bool {
        self.table == Some(SubTable::Bits) && self.index.is_some()
    }

    /// Register table in effect. ED instructions ignore index prefixes.
    pub fn variant(&self) -> RegisterVariant {
        match (self.table, self.index) {
            (Some(SubTable::Extended), _) | (_, None) => RegisterVariant::Base,
            (_, Some(IndexRegister::Ix)) => RegisterVariant::Ix,
            (_, Some(IndexRegister::Iy)) => RegisterVariant::Iy,
        }
    }
}
