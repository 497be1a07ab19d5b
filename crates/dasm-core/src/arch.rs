//! Architecture identification and properties.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Supported CPU architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Architecture {
    /// Zilog Z80
    Z80,
    /// MOS Technology 6502 (NMOS)
    Mos6502,
}

impl Architecture {
    /// Every architecture, in the order they are listed to users.
    pub const ALL: [Architecture; 2] = [Self::Z80, Self::Mos6502];

    /// Returns the name of this architecture.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Z80 => "Z80",
            Self::Mos6502 => "6502",
        }
    }

    /// Number of hex digits used to print an address.
    pub fn address_digits(&self) -> usize {
        match self {
            Self::Z80 | Self::Mos6502 => 4,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Architecture {
    type Err = Error;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "z80" => Ok(Self::Z80),
            "6502" | "mos6502" => Ok(Self::Mos6502),
            _ => Err(Error::UnknownArchitecture(s.to_string())),
        }
    }
}
