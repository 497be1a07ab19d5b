//! CB and ED sub-tables.

use super::decoder::{Cursor, Decoded};
use super::fields::BitFields;
use super::prefix::IndexRegister;
use super::tables::{self, RegisterVariant, MEMORY_SLOT};
use crate::error::DecodeError;
use crate::rule::OperandKind;

impl Cursor<'_> {
    /// CB opcodes: rotates, shifts and bit operations.
    pub(super) fn bits(&mut self, f: BitFields) -> Result<Decoded, DecodeError> {
        if let Some(index) = self.variant.index() {
            return self.indexed_bits(index, f);
        }

        let target = self.register(f.z)?;
        Ok(match f.x {
            0 => (tables::rotation(f.y), target),
            1 => ("bit", format!("{},{}", f.y, target)),
            2 => ("res", format!("{},{}", f.y, target)),
            _ => ("set", format!("{},{}", f.y, target)),
        })
    }

    /// DD CB d op / FD CB d op.
    ///
    /// Every form operates on `(ix+d)`. With z != 6 the result is also
    /// copied into `r[z]`; `bit` has no result, so it ignores z.
    fn indexed_bits(&mut self, index: IndexRegister, f: BitFields) -> Result<Decoded, DecodeError> {
        let target = self.indexed(index)?;

        let (mnemonic, operands) = match f.x {
            0 => (tables::rotation(f.y), target),
            1 => return Ok(("bit", format!("{},{}", f.y, target))),
            2 => ("res", format!("{},{}", f.y, target)),
            _ => ("set", format!("{},{}", f.y, target)),
        };

        if f.z == MEMORY_SLOT {
            Ok((mnemonic, operands))
        } else {
            let copy = tables::register(RegisterVariant::Base, f.z);
            Ok(("ld", format!("{},{} {}", copy, mnemonic, operands)))
        }
    }

    /// ED opcodes. Index prefixes have no effect here.
    pub(super) fn extended(&mut self, f: BitFields) -> Result<Decoded, DecodeError> {
        let base = RegisterVariant::Base;

        match (f.x, f.z) {
            (1, 0) if f.y == MEMORY_SLOT => Ok(("in", "(c)".to_string())),
            (1, 0) => Ok(("in", format!("{},(c)", tables::register(base, f.y)))),
            (1, 1) if f.y == MEMORY_SLOT => Ok(("out", "(c),0".to_string())),
            (1, 1) => Ok(("out", format!("(c),{}", tables::register(base, f.y)))),
            (1, 2) => {
                let mnemonic = if f.q == 0 { "sbc" } else { "adc" };
                Ok((mnemonic, format!("hl,{}", tables::register_pair(base, f.p))))
            }
            (1, 3) => {
                let nn = self.fetch(OperandKind::Word)?;
                let pair = tables::register_pair(base, f.p);
                if f.q == 0 {
                    Ok(("ld", format!("({}),{}", nn, pair)))
                } else {
                    Ok(("ld", format!("{},({})", pair, nn)))
                }
            }
            (1, 4) => Ok(("neg", String::new())),
            (1, 5) if f.y == 1 => Ok(("reti", String::new())),
            (1, 5) => Ok(("retn", String::new())),
            (1, 6) => Ok(("im", tables::interrupt_mode(f.y).to_string())),
            (1, 7) => {
                let (mnemonic, operands) = tables::extended_misc(f.y);
                Ok((mnemonic, operands.to_string()))
            }
            (2, z) if z <= 3 && f.y >= 4 => Ok((tables::block(f.y, z), String::new())),
            _ => self.undefined(),
        }
    }
}
