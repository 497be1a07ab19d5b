//! Z80 instruction decoder.
//!
//! The Z80 opcode space is decoded structurally rather than through one flat
//! table. The final opcode byte is split into the `x`, `y`, `z`, `p` and `q`
//! fields and dispatched on those. It handles:
//! - Index prefixes (DD/FD) substituting IX/IY for HL, H and L
//! - Indexed memory operands `(ix+d)` with a lazily fetched displacement
//! - The CB (rotate/shift/bit) and ED (extended) sub-tables
//! - DD CB / FD CB, where the displacement precedes the opcode
//! - Undocumented IXH/IXL/IYH/IYL forms, SLL and the CB copy-back forms

mod decoder;
mod extended;
mod fields;
mod prefix;
mod tables;

pub use decoder::Z80Disassembler;
pub use fields::BitFields;
pub use prefix::{IndexRegister, PrefixState, SubTable};
pub use tables::RegisterVariant;
