//! 6502 instruction decoder.

use std::io::Read;

use super::opcodes::OPCODE_TABLE;
use crate::error::DecodeError;
use crate::source::ByteSource;
use crate::traits::{DecodedInstruction, Disassembler};
use dasm_core::Architecture;

/// MOS 6502 instruction decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mos6502Disassembler;

impl Mos6502Disassembler {
    /// Creates a new 6502 disassembler.
    pub fn new() -> Self {
        Self
    }
}

impl Disassembler for Mos6502Disassembler {
    fn decode_instruction(&self, input: &mut dyn Read, address: u16) -> Result<DecodedInstruction, DecodeError> {
        let mut source = ByteSource::new(input, address);
        let opcode = source.next_byte()?;
        let rule = &OPCODE_TABLE[usize::from(opcode)];

        if rule.is_undefined() {
            log::debug!("undefined 6502 opcode {:#04x} at {:#06x}", opcode, address);
        }

        rule.decode(source)
    }

    fn min_instruction_size(&self) -> usize {
        1
    }

    fn max_instruction_size(&self) -> usize {
        3
    }

    fn architecture(&self) -> Architecture {
        Architecture::Mos6502
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8], address: u16) -> DecodedInstruction {
        Mos6502Disassembler::new().decode_bytes(bytes, address).unwrap()
    }

    fn text(bytes: &[u8]) -> String {
        decode(bytes, 0x0600).instruction.text()
    }

    #[test]
    fn test_rts() {
        let result = decode(&[0x60], 0x1000);
        assert_eq!(result.instruction.mnemonic, "rts");
        assert_eq!(result.instruction.operands, "");
        assert_eq!(result.size(), 1);
        assert_eq!(result.next_address, 0x1001);
    }

    #[test]
    fn test_every_opcode_has_table_length() {
        let disasm = Mos6502Disassembler::new();
        for opcode in 0..=255u8 {
            let bytes = [opcode, 0x34, 0x12];
            let result = disasm.decode_bytes(&bytes, 0x2000).unwrap();
            let expected = OPCODE_TABLE[usize::from(opcode)].length();
            assert_eq!(result.size(), expected, "opcode {:#04x}", opcode);
            assert_eq!(usize::from(result.next_address - 0x2000), expected);
            assert_eq!(result.instruction.bytes.as_slice(), &bytes[..expected]);
        }
    }

    #[test]
    fn test_addressing_modes() {
        assert_eq!(text(&[0xa9, 0x10]), "lda #$10");
        assert_eq!(text(&[0xa5, 0x20]), "lda $20");
        assert_eq!(text(&[0xb5, 0x20]), "lda $20,x");
        assert_eq!(text(&[0xb6, 0x20]), "ldx $20,y");
        assert_eq!(text(&[0xad, 0x34, 0x12]), "lda $1234");
        assert_eq!(text(&[0x9d, 0x34, 0x12]), "sta $1234,x");
        assert_eq!(text(&[0xb9, 0x34, 0x12]), "lda $1234,y");
        assert_eq!(text(&[0x6c, 0xfc, 0xff]), "jmp ($fffc)");
        assert_eq!(text(&[0xa1, 0x20]), "lda ($20,x)");
        assert_eq!(text(&[0xb1, 0x20]), "lda ($20),y");
        assert_eq!(text(&[0x0a]), "asl a");
        assert_eq!(text(&[0xea]), "nop");
    }

    #[test]
    fn test_branch_targets() {
        // Resolved against the address after the offset byte.
        assert_eq!(text(&[0xd0, 0xfe]), "bne $0600");
        assert_eq!(text(&[0xf0, 0x10]), "beq $0612");
        assert_eq!(decode(&[0x10, 0x80], 0x0000).instruction.text(), "bpl $ff82");
    }

    #[test]
    fn test_undocumented_opcode_is_data() {
        let result = decode(&[0x02, 0xa9], 0x0600);
        assert_eq!(result.instruction.text(), "db $02");
        assert_eq!(result.size(), 1);
        assert_eq!(result.next_address, 0x0601);
    }

    #[test]
    fn test_truncated_operand() {
        let disasm = Mos6502Disassembler::new();
        match disasm.decode_bytes(&[0x4c, 0x00], 0x0200) {
            Err(DecodeError::Truncated { address, next_address, bytes }) => {
                assert_eq!(address, 0x0200);
                assert_eq!(next_address, 0x0202);
                assert_eq!(bytes, vec![0x4c, 0x00]);
            }
            other => panic!("expected truncation, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let disasm = Mos6502Disassembler::new();
        match disasm.decode_bytes(&[], 0x0200) {
            Err(DecodeError::EndOfInput { address }) => assert_eq!(address, 0x0200),
            other => panic!("expected end of input, got {:?}", other),
        }
    }
}
