//! Stream disassembly loop.

use std::io::Read;

use dasm_core::Instruction;
use log::debug;

use crate::error::DecodeError;
use crate::traits::Disassembler;

/// Bytes left over when the stream ended inside an instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedTail {
    /// Address of the partial instruction.
    pub address: u16,
    /// Bytes consumed before the stream ended.
    pub bytes: Vec<u8>,
}

/// Outcome of disassembling a whole stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    /// Number of instructions handed to the sink.
    pub instructions: usize,
    /// Address after the last consumed byte.
    pub end_address: u16,
    /// Set if the stream ended part way through an instruction.
    pub truncated: Option<TruncatedTail>,
}

/// Decodes instructions from `input` until it is exhausted.
///
/// Each instruction is passed to `sink` in stream order. A partial
/// instruction at the end of the stream produces no call to `sink`, but its
/// bytes still advance `end_address`. Read failures and sink failures stop
/// the loop.
pub fn disassemble_stream<E, F>(
    disasm: &dyn Disassembler,
    input: &mut dyn Read,
    start_address: u16,
    mut sink: F,
) -> Result<StreamSummary, E>
where
    E: From<DecodeError>,
    F: FnMut(&Instruction) -> Result<(), E>,
{
    let mut address = start_address;
    let mut instructions = 0;

    loop {
        match disasm.decode_instruction(input, address) {
            Ok(decoded) => {
                sink(&decoded.instruction)?;
                instructions += 1;
                address = decoded.next_address;
            }
            Err(DecodeError::EndOfInput { .. }) => {
                return Ok(StreamSummary {
                    instructions,
                    end_address: address,
                    truncated: None,
                });
            }
            Err(DecodeError::Truncated {
                address: partial,
                next_address,
                bytes,
            }) => {
                debug!(
                    "{}: stream ended inside instruction at {:#06x} after {} byte(s)",
                    disasm.architecture(),
                    partial,
                    next_address.wrapping_sub(partial)
                );
                return Ok(StreamSummary {
                    instructions,
                    end_address: next_address,
                    truncated: Some(TruncatedTail {
                        address: partial,
                        bytes,
                    }),
                });
            }
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(all(test, feature = "z80", feature = "mos6502"))]
mod tests {
    use super::*;
    use std::io;

    use crate::{Mos6502Disassembler, Z80Disassembler};

    /// Yields `data` one byte per read, then fails.
    struct FailingReader<'a> {
        data: &'a [u8],
    }

    impl Read for FailingReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.split_first() {
                Some((&byte, rest)) if !buf.is_empty() => {
                    buf[0] = byte;
                    self.data = rest;
                    Ok(1)
                }
                _ => Err(io::Error::new(io::ErrorKind::Other, "device detached")),
            }
        }
    }

    fn collect(disasm: &dyn Disassembler, bytes: &[u8], start: u16) -> (Vec<String>, StreamSummary) {
        let mut input = bytes;
        let mut lines = Vec::new();
        let summary = disassemble_stream(disasm, &mut input, start, |insn| {
            lines.push(format!("{:04x} {}", insn.address, insn));
            Ok::<(), DecodeError>(())
        })
        .unwrap();
        (lines, summary)
    }

    #[test]
    fn test_z80_stream() {
        let code = [0x3e, 0x01, 0xdd, 0x21, 0x34, 0x12, 0x18, 0xfe, 0xc9];
        let (lines, summary) = collect(&Z80Disassembler::new(), &code, 0x8000);
        assert_eq!(
            lines,
            vec!["8000 ld a,$01", "8002 ld ix,$1234", "8006 jr $8006", "8008 ret"]
        );
        assert_eq!(summary.instructions, 4);
        assert_eq!(summary.end_address, 0x8009);
        assert_eq!(summary.truncated, None);
    }

    #[test]
    fn test_stream_ending_after_prefix() {
        let (lines, summary) = collect(&Z80Disassembler::new(), &[0x00, 0xdd], 0x1000);
        assert_eq!(lines, vec!["1000 nop"]);
        assert_eq!(summary.end_address, 0x1002);
        assert_eq!(
            summary.truncated,
            Some(TruncatedTail {
                address: 0x1001,
                bytes: vec![0xdd],
            })
        );
    }

    #[test]
    fn test_6502_stream() {
        let code = [0xa9, 0x10, 0x8d, 0x00, 0x02, 0xd0, 0xfb, 0x60];
        let (lines, summary) = collect(&Mos6502Disassembler::new(), &code, 0x0600);
        assert_eq!(
            lines,
            vec!["0600 lda #$10", "0602 sta $0200", "0605 bne $0602", "0607 rts"]
        );
        assert_eq!(summary.end_address, 0x0608);
    }

    #[test]
    fn test_6502_stream_ending_mid_operand() {
        let (lines, summary) = collect(&Mos6502Disassembler::new(), &[0xea, 0x4c, 0x00], 0x0200);
        assert_eq!(lines, vec!["0200 nop"]);
        assert_eq!(summary.end_address, 0x0203);
        assert!(summary.truncated.is_some());
    }

    #[test]
    fn test_empty_stream() {
        let (lines, summary) = collect(&Z80Disassembler::new(), &[], 0x4000);
        assert!(lines.is_empty());
        assert_eq!(summary.instructions, 0);
        assert_eq!(summary.end_address, 0x4000);
    }

    #[test]
    fn test_read_error_stops_loop() {
        let mut input = FailingReader {
            data: &[0x00, 0xc9, 0x3e],
        };
        let mut lines = Vec::new();
        let result = disassemble_stream(&Z80Disassembler::new(), &mut input, 0x1000, |insn| {
            lines.push(insn.text());
            Ok::<(), DecodeError>(())
        });

        assert_eq!(lines, vec!["nop", "ret"]);
        match result {
            Err(DecodeError::Io { address, source }) => {
                // The failed read was for the operand of 3e at 0x1002.
                assert_eq!(address, 0x1003);
                assert_eq!(source.kind(), io::ErrorKind::Other);
            }
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_error_on_first_byte() {
        let mut input = FailingReader { data: &[] };
        let result = disassemble_stream(&Mos6502Disassembler::new(), &mut input, 0x0600, |_| {
            Ok::<(), DecodeError>(())
        });
        assert!(matches!(result, Err(DecodeError::Io { address: 0x0600, .. })));
    }

    #[test]
    fn test_sink_error_stops_loop() {
        let mut input: &[u8] = &[0x00, 0x00, 0x00];
        let mut seen = 0;
        let result = disassemble_stream(&Z80Disassembler::new(), &mut input, 0, |_| {
            seen += 1;
            if seen == 2 {
                Err(DecodeError::unknown_architecture("sink full"))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(seen, 2);
    }
}
