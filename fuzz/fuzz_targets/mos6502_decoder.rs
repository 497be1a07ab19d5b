#![no_main]

use dasm_core::{format_line, OutputOptions};
use dasm_disasm::mos6502::OPCODE_TABLE;
use dasm_disasm::{disassemble_stream, DecodeError, Disassembler, Mos6502Disassembler};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let disasm = Mos6502Disassembler::new();

    // Decode single instruction; the length is fixed by the opcode
    if let Ok(decoded) = disasm.decode_bytes(data, 0x0600) {
        assert_eq!(decoded.size(), OPCODE_TABLE[usize::from(data[0])].length());
    }

    let options = OutputOptions::default();
    let mut input = data;
    let summary = disassemble_stream(&disasm, &mut input, 0x0600, |insn| {
        let _ = format_line(insn, &options);
        Ok::<(), DecodeError>(())
    });

    if let Ok(summary) = summary {
        assert_eq!(summary.end_address, 0x0600u16.wrapping_add(data.len() as u16));
    }
});
