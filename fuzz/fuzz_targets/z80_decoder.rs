#![no_main]

use dasm_core::{format_line, OutputOptions};
use dasm_disasm::{disassemble_stream, DecodeError, Disassembler, Z80Disassembler};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let disasm = Z80Disassembler::new();

    // Decode single instruction
    if let Ok(decoded) = disasm.decode_bytes(data, 0x1000) {
        assert!(decoded.size() >= 1 && decoded.size() <= data.len());
        assert_eq!(decoded.next_address, 0x1000u16.wrapping_add(decoded.size() as u16));
    }

    // Drive the whole buffer through the stream loop and the formatter
    let options = OutputOptions::default();
    let mut input = data;
    let mut consumed = 0usize;
    let summary = disassemble_stream(&disasm, &mut input, 0xfff0, |insn| {
        consumed += insn.size;
        let _ = format_line(insn, &options);
        Ok::<(), DecodeError>(())
    });

    if let Ok(summary) = summary {
        assert_eq!(summary.end_address, 0xfff0u16.wrapping_add(data.len() as u16));
        assert!(consumed <= data.len());
    }
});
