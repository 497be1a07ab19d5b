//! Benchmarks for disassembly performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dasm_disasm::{disassemble_stream, DecodeError, Disassembler, Mos6502Disassembler, Z80Disassembler};

/// Sample Z80 code: a block copy followed by an indexed polling loop.
/// Mixes unprefixed, ED, DD and DD CB forms.
const Z80_CODE: &[u8] = &[
    0x21, 0x00, 0x80, // ld hl,$8000
    0x11, 0x00, 0x90, // ld de,$9000
    0x01, 0x00, 0x01, // ld bc,$0100
    0xed, 0xb0, // ldir
    0xdd, 0x21, 0x00, 0x40, // ld ix,$4000
    0xdd, 0x7e, 0x05, // ld a,(ix+5)
    0xfe, 0x0a, // cp $0a
    0x20, 0xf9, // jr nz,-7
    0xdd, 0xcb, 0x02, 0xc6, // set 0,(ix+2)
    0xcb, 0x27, // sla a
    0xc9, // ret
];

/// Sample 6502 code: a zero page copy loop.
const MOS6502_CODE: &[u8] = &[
    0xa2, 0x00, // ldx #$00
    0xb5, 0x80, // lda $80,x
    0x9d, 0x00, 0x02, // sta $0200,x
    0xe8, // inx
    0xe0, 0x10, // cpx #$10
    0xd0, 0xf6, // bne -10
    0xb1, 0xfb, // lda ($fb),y
    0x6c, 0xfc, 0xff, // jmp ($fffc)
    0x60, // rts
];

/// Larger code block for throughput testing (repeated pattern).
fn generate_large_block(pattern: &[u8], size: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        let to_copy = remaining.min(pattern.len());
        result.extend_from_slice(&pattern[..to_copy]);
    }
    result
}

fn bench_decoder(c: &mut Criterion, group_name: &str, disasm: &dyn Disassembler, code: &[u8]) {
    let mut group = c.benchmark_group(group_name);

    // Benchmark single instruction decode
    group.bench_function("single_instruction", |b| {
        b.iter(|| {
            let _ = disasm.decode_bytes(black_box(code), 0x1000);
        })
    });

    // Benchmark small routine
    group.bench_function("small_routine", |b| {
        b.iter(|| {
            let _ = disasm.disassemble_block(black_box(code), 0x1000);
        })
    });

    // Benchmark various sizes for throughput through the stream driver
    for size in [1024, 4096, 16384] {
        let block = generate_large_block(code, size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("throughput", size), &block, |b, block| {
            b.iter(|| {
                let mut input = black_box(block.as_slice());
                let _ = disassemble_stream(disasm, &mut input, 0x1000, |insn| {
                    black_box(insn);
                    Ok::<(), DecodeError>(())
                });
            })
        });
    }

    group.finish();
}

fn bench_z80_disassembly(c: &mut Criterion) {
    bench_decoder(c, "z80_disassembly", &Z80Disassembler::new(), Z80_CODE);
}

fn bench_6502_disassembly(c: &mut Criterion) {
    bench_decoder(c, "mos6502_disassembly", &Mos6502Disassembler::new(), MOS6502_CODE);
}

criterion_group!(benches, bench_z80_disassembly, bench_6502_disassembly);
criterion_main!(benches);
