//! Listing output.
//!
//! Renders decoded instructions as fixed-column text lines:
//!
//! ```text
//! 8000    ld      a,(ix-2) ; dd 7e fe
//! ```
//!
//! The address column and the raw-bytes comment are both optional and
//! controlled by [`OutputOptions`].

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::Instruction;

/// Width of the address column, including padding.
const ADDRESS_COLUMN: usize = 8;
/// Width of the mnemonic column, including padding.
const MNEMONIC_COLUMN: usize = 8;

/// Display toggles for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print the instruction address in the first column.
    pub show_address: bool,
    /// Append the consumed bytes as a trailing comment.
    pub show_bytes: bool,
    /// Number of hex digits in the address column.
    pub address_digits: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            show_address: true,
            show_bytes: true,
            address_digits: 4,
        }
    }
}

/// Formats one listing line, without the trailing newline.
pub fn format_line(insn: &Instruction, options: &OutputOptions) -> String {
    let mut line = String::with_capacity(48);

    if options.show_address {
        let address = format!("{:0width$x}", insn.address, width = options.address_digits);
        let _ = write!(line, "{:<width$}", address, width = ADDRESS_COLUMN);
    } else {
        line.push_str(&" ".repeat(ADDRESS_COLUMN));
    }

    let _ = write!(line, "{:<width$}", insn.mnemonic, width = MNEMONIC_COLUMN);
    line.push_str(&insn.operands);

    if options.show_bytes {
        let _ = write!(line, " ; {}", insn.bytes);
    }

    line.truncate(line.trim_end().len());
    line
}

/// Writes listing lines to an output stream.
pub struct Emitter<W: Write> {
    writer: W,
    options: OutputOptions,
}

impl<W: Write> Emitter<W> {
    /// Creates an emitter writing to `writer`.
    pub fn new(writer: W, options: OutputOptions) -> Self {
        Self { writer, options }
    }

    /// Writes one instruction as a line.
    pub fn emit(&mut self, insn: &Instruction) -> io::Result<()> {
        writeln!(self.writer, "{}", format_line(insn, &self.options))
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consumes the emitter and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawByteTrace;

    fn sample() -> Instruction {
        Instruction::new(0x8000, RawByteTrace::from(&[0xdd, 0x7e, 0xfe][..]), "ld")
            .with_operands("a,(ix-2)")
    }

    #[test]
    fn test_full_line() {
        let line = format_line(&sample(), &OutputOptions::default());
        assert_eq!(line, "8000    ld      a,(ix-2) ; dd 7e fe");
    }

    #[test]
    fn test_without_address() {
        let options = OutputOptions {
            show_address: false,
            ..OutputOptions::default()
        };
        assert_eq!(format_line(&sample(), &options), "        ld      a,(ix-2) ; dd 7e fe");
    }

    #[test]
    fn test_without_bytes() {
        let options = OutputOptions {
            show_bytes: false,
            ..OutputOptions::default()
        };
        assert_eq!(format_line(&sample(), &options), "8000    ld      a,(ix-2)");
    }

    #[test]
    fn test_no_operands() {
        let ret = Instruction::new(0x0010, RawByteTrace::from(&[0xc9][..]), "ret");
        assert_eq!(format_line(&ret, &OutputOptions::default()), "0010    ret      ; c9");

        let bare = OutputOptions {
            show_address: false,
            show_bytes: false,
            ..OutputOptions::default()
        };
        assert_eq!(format_line(&ret, &bare), "        ret");
    }

    #[test]
    fn test_emitter_writes_lines() {
        let mut emitter = Emitter::new(Vec::new(), OutputOptions::default());
        emitter.emit(&sample()).unwrap();
        emitter.emit(&sample()).unwrap();
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with('\n'));
    }
}
