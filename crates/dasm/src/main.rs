//! dasm - A simple, portable multi-CPU disassembler
//!
//! Usage:
//!   dasm -c z80 code.bin              Disassemble from address 0
//!   dasm -c 6502 -o 0x0600 code.bin   Disassemble from address 0x0600
//!   dasm -c z80 -a -m -               Read stdin, hide addresses and bytes
//!   dasm --list-cpus                  List supported CPUs

use anyhow::{Context, Result};
use clap::Parser;
use dasm_core::{Architecture, Emitter, OutputOptions};
use dasm_disasm::{disassemble_stream, disassembler_by_name};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dasm")]
#[command(version, about = "A simple, portable multi-CPU disassembler", long_about = None)]
struct Cli {
    /// CPU to disassemble for (see --list-cpus)
    #[arg(short, long, value_name = "NAME", required_unless_present = "list_cpus")]
    cpu: Option<String>,

    /// Address of the first byte (0x1f, $1f, 037 or 31)
    #[arg(short, long, value_name = "ADDR", value_parser = parse_address, default_value = "0")]
    origin: u16,

    /// Hide the address column
    #[arg(short = 'a', long)]
    no_address: bool,

    /// Hide the raw bytes comment
    #[arg(short = 'm', long)]
    no_bytes: bool,

    /// List supported CPUs and exit
    #[arg(long)]
    list_cpus: bool,

    /// Input file, or - for standard input
    #[arg(required_unless_present = "list_cpus")]
    file: Option<PathBuf>,
}

/// Parses an address the way C's `strtol` does with base 0, plus `$` hex.
fn parse_address(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(hex) = s.strip_prefix('$') {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };

    let value = u32::from_str_radix(digits, radix).map_err(|e| format!("invalid address '{}': {}", s, e))?;
    u16::try_from(value).map_err(|_| format!("address '{}' does not fit in 16 bits", s))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.list_cpus {
        for arch in Architecture::ALL {
            println!("{}", arch.name().to_ascii_lowercase());
        }
        return Ok(());
    }

    let cpu = cli.cpu.as_deref().context("no CPU given")?;
    let disasm = disassembler_by_name(cpu)?;
    log::debug!("disassembling for {} from {:#06x}", disasm.architecture(), cli.origin);

    let path = cli.file.as_ref().context("no input file given")?;
    let mut input: Box<dyn Read> = if path.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("Failed to open input: {}", path.display()))?;
        Box::new(BufReader::new(file))
    };

    let options = OutputOptions {
        show_address: !cli.no_address,
        show_bytes: !cli.no_bytes,
        address_digits: disasm.architecture().address_digits(),
    };
    let stdout = io::stdout();
    let mut emitter = Emitter::new(BufWriter::new(stdout.lock()), options);

    let summary = disassemble_stream(disasm.as_ref(), &mut input, cli.origin, |insn| {
        emitter.emit(insn).context("Failed to write listing")
    })
    .with_context(|| format!("Failed to disassemble {}", path.display()))?;

    emitter.flush().context("Failed to write listing")?;

    if let Some(tail) = &summary.truncated {
        log::warn!(
            "input ended inside an instruction at {:#06x} ({} byte(s) not shown)",
            tail.address,
            summary.end_address.wrapping_sub(tail.address)
        );
    }
    log::debug!(
        "{} instruction(s), ended at {:#06x}",
        summary.instructions,
        summary.end_address
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_address_radixes() {
        assert_eq!(parse_address("0x8000"), Ok(0x8000));
        assert_eq!(parse_address("0XfF"), Ok(0xff));
        assert_eq!(parse_address("$c000"), Ok(0xc000));
        assert_eq!(parse_address("0100"), Ok(0o100));
        assert_eq!(parse_address("256"), Ok(256));
        assert_eq!(parse_address("0"), Ok(0));
    }

    #[test]
    fn test_parse_address_rejects_bad_input() {
        assert!(parse_address("0x10000").is_err());
        assert!(parse_address("65536").is_err());
        assert!(parse_address("089").is_err());
        assert!(parse_address("zz").is_err());
        assert!(parse_address("").is_err());
    }

    #[test]
    fn test_list_cpus_needs_no_file() {
        let cli = Cli::try_parse_from(["dasm", "--list-cpus"]).unwrap();
        assert!(cli.list_cpus);
        assert!(cli.cpu.is_none());
    }

    #[test]
    fn test_cpu_and_file_required() {
        assert!(Cli::try_parse_from(["dasm", "code.bin"]).is_err());
        assert!(Cli::try_parse_from(["dasm", "-c", "z80"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["dasm", "-c", "6502", "-o", "$0600", "-a", "-m", "-"]).unwrap();
        assert_eq!(cli.cpu.as_deref(), Some("6502"));
        assert_eq!(cli.origin, 0x0600);
        assert!(cli.no_address);
        assert!(cli.no_bytes);
        assert_eq!(cli.file, Some(PathBuf::from("-")));
    }
}
