//! # dasm-core
//!
//! Core abstractions for the dasm disassembler. This crate defines
//! architecture-agnostic types for decoded instructions, the raw byte
//! trace recorded while decoding, and the listing emitter.

pub mod arch;
pub mod error;
pub mod instruction;
pub mod output;
pub mod trace;

pub use arch::Architecture;
pub use error::Error;
pub use instruction::Instruction;
pub use output::{format_line, Emitter, OutputOptions};
pub use trace::{RawByteTrace, TRACE_CAPACITY};
