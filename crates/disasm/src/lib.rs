//! MIPS32 subset disassembler library.
//!
//! This crate turns 32-bit MIPS machine-code words into assembly text:
//! 1. **ISA:** Field extraction, sign extension, and separate R-format / I-format mnemonic tables.
//! 2. **Rendering:** Register, load/store, and branch operand layouts with PC-relative targets.
//! 3. **Batches:** Positional addressing from a base address and all-or-nothing error reporting.
//! 4. **Support:** JSON configuration and instruction-mix statistics.

/// Common types and constants (addresses, errors).
pub mod common;
/// Disassembler configuration (start address, register naming).
pub mod config;
/// Batch disassembly driver.
pub mod disassembler;
/// Instruction set (fields, decode, mnemonic tables, rendering).
pub mod isa;
/// Instruction-mix statistics over a decoded batch.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Batch driver; construct with `Disassembler::new`.
pub use crate::disassembler::{Disassembler, disassemble};
/// One decoded instruction record.
pub use crate::isa::disasm::Instruction;
