//! MIPS32 integer subset.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26) of the supported I-format instructions.
//! - `funct`: Function codes (bits 5-0) of the supported R-format instructions.

/// Function code definitions for R-format (SPECIAL) operations.
pub mod funct;

/// Primary opcode definitions.
pub mod opcodes;
