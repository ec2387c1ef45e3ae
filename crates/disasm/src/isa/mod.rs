//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code constants, field extraction, and
//! rendering logic for the supported MIPS32 subset.
//!
//! # Supported Instructions
//!
//! * R-format: `add`, `sub`, `and`, `div`, `or`, `slt`
//! * I-format load/store: `lw`, `sw`
//! * I-format branch: `beq`, `bne`

/// Register name mappings and naming styles.
pub mod abi;

/// Field decoding and sign extension.
pub mod decode;

/// Single-word disassembly into listing records.
pub mod disasm;

/// Field extraction trait and the decoded field set.
pub mod instruction;

/// MIPS32 opcode and function-code constants.
pub mod mips32;

/// Mnemonic enum and the R-format / I-format lookup tables.
pub mod mnemonic;
