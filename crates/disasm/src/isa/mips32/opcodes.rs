//! MIPS32 Primary Opcodes.
//!
//! Defines the primary opcodes (bits 31-26) understood by the disassembler.

/// SPECIAL: R-format instructions, operation selected by the function code.
pub const OP_SPECIAL: u8 = 0b000000;

/// Branch on Equal (BEQ).
pub const OP_BEQ: u8 = 0b000100;

/// Branch on Not Equal (BNE).
pub const OP_BNE: u8 = 0b000101;

/// Load Word (LW).
pub const OP_LW: u8 = 0b100011;

/// Store Word (SW).
pub const OP_SW: u8 = 0b101011;
