//! MIPS32 SPECIAL Function Codes.
//!
//! Defines the function codes (bits 5-0) of the R-format instructions
//! understood by the disassembler. Only meaningful when the primary opcode
//! is `OP_SPECIAL`.

/// Divide (DIV).
pub const DIV: u8 = 0b011010;

/// Add (ADD).
pub const ADD: u8 = 0b100000;

/// Subtract (SUB).
pub const SUB: u8 = 0b100010;

/// Bitwise AND (AND).
pub const AND: u8 = 0b100100;

/// Bitwise OR (OR).
pub const OR: u8 = 0b100101;

/// Set on Less Than (SLT).
pub const SLT: u8 = 0b101010;
