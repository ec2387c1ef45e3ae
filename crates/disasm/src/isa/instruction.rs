//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction functions and the `Decoded` structure for the
//! MIPS32 R-format and I-format encodings:
//!
//! ```text
//! R: op[31:26] | rs[25:21] | rt[20:16] | rd[15:11] | shamt[10:6] | funct[5:0]
//! I: op[31:26] | rs[25:21] | rt[20:16] | offset[15:0]
//! ```
//!
//! The I-format offset occupies the same bits as rd, shamt and funct. Each
//! field is an independent view of the word.

use crate::isa::decode::sign_extend;

/// Bit shift for the primary opcode field (bits 26-31).
pub const OP_SHIFT: u32 = 26;
/// Bit mask for the primary opcode field (6 bits).
pub const OP_MASK: u32 = 0x3F;
/// Bit shift for the first source register field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the second source / target register field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the destination register field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit shift for the shift-amount field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register or shift-amount field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the function code field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate / offset field (bits 0-15).
pub const OFFSET_MASK: u32 = 0xFFFF;
/// Width of the offset field in bits.
pub const OFFSET_BITS: u32 = 16;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 26-31).
    ///
    /// Zero selects the R-format; anything else names an I-format operation.
    fn op(&self) -> u8;

    /// Extracts the first source register (bits 21-25).
    fn rs(&self) -> u8;

    /// Extracts the second source / target register (bits 16-20).
    fn rt(&self) -> u8;

    /// Extracts the destination register of an R-format word (bits 11-15).
    fn rd(&self) -> u8;

    /// Extracts the shift amount (bits 6-10).
    fn shamt(&self) -> u8;

    /// Extracts the R-format function code (bits 0-5).
    fn funct(&self) -> u8;

    /// Extracts the raw, unsigned 16-bit offset (bits 0-15).
    fn imm16(&self) -> u16;

    /// Extracts the 16-bit offset sign-extended to `i32`.
    ///
    /// The result lies in `-32768..=32767`.
    fn offset(&self) -> i32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn op(&self) -> u8 {
        ((self >> OP_SHIFT) & OP_MASK) as u8
    }

    #[inline(always)]
    fn rs(&self) -> u8 {
        ((self >> RS_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rt(&self) -> u8 {
        ((self >> RT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> RD_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn shamt(&self) -> u8 {
        ((self >> SHAMT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn funct(&self) -> u8 {
        (self & FUNCT_MASK) as u8
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & OFFSET_MASK) as u16
    }

    #[inline(always)]
    fn offset(&self) -> i32 {
        sign_extend(self & OFFSET_MASK, OFFSET_BITS)
    }
}

/// Decoded instruction structure containing all extracted fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Primary opcode.
    pub op: u8,
    /// First source register index.
    pub rs: u8,
    /// Second source / target register index.
    pub rt: u8,
    /// Destination register index.
    pub rd: u8,
    /// Shift amount. No supported mnemonic reads it.
    pub shamt: u8,
    /// R-format function code.
    pub funct: u8,
    /// Sign-extended 16-bit offset.
    pub offset: i32,
}

impl Decoded {
    /// Returns true if the word uses the R-format (op == 0).
    #[inline]
    pub const fn is_register_format(&self) -> bool {
        self.op == 0
    }
}
