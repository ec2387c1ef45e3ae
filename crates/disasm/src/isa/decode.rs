//! MIPS32 instruction decoder.
//!
//! Splits a 32-bit word into its `Decoded` fields. Decoding never fails:
//! every bit pattern yields a field set. Whether the opcode is one we can
//! name is decided later by the mnemonic tables.

use crate::isa::instruction::{Decoded, InstructionBits};

/// Total width of a MIPS instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Decodes a MIPS instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure with every field extracted and the offset
/// sign-extended.
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        op: inst.op(),
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        shamt: inst.shamt(),
        funct: inst.funct(),
        offset: inst.offset(),
    }
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// Bits of `val` above `bits` are discarded. `bits` must be in `1..=32`.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
#[inline]
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (val << shift) as i32 >> shift
}
