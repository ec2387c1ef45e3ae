//! MIPS register naming.
//!
//! Registers render either by number (`$7`) or by their o32 ABI name
//! (`$a3`). The numeric form is the default output.

use std::fmt;

use serde::Deserialize;

use crate::common::constants::NUM_REGISTERS;

/// o32 ABI names for `$0`–`$31`.
const REG_NAMES: [&str; NUM_REGISTERS] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "fp",
    "ra",
];

/// Register x0 (hardwired zero).
pub const REG_ZERO: u8 = 0;
/// Register x29 (stack pointer, sp).
pub const REG_SP: u8 = 29;
/// Register x31 (return address, ra).
pub const REG_RA: u8 = 31;

/// How register operands are spelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegisterNames {
    /// `$<number>`, e.g. `$20`.
    #[default]
    Numeric,
    /// `$<abi name>`, e.g. `$s4`.
    Abi,
}

/// Returns the ABI name for a register index, or `"??"` out of range.
#[inline]
pub fn abi_name(idx: u8) -> &'static str {
    REG_NAMES.get(usize::from(idx)).copied().unwrap_or("??")
}

/// A register operand bound to a naming style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reg {
    /// Register index (0-31).
    pub index: u8,
    /// Spelling used by `Display`.
    pub names: RegisterNames,
}

impl Reg {
    /// Creates a register operand.
    #[inline]
    pub const fn new(index: u8, names: RegisterNames) -> Self {
        Self { index, names }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.names {
            RegisterNames::Numeric => write!(f, "${}", self.index),
            RegisterNames::Abi => write!(f, "${}", abi_name(self.index)),
        }
    }
}
