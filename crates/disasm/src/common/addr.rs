//! Instruction address type.
//!
//! MIPS32 code addresses are 32 bits wide. All arithmetic on them wraps
//! modulo 2^32, matching fixed-width program-counter arithmetic.

use std::fmt;

use crate::common::constants::INSTRUCTION_BYTES;

/// A byte address of an instruction in the 32-bit MIPS address space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstAddr(pub u32);

impl InstAddr {
    /// Creates a new instruction address from a raw 32-bit value.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Returns the address of the `index`-th instruction of a batch
    /// starting at `self`.
    ///
    /// The result is `self + 4 * index`, wrapped modulo 2^32. Only the
    /// low 32 bits of `index` take part, which is exact under wrapping.
    #[inline]
    pub const fn nth(self, index: usize) -> Self {
        Self(
            self.0
                .wrapping_add((index as u32).wrapping_mul(INSTRUCTION_BYTES)),
        )
    }

    /// Returns the address of the instruction that follows this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(INSTRUCTION_BYTES))
    }

    /// Adds a signed byte displacement, wrapping modulo 2^32.
    #[inline]
    pub const fn offset(self, bytes: i32) -> Self {
        Self(self.0.wrapping_add_signed(bytes))
    }
}

impl From<u32> for InstAddr {
    fn from(addr: u32) -> Self {
        Self(addr)
    }
}

impl fmt::Display for InstAddr {
    /// Lowercase hex with a `0x` prefix and no zero padding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for InstAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
