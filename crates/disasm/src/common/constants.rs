//! Common constants used throughout the disassembler.

/// Width of one MIPS instruction in bytes.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Shift converting a branch word offset into a byte displacement.
pub const BRANCH_OFFSET_SHIFT: u32 = 2;

/// Base of the conventional MIPS user text segment.
pub const TEXT_SEGMENT_BASE: u32 = 0x0040_0000;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;
