//! Mnemonic tables.
//!
//! Two separate lookups: the R-format table keyed by function code, used when
//! the primary opcode is zero, and the I-format table keyed by primary
//! opcode. The numeric domains overlap (e.g. `0b100100` is `and` as a funct
//! but `lbu` as an opcode), so the tables must never be merged.

use std::fmt;

use crate::isa::mips32::{funct, opcodes};

/// Operand layout of a supported instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Three-register R-format: `rd, rs, rt`.
    Register,
    /// Memory access: `rt, offset(rs)`.
    LoadStore,
    /// PC-relative conditional branch: `rs, rt, address target`.
    Branch,
}

/// Every mnemonic the disassembler can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Bitwise AND.
    And,
    /// Divide.
    Div,
    /// Bitwise OR.
    Or,
    /// Set on less than.
    Slt,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Branch on equal.
    Beq,
    /// Branch on not equal.
    Bne,
}

impl Mnemonic {
    /// All supported mnemonics, R-format first.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Div,
        Self::Or,
        Self::Slt,
        Self::Lw,
        Self::Sw,
        Self::Beq,
        Self::Bne,
    ];

    /// Looks up an R-format mnemonic by function code.
    pub const fn from_funct(code: u8) -> Option<Self> {
        match code {
            funct::ADD => Some(Self::Add),
            funct::SUB => Some(Self::Sub),
            funct::AND => Some(Self::And),
            funct::DIV => Some(Self::Div),
            funct::OR => Some(Self::Or),
            funct::SLT => Some(Self::Slt),
            _ => None,
        }
    }

    /// Looks up an I-format mnemonic by primary opcode.
    ///
    /// `OP_SPECIAL` is never an I-format opcode and yields `None`.
    pub const fn from_opcode(code: u8) -> Option<Self> {
        match code {
            opcodes::OP_LW => Some(Self::Lw),
            opcodes::OP_SW => Some(Self::Sw),
            opcodes::OP_BEQ => Some(Self::Beq),
            opcodes::OP_BNE => Some(Self::Bne),
            _ => None,
        }
    }

    /// Returns the operand layout used to render this mnemonic.
    pub const fn format(self) -> Format {
        match self {
            Self::Add | Self::Sub | Self::And | Self::Div | Self::Or | Self::Slt => {
                Format::Register
            }
            Self::Lw | Self::Sw => Format::LoadStore,
            Self::Beq | Self::Bne => Format::Branch,
        }
    }

    /// Returns the `(op, funct)` pair that encodes this mnemonic.
    ///
    /// I-format mnemonics report a zero funct; the low bits carry the offset.
    pub const fn encoding(self) -> (u8, u8) {
        match self {
            Self::Add => (opcodes::OP_SPECIAL, funct::ADD),
            Self::Sub => (opcodes::OP_SPECIAL, funct::SUB),
            Self::And => (opcodes::OP_SPECIAL, funct::AND),
            Self::Div => (opcodes::OP_SPECIAL, funct::DIV),
            Self::Or => (opcodes::OP_SPECIAL, funct::OR),
            Self::Slt => (opcodes::OP_SPECIAL, funct::SLT),
            Self::Lw => (opcodes::OP_LW, 0),
            Self::Sw => (opcodes::OP_SW, 0),
            Self::Beq => (opcodes::OP_BEQ, 0),
            Self::Bne => (opcodes::OP_BNE, 0),
        }
    }

    /// Returns the assembly mnemonic text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Div => "div",
            Self::Or => "or",
            Self::Slt => "slt",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
