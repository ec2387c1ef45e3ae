//! Instruction Disassembler for the MIPS32 integer subset.
//!
//! Converts one 32-bit instruction word at a known address into an
//! [`Instruction`] record whose `Display` form is the listing line:
//!
//! ```text
//! 0x9a040 add $7, $5, $6
//! 0x9a044 lw $7, 4($20)
//! 0x9a048 beq $21, $9, address 0x9a058
//! ```
//!
//! # Usage
//!
//! ```
//! use mips_disasm::common::InstAddr;
//! use mips_disasm::isa::disasm::disassemble_word;
//!
//! let inst = disassemble_word(0x00A6_3820, InstAddr::new(0x9A040)).unwrap();
//! assert_eq!(inst.to_string(), "0x9a040 add $7, $5, $6");
//! ```

use std::fmt;

use crate::common::constants::BRANCH_OFFSET_SHIFT;
use crate::common::{DisasmError, InstAddr};
use crate::isa::abi::{Reg, RegisterNames};
use crate::isa::decode::decode;
use crate::isa::instruction::Decoded;
use crate::isa::mnemonic::{Format, Mnemonic};

/// One disassembled instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Address the word was decoded at.
    pub address: InstAddr,
    /// Raw instruction word.
    pub raw: u32,
    /// Resolved mnemonic.
    pub mnemonic: Mnemonic,
    /// Rendered operand text, e.g. `$7, 4($20)`.
    pub operands: String,
    /// Absolute target, for branches only.
    pub target: Option<InstAddr>,
}

impl Instruction {
    /// Returns the operand layout of this instruction.
    pub const fn format(&self) -> Format {
        self.mnemonic.format()
    }

    /// Returns the taken-branch target, or `None` for non-branches.
    pub const fn branch_target(&self) -> Option<InstAddr> {
        self.target
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.address, self.mnemonic, self.operands)
    }
}

/// Computes the target of a PC-relative branch.
///
/// The word offset is relative to the instruction after the branch:
/// `address + 4 + offset * 4`, wrapping modulo 2^32.
#[inline]
pub const fn branch_target(address: InstAddr, offset: i32) -> InstAddr {
    address.next().offset(offset << BRANCH_OFFSET_SHIFT)
}

/// Resolves the mnemonic of a decoded word.
///
/// R-format words (op == 0) consult the funct table, everything else the
/// opcode table. The returned error carries index 0; batch callers rebind it.
pub fn lookup(d: &Decoded, address: InstAddr) -> Result<Mnemonic, DisasmError> {
    if d.is_register_format() {
        Mnemonic::from_funct(d.funct).ok_or(DisasmError::UnknownFunct {
            index: 0,
            address,
            word: d.raw,
            funct: d.funct,
        })
    } else {
        Mnemonic::from_opcode(d.op).ok_or(DisasmError::UnknownOpcode {
            index: 0,
            address,
            word: d.raw,
            op: d.op,
        })
    }
}

/// Disassembles a single word at `address` using numeric register names.
///
/// # Errors
///
/// Returns [`DisasmError`] if the opcode or function code is not supported.
pub fn disassemble_word(inst: u32, address: InstAddr) -> Result<Instruction, DisasmError> {
    disassemble_word_with(inst, address, RegisterNames::Numeric)
}

/// Disassembles a single word at `address` with the given register style.
///
/// # Errors
///
/// Returns [`DisasmError`] if the opcode or function code is not supported.
pub fn disassemble_word_with(
    inst: u32,
    address: InstAddr,
    names: RegisterNames,
) -> Result<Instruction, DisasmError> {
    let d = decode(inst);
    let mnemonic = lookup(&d, address)?;

    let rs = Reg::new(d.rs, names);
    let rt = Reg::new(d.rt, names);

    let (operands, target) = match mnemonic.format() {
        Format::Register => {
            let rd = Reg::new(d.rd, names);
            (format!("{rd}, {rs}, {rt}"), None)
        }
        Format::LoadStore => (format!("{rt}, {}({rs})", d.offset), None),
        Format::Branch => {
            let target = branch_target(address, d.offset);
            (format!("{rs}, {rt}, address {target}"), Some(target))
        }
    };

    Ok(Instruction {
        address,
        raw: inst,
        mnemonic,
        operands,
        target,
    })
}
