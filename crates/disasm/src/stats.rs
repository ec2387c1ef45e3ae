//! Disassembly statistics.
//!
//! Summarises a decoded batch:
//! 1. **Instruction mix:** Counts by format (register, load, store, branch).
//! 2. **Address span:** First and last decoded address.
//! 3. **Branches:** How many branch targets point backwards.

use std::fmt;

use crate::common::InstAddr;
use crate::isa::disasm::Instruction;
use crate::isa::mnemonic::{Format, Mnemonic};

/// Statistics over one disassembled batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisasmStats {
    /// Total instructions decoded.
    pub instructions: usize,
    /// Count of three-register R-format instructions.
    pub inst_register: usize,
    /// Count of `lw` instructions.
    pub inst_load: usize,
    /// Count of `sw` instructions.
    pub inst_store: usize,
    /// Count of `beq` / `bne` instructions.
    pub inst_branch: usize,
    /// Branches whose target is at or before the branch itself.
    pub backward_branches: usize,
    /// Address of the first decoded instruction.
    pub first_address: Option<InstAddr>,
    /// Address of the last decoded instruction.
    pub last_address: Option<InstAddr>,
}

impl DisasmStats {
    /// Builds statistics from a decoded batch.
    pub fn from_records(records: &[Instruction]) -> Self {
        let mut stats = Self::default();
        for inst in records {
            stats.record(inst);
        }
        stats
    }

    /// Accounts for one more decoded instruction.
    pub fn record(&mut self, inst: &Instruction) {
        self.instructions += 1;
        match inst.format() {
            Format::Register => self.inst_register += 1,
            Format::LoadStore if inst.mnemonic == Mnemonic::Lw => self.inst_load += 1,
            Format::LoadStore => self.inst_store += 1,
            Format::Branch => {
                self.inst_branch += 1;
                if inst.target.is_some_and(|t| t <= inst.address) {
                    self.backward_branches += 1;
                }
            }
        }
        if self.first_address.is_none() {
            self.first_address = Some(inst.address);
        }
        self.last_address = Some(inst.address);
    }

    fn percent(&self, count: usize) -> f64 {
        if self.instructions == 0 {
            0.0
        } else {
            (count as f64 / self.instructions as f64) * 100.0
        }
    }
}

impl fmt::Display for DisasmStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Disassembled {} instructions", self.instructions)?;
        if let (Some(first), Some(last)) = (self.first_address, self.last_address) {
            writeln!(f, "  span                   {first} .. {last}")?;
        }
        writeln!(
            f,
            "  inst.register          {} ({:.2}%)",
            self.inst_register,
            self.percent(self.inst_register)
        )?;
        writeln!(
            f,
            "  inst.load              {} ({:.2}%)",
            self.inst_load,
            self.percent(self.inst_load)
        )?;
        writeln!(
            f,
            "  inst.store             {} ({:.2}%)",
            self.inst_store,
            self.percent(self.inst_store)
        )?;
        writeln!(
            f,
            "  inst.branch            {} ({:.2}%)",
            self.inst_branch,
            self.percent(self.inst_branch)
        )?;
        write!(f, "  branch.backward        {}", self.backward_branches)
    }
}
