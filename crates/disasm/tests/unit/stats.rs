//! # Statistics Tests
//!
//! Instruction-mix counts and the printed summary.

use mips_disasm::common::InstAddr;
use mips_disasm::stats::DisasmStats;
use mips_disasm::{Config, Disassembler};

use crate::common::harness::{PROJECT_START, PROJECT_WORDS};

fn project_stats() -> DisasmStats {
    let records = Disassembler::new(Config::default().with_start_address(PROJECT_START))
        .disassemble(&PROJECT_WORDS)
        .unwrap();
    DisasmStats::from_records(&records)
}

#[test]
fn project_instruction_mix() {
    let stats = project_stats();
    assert_eq!(stats.instructions, 11);
    assert_eq!(stats.inst_register, 5);
    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.inst_store, 2);
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.backward_branches, 1);
    assert_eq!(stats.first_address, Some(InstAddr::new(0x9A040)));
    assert_eq!(stats.last_address, Some(InstAddr::new(0x9A068)));
}

#[test]
fn empty_stats() {
    let stats = DisasmStats::from_records(&[]);
    assert_eq!(stats, DisasmStats::default());
    let text = stats.to_string();
    assert!(text.starts_with("Disassembled 0 instructions"));
    assert!(!text.contains("span"));
    assert!(text.contains("inst.register          0 (0.00%)"));
}

#[test]
fn summary_text() {
    let text = project_stats().to_string();
    assert!(text.starts_with("Disassembled 11 instructions\n"));
    assert!(text.contains("span                   0x9a040 .. 0x9a068"));
    assert!(text.contains("inst.load              2 (18.18%)"));
    assert!(text.contains("inst.branch            2 (18.18%)"));
    assert!(text.ends_with("branch.backward        1"));
}
