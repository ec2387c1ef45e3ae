//! Disassembly error definitions.
//!
//! Field extraction is total over any 32-bit word, so the only failure is a
//! code missing from the mnemonic tables. This module provides:
//! 1. **Per-word errors:** `DisasmError`, identifying the offending word and where it sits.
//! 2. **Batch errors:** `BatchError`, every per-word failure of one batch in input order.

use thiserror::Error;

use super::addr::InstAddr;

/// Failure to disassemble a single instruction word.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DisasmError {
    /// The primary opcode (op != 0) is not in the I-format table.
    #[error("unknown opcode {op:#04x} in word {word:#010x} at {address} (index {index})")]
    UnknownOpcode {
        /// Position of the word in the input batch.
        index: usize,
        /// Address the word was decoded at.
        address: InstAddr,
        /// Raw instruction word.
        word: u32,
        /// The unrecognised 6-bit primary opcode.
        op: u8,
    },

    /// The function code of an R-format word (op == 0) is not in the R-format table.
    #[error("unknown funct {funct:#04x} in word {word:#010x} at {address} (index {index})")]
    UnknownFunct {
        /// Position of the word in the input batch.
        index: usize,
        /// Address the word was decoded at.
        address: InstAddr,
        /// Raw instruction word.
        word: u32,
        /// The unrecognised 6-bit function code.
        funct: u8,
    },
}

impl DisasmError {
    /// Returns the batch index of the offending word.
    pub const fn index(&self) -> usize {
        match self {
            Self::UnknownOpcode { index, .. } | Self::UnknownFunct { index, .. } => *index,
        }
    }

    /// Returns the address the offending word was decoded at.
    pub const fn address(&self) -> InstAddr {
        match self {
            Self::UnknownOpcode { address, .. } | Self::UnknownFunct { address, .. } => *address,
        }
    }

    /// Returns the raw offending word.
    pub const fn word(&self) -> u32 {
        match self {
            Self::UnknownOpcode { word, .. } | Self::UnknownFunct { word, .. } => *word,
        }
    }

    /// Rebinds the error to a position inside a batch.
    pub(crate) const fn at_index(self, index: usize) -> Self {
        match self {
            Self::UnknownOpcode {
                address, word, op, ..
            } => Self::UnknownOpcode {
                index,
                address,
                word,
                op,
            },
            Self::UnknownFunct {
                address,
                word,
                funct,
                ..
            } => Self::UnknownFunct {
                index,
                address,
                word,
                funct,
            },
        }
    }
}

/// Every failure encountered while disassembling one batch.
///
/// A batch with any unknown word yields no output at all; the errors are
/// listed in input order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{} of {total} instruction(s) could not be disassembled{}", .errors.len(), render_list(.errors))]
pub struct BatchError {
    /// Number of words in the failed batch.
    pub total: usize,
    /// Per-word failures, ordered by index.
    pub errors: Vec<DisasmError>,
}

impl BatchError {
    /// Returns the per-word failures.
    pub fn errors(&self) -> &[DisasmError] {
        &self.errors
    }

    /// Returns the first failure of the batch, if any.
    pub fn first(&self) -> Option<&DisasmError> {
        self.errors.first()
    }
}

fn render_list(errors: &[DisasmError]) -> String {
    errors.iter().map(|e| format!("\n  {e}")).collect()
}
