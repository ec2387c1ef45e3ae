//! Batch disassembly.
//!
//! Decodes an ordered list of words into an ordered list of records. The
//! address of word `i` is derived from its position (`start + 4*i`), never
//! from a running counter, so each word decodes independently of the rest.
//!
//! A batch either succeeds completely or fails with every unknown word
//! listed in a [`BatchError`]; partial listings are never returned.

use tracing::{debug, trace, warn};

use crate::common::{BatchError, InstAddr};
use crate::config::Config;
use crate::isa::disasm::{Instruction, disassemble_word_with};

/// Batch disassembler bound to a configuration.
#[derive(Clone, Debug, Default)]
pub struct Disassembler {
    config: Config,
}

impl Disassembler {
    /// Creates a disassembler with the given configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Disassembles `words` starting at the configured start address.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError`] listing every unsupported word.
    pub fn disassemble(&self, words: &[u32]) -> Result<Vec<Instruction>, BatchError> {
        self.disassemble_at(words, self.config.start_address)
    }

    /// Disassembles `words` with the first word at `start_address`.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError`] listing every unsupported word.
    pub fn disassemble_at(
        &self,
        words: &[u32],
        start_address: u32,
    ) -> Result<Vec<Instruction>, BatchError> {
        let base = InstAddr::new(start_address);
        debug!(count = words.len(), start = %base, "disassembling batch");

        let mut records = Vec::with_capacity(words.len());
        let mut errors = Vec::new();

        for (index, &word) in words.iter().enumerate() {
            let address = base.nth(index);
            match disassemble_word_with(word, address, self.config.register_names) {
                Ok(inst) => {
                    trace!(index, line = %inst, "decoded");
                    records.push(inst);
                }
                Err(e) => {
                    let e = e.at_index(index);
                    warn!(index, %address, "{e}");
                    errors.push(e);
                }
            }
        }

        if errors.is_empty() {
            Ok(records)
        } else {
            Err(BatchError {
                total: words.len(),
                errors,
            })
        }
    }

    /// Disassembles `words` at the configured start address into text lines.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError`] listing every unsupported word.
    pub fn listing(&self, words: &[u32]) -> Result<Vec<String>, BatchError> {
        Ok(self
            .disassemble(words)?
            .iter()
            .map(ToString::to_string)
            .collect())
    }
}

/// Disassembles `instructions` with the first word at `start_address`.
///
/// Returns one line per word, in input order, using numeric register names.
///
/// # Errors
///
/// Returns [`BatchError`] listing every unsupported word.
///
/// # Examples
///
/// ```
/// let lines = mips_disasm::disassemble(&[0x00A6_3820, 0x8E87_0004], 0x9A040).unwrap();
/// assert_eq!(lines, ["0x9a040 add $7, $5, $6", "0x9a044 lw $7, 4($20)"]);
/// ```
pub fn disassemble(instructions: &[u32], start_address: u32) -> Result<Vec<String>, BatchError> {
    Disassembler::new(Config::default().with_start_address(start_address)).listing(instructions)
}
