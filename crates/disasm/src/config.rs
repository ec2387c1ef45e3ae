//! Configuration for the disassembler.
//!
//! Configuration is supplied as JSON or built with `Config::default()`.
//! Every field is optional in JSON; missing fields take the defaults below.

use serde::Deserialize;

use crate::common::constants::TEXT_SEGMENT_BASE;
use crate::isa::abi::RegisterNames;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Address of the first word of a batch (defaults to the MIPS text segment base).
    #[serde(default = "Config::default_start_address")]
    pub start_address: u32,

    /// Register operand spelling.
    #[serde(default)]
    pub register_names: RegisterNames,
}

impl Config {
    /// Returns the default load address of a batch.
    const fn default_start_address() -> u32 {
        TEXT_SEGMENT_BASE
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON, unknown register
    /// styles, or out-of-range addresses.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns a copy of this configuration with a different start address.
    #[must_use]
    pub const fn with_start_address(mut self, start_address: u32) -> Self {
        self.start_address = start_address;
        self
    }

    /// Returns a copy of this configuration with a different register style.
    #[must_use]
    pub const fn with_register_names(mut self, register_names: RegisterNames) -> Self {
        self.register_names = register_names;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_address: Self::default_start_address(),
            register_names: RegisterNames::default(),
        }
    }
}
