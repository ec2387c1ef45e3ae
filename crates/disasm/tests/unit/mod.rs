//! # Unit Tests
//!
//! One module per library module.

/// Address arithmetic and error reporting.
pub mod common;

/// Configuration defaults and JSON deserialization.
pub mod config;


/// Field extraction, mnemonic tables, and single-word rendering.
pub mod isa;

/// Instruction-mix statistics.
pub mod stats;
