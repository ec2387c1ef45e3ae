//! Shared test infrastructure.

/// Instruction word builders.
pub mod builder;

/// Reference batches and logging setup.
pub mod harness;
