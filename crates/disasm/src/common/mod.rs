//! Common types shared by the decoder and the batch driver.
//!
//! 1. **Address Types:** A wrapping 32-bit instruction address.
//! 2. **Constants:** Instruction width, branch scaling, default load address.
//! 3. **Error Handling:** Per-word and per-batch disassembly errors.

/// Instruction address type.
pub mod addr;

/// Common constants used throughout the disassembler.
pub mod constants;

/// Error types for unknown opcodes and failed batches.
pub mod error;

pub use addr::InstAddr;
pub use error::{BatchError, DisasmError};
