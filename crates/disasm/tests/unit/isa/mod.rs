//! # ISA Unit Tests
//!
//! Field extraction, mnemonic lookup, register naming, and single-word
//! rendering.
