//! Common component tests.

/// Wrapping arithmetic on instruction addresses.
pub mod address_arithmetic;
