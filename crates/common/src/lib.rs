//! Common implementations and shared functionality for the ecelgamal library
//!
//! This crate provides the modular arithmetic used by the curve group and
//! the zeroizing containers used for private scalars.

pub mod math_common;
pub mod security;

// Re-export core security types
pub use security::SecretVec;
