//! Public API traits and types for the ecelgamal library
//!
//! This crate provides the public API surface for the ecelgamal ecosystem:
//! the shared error type and the traits implemented by the encryption scheme.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{Pke, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{pke, serialize};
