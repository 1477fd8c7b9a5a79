//! Public Key Encryption schemes for the ecelgamal library.
//!
//! Currently a single scheme: EC-ElGamal over a runtime-configured short
//! Weierstrass curve. Messages are curve points; the scheme is
//! unauthenticated and malleable.

pub mod elgamal;
pub mod error;

// Re-export key items
pub use elgamal::{decrypt, encrypt, generate_keys, Ciphertext, EcElGamal, KeyPair, PrivateKey};
pub use error::{Error, Result};
