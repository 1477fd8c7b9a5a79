//! # ecelgamal
//!
//! Elliptic-curve arithmetic over short Weierstrass curves
//! y² = x³ + ax + b (mod p) and EC-ElGamal encryption of curve points.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecelgamal = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `pke` (default): the EC-ElGamal scheme
//! - `serde`: `Serialize`/`Deserialize` for points and ciphertexts
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecelgamal-api`]: Error type and the `Pke` trait
//! - [`ecelgamal-common`]: Modular arithmetic and zeroizing secret buffers
//! - [`ecelgamal-params`]: Named curve domain parameters
//! - [`ecelgamal-algorithms`]: Curve points and the group law
//! - [`ecelgamal-pke`]: EC-ElGamal
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "pke")]
//! # fn main() -> ecelgamal::Result<()> {
//! use ecelgamal::prelude::*;
//! use ecelgamal::params::traditional::weierstrass::REFERENCE_CURVE;
//!
//! let scheme = EcElGamal::from_domain(&REFERENCE_CURVE)?;
//! let keys = scheme.keypair_from_scalar(&BigInt::from(7))?;
//! let message = CurvePoint::affine(6, 3);
//! let ciphertext = scheme.encrypt_with_nonce(&keys.public_key, &message, &BigInt::from(9))?;
//! assert_eq!(scheme.decrypt(&keys.private_key, &ciphertext)?, message);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "pke"))]
//! # fn main() {}
//! ```

// Core re-exports (always available)
pub use ecelgamal_algorithms as algorithms;
pub use ecelgamal_api as api;
pub use ecelgamal_common as common;
pub use ecelgamal_params as params;

// Feature-gated re-exports
#[cfg(feature = "pke")]
pub use ecelgamal_pke as pke;

pub use api::{Error, Result};
pub use num_bigint;

/// Common imports for ecelgamal users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{Pke, SerializeSecret};

    // Curve arithmetic
    pub use num_bigint::BigInt;
    pub use crate::algorithms::{load_domain, CurvePoint, EllipticCurveGroup, NamedCurve};

    // Re-export security types
    pub use crate::common::SecretVec;

    #[cfg(feature = "pke")]
    pub use crate::pke::{Ciphertext, EcElGamal, KeyPair, PrivateKey};
}
