//! Elliptic Curve Primitives
//!
//! This module provides arithmetic on short Weierstrass curves over prime
//! fields whose parameters are chosen at runtime. It is the foundation for
//! the EC-ElGamal scheme in the pke crate.

pub mod weierstrass;

// Re-export types with consistent naming scheme.
pub use weierstrass::{load_domain, CurvePoint, EllipticCurveGroup, NamedCurve};
