//! Elliptic-curve primitives for the ecelgamal library
//!
//! This crate provides the group of points on a short Weierstrass curve
//! y² = x³ + ax + b over a prime field, with curve parameters supplied at
//! runtime as arbitrary-precision integers.
//!
//! The arithmetic is written for correctness, not side-channel resistance:
//! scalar multiplication branches on scalar bits.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{load_domain, CurvePoint, EllipticCurveGroup, NamedCurve};
