//! Short Weierstrass curves over prime fields
//!
//! Curve equation: y² = x³ + ax + b over 𝔽ₚ, with (a, b, p) supplied at
//! runtime. Points are kept in affine coordinates with an explicit identity
//! variant.
//!
//! Implements:
//! - the chord-and-tangent group law with the zero-denominator ⇒ O rule,
//! - double-and-add scalar multiplication (negative scalars via −P),
//! - uncompressed point encoding with on-curve validation on decode.
//!
//! Arithmetic is variable time.

mod encoding;
mod group;
mod point;

pub use encoding::{IDENTITY_TAG, UNCOMPRESSED_TAG};
pub use group::EllipticCurveGroup;
pub use point::CurvePoint;

use crate::error::{validate, Error, Result};
use ecelgamal_params::traditional::weierstrass::CurveDomain;
use log::debug;
use num_bigint::{BigInt, RandBigInt};
use num_traits::One;
use rand::Rng;

/// A curve group together with its agreed base point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedCurve {
    /// Curve name from the domain parameters
    pub name: &'static str,
    /// The group
    pub group: EllipticCurveGroup,
    /// The base point G, validated on the curve
    pub base_point: CurvePoint,
    /// Order of G, where the domain parameters provide it
    pub order: Option<BigInt>,
}

/// Build a group and base point from static domain parameters.
///
/// Fails if any value is not valid hexadecimal or G is not on the curve.
pub fn load_domain(domain: &CurveDomain) -> Result<NamedCurve> {
    let group = EllipticCurveGroup::new(
        parse_hex(domain.a, "curve coefficient a")?,
        parse_hex(domain.b, "curve coefficient b")?,
        parse_hex(domain.p, "curve modulus")?,
    )?;
    let base_point = group.point(
        parse_hex(domain.g_x, "base point x")?,
        parse_hex(domain.g_y, "base point y")?,
    )?;
    let order = domain
        .order
        .map(|n| parse_hex(n, "base point order"))
        .transpose()?;

    debug!("loaded curve domain {}", domain.name);

    Ok(NamedCurve {
        name: domain.name,
        group,
        base_point,
        order,
    })
}

/// Draw a scalar uniformly from `[1, bound)`; `bound` must be at least 2.
pub fn random_scalar_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigInt) -> Result<BigInt> {
    validate::parameter(
        bound > &BigInt::one(),
        "scalar bound",
        "must be at least 2",
    )?;
    Ok(rng.gen_bigint_range(&BigInt::one(), bound))
}

fn parse_hex(value: &'static str, name: &'static str) -> Result<BigInt> {
    BigInt::parse_bytes(value.as_bytes(), 16)
        .ok_or_else(|| Error::param(name, "not a hexadecimal integer"))
}
