//! The elliptic-curve group law over 𝔽ₚ

use ecelgamal_common::math_common::{mod_add, mod_inverse, mod_mul, mod_neg, mod_sub, modulo};
use log::{debug, trace, warn};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::Rng;

use super::point::CurvePoint;
use crate::error::{validate, Result};

/// The group of points on y² = x³ + ax + b over 𝔽ₚ.
///
/// Instances are immutable; every operation is a pure function of its
/// arguments and the curve parameters, so a group can be shared freely
/// between threads.
///
/// `p` is assumed to be prime. This is not checked: with a composite
/// modulus a non-zero slope denominator may have no inverse, which is
/// treated as a broken invariant and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EllipticCurveGroup {
    a: BigInt,
    b: BigInt,
    p: BigInt,
    field_size: usize,
}

impl EllipticCurveGroup {
    /// Create the group for y² = x³ + ax + b (mod p).
    ///
    /// `a` and `b` are reduced into `[0, p)`, so negative coefficients
    /// such as `a = -3` are accepted. Fails only if `p < 2`.
    pub fn new(a: impl Into<BigInt>, b: impl Into<BigInt>, p: impl Into<BigInt>) -> Result<Self> {
        let p = p.into();
        validate::parameter(p >= BigInt::from(2u8), "curve modulus", "must be at least 2")?;

        let a = modulo(&a.into(), &p);
        let b = modulo(&b.into(), &p);
        let field_size = ((p.bits() + 7) / 8) as usize;

        debug!(
            "curve group y^2 = x^3 + {}x + {} over a {}-bit field",
            a,
            b,
            p.bits()
        );

        Ok(Self {
            a,
            b,
            p,
            field_size,
        })
    }

    /// The 'a' coefficient, reduced
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// The 'b' coefficient, reduced
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The field modulus
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// Byte length of a field element
    pub fn field_size(&self) -> usize {
        self.field_size
    }

    /// Whether 4a³ + 27b² ≢ 0 (mod p), i.e. the curve is non-singular.
    ///
    /// Informational only; no operation requires it.
    pub fn discriminant_is_nonzero(&self) -> bool {
        let a3 = mod_mul(&mod_mul(&self.a, &self.a, &self.p), &self.a, &self.p);
        let b2 = mod_mul(&self.b, &self.b, &self.p);
        let disc = mod_add(
            &mod_mul(&BigInt::from(4u8), &a3, &self.p),
            &mod_mul(&BigInt::from(27u8), &b2, &self.p),
            &self.p,
        );
        !disc.is_zero()
    }

    /// Check that a point belongs to the group.
    ///
    /// The identity always does. An affine point does iff both coordinates
    /// are reduced into `[0, p)` and y² − x³ − ax − b ≡ 0 (mod p).
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        match point {
            CurvePoint::Identity => true,
            CurvePoint::Affine { x, y } => {
                if !self.is_reduced(x) || !self.is_reduced(y) {
                    return false;
                }
                let lhs = mod_mul(y, y, &self.p);
                let x3 = mod_mul(&mod_mul(x, x, &self.p), x, &self.p);
                let rhs = mod_add(
                    &mod_add(&x3, &mod_mul(&self.a, x, &self.p), &self.p),
                    &self.b,
                    &self.p,
                );
                mod_sub(&lhs, &rhs, &self.p).is_zero()
            }
        }
    }

    /// Check curve membership, reporting failure as an error.
    pub fn validate_point(&self, point: &CurvePoint, context: &'static str) -> Result<()> {
        let on_curve = self.is_on_curve(point);
        if !on_curve {
            warn!("{}: rejected point {} not on the curve", context, point);
        }
        validate::on_curve(on_curve, context)
    }

    /// Build a validated point from possibly unreduced coordinates.
    pub fn point(&self, x: impl Into<BigInt>, y: impl Into<BigInt>) -> Result<CurvePoint> {
        let point = CurvePoint::Affine {
            x: modulo(&x.into(), &self.p),
            y: modulo(&y.into(), &self.p),
        };
        self.validate_point(&point, "EllipticCurveGroup::point")?;
        Ok(point)
    }

    /// Negate a point: (x, y) ↦ (x, −y mod p), O ↦ O
    pub fn negate(&self, point: &CurvePoint) -> CurvePoint {
        match point {
            CurvePoint::Identity => CurvePoint::Identity,
            CurvePoint::Affine { x, y } => CurvePoint::Affine {
                x: x.clone(),
                y: mod_neg(y, &self.p),
            },
        }
    }

    /// Add two points (group law).
    ///
    /// A vertical chord or tangent (zero slope denominator) yields the
    /// identity. Inputs are assumed to be members of this group.
    pub fn add(&self, lhs: &CurvePoint, rhs: &CurvePoint) -> CurvePoint {
        let ((x1, y1), (x2, y2)) = match (lhs, rhs) {
            (CurvePoint::Identity, _) => return rhs.clone(),
            (_, CurvePoint::Identity) => return lhs.clone(),
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        let (numerator, denominator) = if lhs == rhs {
            // Tangent: λ = (3x₁² + a) / 2y₁
            let three_x1_sq = mod_mul(&BigInt::from(3u8), &mod_mul(x1, x1, &self.p), &self.p);
            (
                mod_add(&three_x1_sq, &self.a, &self.p),
                mod_add(y1, y1, &self.p),
            )
        } else {
            // Chord: λ = (y₂ − y₁) / (x₂ − x₁)
            (mod_sub(y2, y1, &self.p), mod_sub(x2, x1, &self.p))
        };

        if denominator.is_zero() {
            trace!("vertical line through {} and {}, sum is O", lhs, rhs);
            return CurvePoint::Identity;
        }

        let inv = mod_inverse(&denominator, &self.p)
            .expect("non-zero denominator is invertible modulo a prime");
        let lambda = mod_mul(&numerator, &inv, &self.p);

        // x₃ = λ² − x₁ − x₂, y₃ = λ(x₁ − x₃) − y₁
        let x3 = mod_sub(&mod_sub(&mod_mul(&lambda, &lambda, &self.p), x1, &self.p), x2, &self.p);
        let y3 = mod_sub(&mod_mul(&lambda, &(x1 - &x3), &self.p), y1, &self.p);

        CurvePoint::Affine { x: x3, y: y3 }
    }

    /// Double a point: 2P
    pub fn double(&self, point: &CurvePoint) -> CurvePoint {
        self.add(point, point)
    }

    /// Subtract: P − Q = P + (−Q)
    pub fn sub(&self, lhs: &CurvePoint, rhs: &CurvePoint) -> CurvePoint {
        self.add(lhs, &self.negate(rhs))
    }

    /// Scalar multiplication n·P by double-and-add.
    ///
    /// Negative scalars are handled as (−n)·(−P). Runs in O(log |n|) group
    /// operations and is not constant time.
    pub fn scalar_multiply(&self, point: &CurvePoint, n: &BigInt) -> CurvePoint {
        if n.is_negative() {
            return self.scalar_multiply(&self.negate(point), &-n);
        }
        if n.is_zero() || point.is_identity() {
            return CurvePoint::Identity;
        }

        trace!("scalar multiplication with a {}-bit scalar", n.bits());

        let mut k: BigUint = n.magnitude().clone();
        let mut result = CurvePoint::Identity;
        let mut temp = point.clone();
        while !k.is_zero() {
            if k.is_odd() {
                result = self.add(&result, &temp);
            }
            temp = self.double(&temp);
            k >>= 1u32;
        }
        result
    }

    /// Draw a scalar uniformly from `[1, p)`.
    pub fn random_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInt {
        // p >= 2 is checked at construction, so the range is never empty
        rng.gen_bigint_range(&BigInt::one(), &self.p)
    }

    fn is_reduced(&self, v: &BigInt) -> bool {
        !v.is_negative() && v < &self.p
    }
}
