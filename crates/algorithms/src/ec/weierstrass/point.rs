//! Curve point representation

use core::fmt;
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on a short Weierstrass curve, or the group identity.
///
/// Coordinates of an `Affine` point produced by [`EllipticCurveGroup`] are
/// always reduced into `[0, p)`, so structural equality is group equality.
///
/// [`EllipticCurveGroup`]: super::EllipticCurveGroup
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurvePoint {
    /// The point at infinity O
    #[default]
    Identity,
    /// Affine coordinates (x, y)
    Affine {
        /// x-coordinate
        x: BigInt,
        /// y-coordinate
        y: BigInt,
    },
}

impl CurvePoint {
    /// The identity (point at infinity)
    pub fn identity() -> Self {
        CurvePoint::Identity
    }

    /// Build an affine point without validation.
    ///
    /// Use [`EllipticCurveGroup::point`](super::EllipticCurveGroup::point) to
    /// get a reduced, validated point.
    pub fn affine(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        CurvePoint::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Identity)
    }

    /// x-coordinate, `None` for the identity
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            CurvePoint::Identity => None,
            CurvePoint::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` for the identity
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            CurvePoint::Identity => None,
            CurvePoint::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurvePoint::Identity => write!(f, "O"),
            CurvePoint::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
