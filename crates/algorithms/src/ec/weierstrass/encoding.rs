//! Byte encoding of curve points
//!
//! Identity is a single `0x00` byte. An affine point is `0x04 ∥ x ∥ y`,
//! each coordinate big-endian and left-padded to the field size.
//! Compressed encodings are not supported.

use num_bigint::{BigInt, Sign};

use super::group::EllipticCurveGroup;
use super::point::CurvePoint;
use crate::error::{validate, Error, Result};

/// Tag byte of the identity encoding
pub const IDENTITY_TAG: u8 = 0x00;

/// Tag byte of an uncompressed affine point
pub const UNCOMPRESSED_TAG: u8 = 0x04;

impl EllipticCurveGroup {
    /// Length in bytes of an encoded affine point on this curve
    pub fn encoded_point_len(&self) -> usize {
        1 + 2 * self.field_size()
    }

    /// Serialize a point: `0x00` for O, else `0x04 ∥ x ∥ y`
    pub fn encode_point(&self, point: &CurvePoint) -> Vec<u8> {
        match point {
            CurvePoint::Identity => vec![IDENTITY_TAG],
            CurvePoint::Affine { x, y } => {
                let mut out = Vec::with_capacity(self.encoded_point_len());
                out.push(UNCOMPRESSED_TAG);
                out.extend_from_slice(&self.coordinate_bytes(x));
                out.extend_from_slice(&self.coordinate_bytes(y));
                out
            }
        }
    }

    /// Deserialize and validate a point produced by [`encode_point`](Self::encode_point)
    pub fn decode_point(&self, bytes: &[u8]) -> Result<CurvePoint> {
        match bytes.first() {
            None => Err(Error::param("curve point", "empty encoding")),
            Some(&IDENTITY_TAG) => {
                validate::length("identity encoding", bytes.len(), 1)?;
                Ok(CurvePoint::Identity)
            }
            Some(&UNCOMPRESSED_TAG) => {
                validate::length("uncompressed point", bytes.len(), self.encoded_point_len())?;
                let (xb, yb) = bytes[1..].split_at(self.field_size());
                let point = CurvePoint::Affine {
                    x: BigInt::from_bytes_be(Sign::Plus, xb),
                    y: BigInt::from_bytes_be(Sign::Plus, yb),
                };
                // Rejects coordinates >= p as well as off-curve points
                self.validate_point(&point, "decoded point")?;
                Ok(point)
            }
            Some(_) => Err(Error::param("curve point", "unknown encoding tag")),
        }
    }

    fn coordinate_bytes(&self, v: &BigInt) -> Vec<u8> {
        let (_, magnitude) = v.to_bytes_be();
        let mut out = vec![0u8; self.field_size().saturating_sub(magnitude.len())];
        out.extend_from_slice(&magnitude);
        out
    }
}
