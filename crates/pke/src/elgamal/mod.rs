//! EC-ElGamal encryption over a short Weierstrass curve.
//!
//! With base point G and private key d, the public key is P = d·G.
//! A message point M is encrypted under a nonce k as
//! (C1, C2) = (k·G, M + k·P) and recovered as M = C2 − d·C1.
//!
//! The free functions take every input explicitly, including the nonce.
//! [`EcElGamal`] binds a curve and base point and draws fresh scalars from
//! a caller-supplied RNG through the [`Pke`] trait.
//!
//! There is no authentication: decrypting with the wrong key yields a
//! well-formed but wrong point.

use ecelgamal_algorithms::ec::weierstrass::{random_scalar_below, IDENTITY_TAG, UNCOMPRESSED_TAG};
use ecelgamal_algorithms::error::{to_core_result, Error as PrimitiveError, ResultExt};
use ecelgamal_algorithms::{load_domain, CurvePoint, EllipticCurveGroup, NamedCurve};
use ecelgamal_api::error::Error as ApiError;
use ecelgamal_api::traits::{Pke, SerializeSecret};
use ecelgamal_common::SecretVec;
use ecelgamal_params::traditional::weierstrass::CurveDomain;
use log::debug;
use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// EC-ElGamal private key d.
///
/// Stored as a two's-complement big-endian byte string in a buffer that is
/// zeroized on drop. `Debug` never prints the value.
#[derive(Clone)]
pub struct PrivateKey(SecretVec);

impl PrivateKey {
    /// Wrap a scalar as a private key
    pub fn new(d: &BigInt) -> Self {
        PrivateKey(SecretVec::new(d.to_signed_bytes_be()))
    }

    /// The scalar d
    pub fn scalar(&self) -> BigInt {
        BigInt::from_signed_bytes_be(self.0.as_slice())
    }
}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

impl SerializeSecret for PrivateKey {
    fn from_bytes(bytes: &[u8]) -> ecelgamal_api::Result<Self> {
        if bytes.is_empty() {
            return Err(ApiError::InvalidKey {
                context: "PrivateKey::from_bytes",
                message: "empty encoding".to_string(),
            });
        }
        Ok(PrivateKey(SecretVec::from_slice(bytes)))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

/// A private key d and its public key P = d·G
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: CurvePoint,
}

/// An EC-ElGamal ciphertext (C1, C2)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ciphertext {
    /// k·G
    pub c1: CurvePoint,
    /// M + k·P
    pub c2: CurvePoint,
}

impl Ciphertext {
    /// Serialize as `encode(C1) ∥ encode(C2)`.
    ///
    /// Each point encoding is self-delimiting: its tag byte fixes its length.
    pub fn to_bytes(&self, group: &EllipticCurveGroup) -> Vec<u8> {
        let mut out = group.encode_point(&self.c1);
        out.extend_from_slice(&group.encode_point(&self.c2));
        out
    }

    /// Parse and validate a ciphertext produced by [`to_bytes`](Self::to_bytes).
    ///
    /// Both points must lie on the curve of `group`.
    pub fn from_bytes(group: &EllipticCurveGroup, bytes: &[u8]) -> Result<Self> {
        let (c1, rest) = split_point(group, bytes)?;
        let (c2, rest) = split_point(group, rest)?;
        if !rest.is_empty() {
            return Err(Error::InvalidCiphertextFormat("trailing bytes after C2"));
        }
        Ok(Ciphertext { c1, c2 })
    }
}

fn split_point<'a>(group: &EllipticCurveGroup, bytes: &'a [u8]) -> Result<(CurvePoint, &'a [u8])> {
    let len = match bytes.first() {
        None => return Err(Error::InvalidCiphertextFormat("truncated ciphertext")),
        Some(&IDENTITY_TAG) => 1,
        Some(&UNCOMPRESSED_TAG) => group.encoded_point_len(),
        Some(_) => return Err(Error::InvalidCiphertextFormat("unknown point tag")),
    };
    if bytes.len() < len {
        return Err(Error::InvalidCiphertextFormat("truncated ciphertext"));
    }
    let (encoded, rest) = bytes.split_at(len);
    let point = group.decode_point(encoded).map_err(|e| match e {
        PrimitiveError::PointNotOnCurve { .. } => {
            Error::InvalidCiphertextPoint("Ciphertext::from_bytes")
        }
        other => Error::Primitive(other),
    })?;
    Ok((point, rest))
}

/// Derive the key pair for private key `d`: P = d·G.
///
/// Fails with [`Error::InvalidBasePoint`] if G is not on the curve. `d` is
/// not range-checked.
pub fn generate_keys(
    group: &EllipticCurveGroup,
    base_point: &CurvePoint,
    d: &BigInt,
) -> Result<KeyPair> {
    group
        .validate_point(base_point, "generate_keys")
        .map_err(|_| Error::InvalidBasePoint("generate_keys"))?;

    let public_key = group.scalar_multiply(base_point, d);
    debug!("EC-ElGamal key generation: public key {}", public_key);

    Ok(KeyPair {
        private_key: PrivateKey::new(d),
        public_key,
    })
}

/// Encrypt message point M under public key P with nonce k.
///
/// The caller must use a fresh random k for every encryption; reusing k
/// reveals M₁ − M₂ from two ciphertexts.
pub fn encrypt(
    group: &EllipticCurveGroup,
    base_point: &CurvePoint,
    public_key: &CurvePoint,
    message: &CurvePoint,
    k: &BigInt,
) -> Result<Ciphertext> {
    group
        .validate_point(message, "encrypt")
        .map_err(|_| Error::InvalidMessagePoint("encrypt"))?;
    group
        .validate_point(base_point, "encrypt")
        .map_err(|_| Error::InvalidBasePoint("encrypt"))?;
    group
        .validate_point(public_key, "encrypt")
        .map_err(|_| Error::InvalidKey("public key is not on the curve"))?;

    let c1 = group.scalar_multiply(base_point, k);
    let c2 = group.add(message, &group.scalar_multiply(public_key, k));
    debug!("EC-ElGamal encrypt: C1 = {}, C2 = {}", c1, c2);

    Ok(Ciphertext { c1, c2 })
}

/// Recover M = C2 − d·C1.
///
/// C1 and C2 must lie on the curve. A mismatched `d` is not detected.
pub fn decrypt(
    group: &EllipticCurveGroup,
    d: &BigInt,
    ciphertext: &Ciphertext,
) -> Result<CurvePoint> {
    for point in [&ciphertext.c1, &ciphertext.c2] {
        group
            .validate_point(point, "decrypt")
            .map_err(|_| Error::InvalidCiphertextPoint("decrypt"))?;
    }
    debug!(
        "EC-ElGamal decrypt: C1 = {}, C2 = {}",
        ciphertext.c1, ciphertext.c2
    );

    let shared = group.scalar_multiply(&ciphertext.c1, d);
    Ok(group.add(&ciphertext.c2, &group.negate(&shared)))
}

/// EC-ElGamal bound to a curve group and base point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcElGamal {
    group: EllipticCurveGroup,
    base_point: CurvePoint,
    order: Option<BigInt>,
}

impl EcElGamal {
    /// Bind a group and base point; G must be on the curve.
    pub fn new(group: EllipticCurveGroup, base_point: CurvePoint) -> Result<Self> {
        group
            .validate_point(&base_point, "EcElGamal::new")
            .map_err(|_| Error::InvalidBasePoint("EcElGamal::new"))?;
        Ok(Self {
            group,
            base_point,
            order: None,
        })
    }

    /// Use a loaded named curve, including the order of G when known.
    pub fn from_named_curve(curve: NamedCurve) -> Result<Self> {
        let mut scheme = Self::new(curve.group, curve.base_point)?;
        scheme.order = curve.order;
        Ok(scheme)
    }

    /// Load static domain parameters and bind them.
    pub fn from_domain(domain: &CurveDomain) -> Result<Self> {
        let curve = load_domain(domain).map_err(|e| match e {
            PrimitiveError::PointNotOnCurve { .. } => Error::InvalidBasePoint("EcElGamal::from_domain"),
            other => Error::Primitive(other),
        })?;
        Self::from_named_curve(curve)
    }

    /// The curve group
    pub fn group(&self) -> &EllipticCurveGroup {
        &self.group
    }

    /// The base point G
    pub fn base_point(&self) -> &CurvePoint {
        &self.base_point
    }

    /// Order of G, if known
    pub fn order(&self) -> Option<&BigInt> {
        self.order.as_ref()
    }

    /// Deterministic key derivation, see [`generate_keys`]
    pub fn keypair_from_scalar(&self, d: &BigInt) -> Result<KeyPair> {
        generate_keys(&self.group, &self.base_point, d)
    }

    /// Deterministic encryption, see [`encrypt`]
    pub fn encrypt_with_nonce(
        &self,
        public_key: &CurvePoint,
        message: &CurvePoint,
        k: &BigInt,
    ) -> Result<Ciphertext> {
        encrypt(&self.group, &self.base_point, public_key, message, k)
    }

    // Random scalars are drawn from [1, n) when the order n of G is known,
    // else from [1, p).
    fn scalar_bound(&self) -> &BigInt {
        self.order.as_ref().unwrap_or(self.group.p())
    }
}

impl Pke for EcElGamal {
    type PublicKey = CurvePoint;
    type SecretKey = PrivateKey;
    type Plaintext = CurvePoint;
    type Ciphertext = Ciphertext;

    fn name(&self) -> &'static str {
        "EC-ElGamal"
    }

    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> ecelgamal_api::Result<(Self::PublicKey, Self::SecretKey)> {
        let d = to_core_result(
            random_scalar_below(rng, self.scalar_bound()),
            "EcElGamal::keypair",
        )?;
        let KeyPair {
            private_key,
            public_key,
        } = self.keypair_from_scalar(&d)?;
        Ok((public_key, private_key))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &Self::Plaintext,
        rng: &mut R,
    ) -> ecelgamal_api::Result<Self::Ciphertext> {
        let k = random_scalar_below(rng, self.scalar_bound()).with_context("EcElGamal::encrypt")?;
        Ok(self.encrypt_with_nonce(pk_recipient, plaintext, &k)?)
    }

    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ecelgamal_api::Result<Self::Plaintext> {
        Ok(decrypt(&self.group, &sk_recipient.scalar(), ciphertext)?)
    }
}
