//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Trait for Public Key Encryption schemes bound to a set of domain parameters.
///
/// Unlike a fixed-curve scheme, the domain (curve and base point) is a runtime
/// value, so every operation takes `&self`.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    type SecretKey;

    /// Plaintext type accepted by the scheme.
    type Plaintext;

    /// Ciphertext type produced by the PKE scheme.
    type Ciphertext: Clone;

    /// Returns the PKE algorithm name.
    fn name(&self) -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext using the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The message to encrypt.
    /// * `rng` - A cryptographically secure random number generator.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &Self::Plaintext,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    ///
    /// Schemes without authentication return a well-formed but wrong
    /// plaintext when the key does not match.
    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::Plaintext>;
}
