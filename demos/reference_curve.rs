//! EC-ElGamal on the reference curve y² = x³ + 2x + 2 (mod 17)

use ecelgamal::params::traditional::weierstrass::{REFERENCE_CURVE, SECP256K1};
use ecelgamal::prelude::*;
use rand::rngs::OsRng;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("EC-ElGamal Reference Curve Example");
    println!("==================================");

    // Curve and base point
    let scheme = EcElGamal::from_domain(&REFERENCE_CURVE)?;
    let group = scheme.group();
    let g = scheme.base_point();
    println!(
        "Curve: y^2 = x^3 + {}x + {} (mod {})",
        group.a(),
        group.b(),
        group.p()
    );
    println!("Base point G = {} (on curve: {})", g, group.is_on_curve(g));

    // Fixed private key d = 7
    println!("\nGenerating keypair for d = 7...");
    let keys = scheme.keypair_from_scalar(&BigInt::from(7))?;
    println!("Public key P = 7G = {}", keys.public_key);

    // Encrypt M = (6, 3) with k = 9
    let message = CurvePoint::affine(6, 3);
    println!("\nEncrypting M = {} with k = 9...", message);
    let ciphertext = scheme.encrypt_with_nonce(&keys.public_key, &message, &BigInt::from(9))?;
    println!("C1 = {}", ciphertext.c1);
    println!("C2 = {}", ciphertext.c2);

    // Decrypt
    let recovered = scheme.decrypt(&keys.private_key, &ciphertext)?;
    println!("\nDecrypted M = {}", recovered);
    if recovered == message {
        println!("Decryption matches the original message! ✓");
    } else {
        println!("Decryption does not match! ✗");
    }

    // Off-curve points are rejected before any arithmetic
    println!("\nTrying to encrypt (0, 0), which is not on the curve...");
    match scheme.encrypt_with_nonce(&keys.public_key, &CurvePoint::affine(0, 0), &BigInt::from(9)) {
        Ok(_) => println!("Point incorrectly accepted! ✗"),
        Err(e) => println!("Correctly rejected: {}", e),
    }

    // Randomized keys and nonces on secp256k1
    println!("\nsecp256k1 with random keys...");
    let mut rng = OsRng;
    let scheme = EcElGamal::from_domain(&SECP256K1)?;
    let (public_key, secret_key) = scheme.keypair(&mut rng)?;
    let message = scheme.group().double(scheme.base_point());
    let ciphertext = scheme.encrypt(&public_key, &message, &mut rng)?;
    println!(
        "Ciphertext size: {} bytes",
        ciphertext.to_bytes(scheme.group()).len()
    );
    assert_eq!(scheme.decrypt(&secret_key, &ciphertext)?, message);
    println!("Round trip succeeded! ✓");

    Ok(())
}
