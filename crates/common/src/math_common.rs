//! Modular arithmetic over arbitrary-precision integers
//!
//! Every function here returns a value normalized into `[0, m)`, whatever
//! the sign of its inputs. Callers never see the sign of a `%` remainder.

use ecelgamal_api::error::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Reduce `x` into `[0, m)`. `m` must be positive.
pub fn modulo(x: &BigInt, m: &BigInt) -> BigInt {
    x.mod_floor(m)
}

/// Perform modular addition: (a + b) mod m
pub fn mod_add(a: &BigInt, b: &BigInt, m: &BigInt) -> BigInt {
    modulo(&(a + b), m)
}

/// Perform modular subtraction: (a - b) mod m
pub fn mod_sub(a: &BigInt, b: &BigInt, m: &BigInt) -> BigInt {
    modulo(&(a - b), m)
}

/// Perform modular multiplication: (a * b) mod m
pub fn mod_mul(a: &BigInt, b: &BigInt, m: &BigInt) -> BigInt {
    modulo(&(a * b), m)
}

/// Additive inverse: (-a) mod m
pub fn mod_neg(a: &BigInt, m: &BigInt) -> BigInt {
    modulo(&-a, m)
}

/// Compute the greatest common divisor of two numbers (always non-negative)
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    a.gcd(b)
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
///
/// Fails with [`Error::NoInverse`] when `gcd(a, m) != 1` or `m <= 1`.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Result<BigInt> {
    if m <= &BigInt::one() {
        return Err(no_inverse(a, m));
    }

    let a = modulo(a, m);
    if a.is_zero() {
        return Err(no_inverse(&a, m));
    }

    let egcd = a.extended_gcd(m);
    if !egcd.gcd.is_one() {
        return Err(no_inverse(&a, m));
    }

    // x may be negative; bring it back into the field
    let inv = modulo(&egcd.x, m);
    debug_assert!(!inv.is_negative());
    Ok(inv)
}

fn no_inverse(a: &BigInt, m: &BigInt) -> Error {
    Error::NoInverse {
        context: "mod_inverse",
        value: a.to_string(),
        modulus: m.to_string(),
    }
}
