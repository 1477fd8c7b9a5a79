//! Domain parameters for short Weierstrass curves y² = x³ + ax + b over 𝔽ₚ

/// Domain parameters of a named curve, as big-endian hexadecimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveDomain {
    /// Human-readable curve name
    pub name: &'static str,

    /// The 'a' coefficient
    pub a: &'static str,

    /// The 'b' coefficient
    pub b: &'static str,

    /// The prime field modulus
    pub p: &'static str,

    /// x-coordinate of the base point G
    pub g_x: &'static str,

    /// y-coordinate of the base point G
    pub g_y: &'static str,

    /// Order of G, where known
    pub order: Option<&'static str>,
}

/// Textbook curve y² = x³ + 2x + 2 over 𝔽₁₇ with G = (5, 1) of order 19.
///
/// Small enough to check by hand; useful as a regression curve.
pub const REFERENCE_CURVE: CurveDomain = CurveDomain {
    name: "reference-17",
    a: "2",
    b: "2",
    p: "11",
    g_x: "5",
    g_y: "1",
    order: Some("13"),
};

/// SEC 2 secp256k1
pub const SECP256K1: CurveDomain = CurveDomain {
    name: "secp256k1",
    a: "0",
    b: "7",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    g_x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    g_y: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    order: Some("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
};

/// NIST P-256 (a = p - 3)
pub const NIST_P256: CurveDomain = CurveDomain {
    name: "P-256",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    g_x: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    g_y: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    order: Some("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
};

/// All curves shipped with the crate
pub const ALL_CURVES: [&CurveDomain; 3] = [&REFERENCE_CURVE, &SECP256K1, &NIST_P256];
