//! Named curve parameters.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::curve::Curve;

fn uint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("valid hex literal")
}

/// secp256k1, the Bitcoin curve.
pub static SECP256K1: Lazy<Curve> = Lazy::new(|| {
    Curve::new(
        uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
        BigUint::from(0u32),
        BigUint::from(7u32),
        (
            uint("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
            uint("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
        ),
        uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
        1,
    )
    .expect("secp256k1 parameters")
});

/// secp256r1, the NIST P-256 curve.
pub static SECP256R1: Lazy<Curve> = Lazy::new(|| {
    Curve::new(
        uint("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"),
        uint("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC"),
        uint("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"),
        (
            uint("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
            uint("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
        ),
        uint("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
        1,
    )
    .expect("secp256r1 parameters")
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affine::Point;

    #[test]
    fn test_secp256k1() {
        let ec = &SECP256K1;
        assert_eq!(ec.nlen(), 256);
        assert_eq!(ec.nsize(), 32);
        assert_eq!(ec.psize(), 32);
        assert!(ec.p_is_three_mod_four());

        // n * G = O and (n - 1) * G = -G
        assert!(ec.scalar_mul(ec.order(), ec.generator_jac()).is_infinity());
        let last = ec.mul_generator(&(ec.order() - 1u32)).expect("affine");
        assert_eq!(last, ec.negate(ec.generator()));
    }

    #[test]
    fn test_secp256r1() {
        let ec = &SECP256R1;
        assert_eq!(ec.nlen(), 256);
        assert!(ec.p_is_three_mod_four());
        assert_eq!(*ec.prime(), &ec.a + 3u32);

        assert!(ec.scalar_mul(ec.order(), ec.generator_jac()).is_infinity());
    }

    #[test]
    fn test_distinct_generators() {
        let g1: &Point = SECP256K1.generator();
        let g2: &Point = SECP256R1.generator();
        assert_ne!(g1, g2);
    }
}
