//! Modular arithmetic helpers: subtraction, inversion, Legendre symbol,
//! and square roots.
//!
//! All functions operate on [`BigUint`] values and take the modulus
//! explicitly, so they serve both the coordinate field (mod p) and the
//! scalar group (mod n).

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::errors::CurveError;

/// (a - b) mod m, for unsigned operands of any size.
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - b + a
    }
}

/// Modular inverse by the extended Euclidean algorithm.
///
/// Fails when `gcd(a, m) != 1`.
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Result<BigUint, CurveError> {
    let mut r = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut new_r = BigInt::from_biguint(Sign::Plus, a % m);
    let mut t = BigInt::zero();
    let mut new_t = BigInt::one();

    while !new_r.is_zero() {
        let quotient = &r / &new_r;
        let next_t = &t - &quotient * &new_t;
        t = std::mem::replace(&mut new_t, next_t);
        let next_r = &r - &quotient * &new_r;
        r = std::mem::replace(&mut new_r, next_r);
    }

    if !r.is_one() {
        return Err(CurveError::NotInvertible(a % m, m.clone()));
    }
    if t.sign() == Sign::Minus {
        t += BigInt::from_biguint(Sign::Plus, m.clone());
    }
    Ok(t.magnitude().clone())
}

/// Legendre symbol of `a` modulo an odd prime `p`.
///
/// Returns 1 for residues, -1 for non-residues, and 0 when p divides a.
pub fn legendre_symbol(a: &BigUint, p: &BigUint) -> i32 {
    let exp = (p - 1u32) >> 1;
    let symbol = a.modpow(&exp, p);
    if symbol.is_zero() {
        0
    } else if symbol.is_one() {
        1
    } else {
        -1
    }
}

/// Modular square root of `a` modulo an odd prime `p`.
///
/// Uses the p = 3 (mod 4) shortcut when available and Tonelli-Shanks
/// otherwise. Which of the two roots is returned is fixed: for
/// p = 3 (mod 4) it is the root that is itself a quadratic residue.
pub fn mod_sqrt(a: &BigUint, p: &BigUint) -> Result<BigUint, CurveError> {
    let a = a % p;
    if a.is_zero() {
        return Ok(a);
    }
    if legendre_symbol(&a, p) != 1 {
        return Err(CurveError::NotAResidue(a, p.clone()));
    }

    if (p % 4u32) == BigUint::from(3u32) {
        let exp = (p + 1u32) >> 2;
        return Ok(a.modpow(&exp, p));
    }

    // Tonelli-Shanks: write p - 1 = q * 2^s with q odd.
    let one = BigUint::one();
    let mut q = p - &one;
    let mut s = 0u64;
    while !q.bit(0) {
        q >>= 1;
        s += 1;
    }

    // any non-residue works as the cycle generator
    let mut z = BigUint::from(2u32);
    while legendre_symbol(&z, p) != -1 {
        z += &one;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + &one) >> 1), p);

    while !t.is_one() {
        let mut i = 0u64;
        let mut probe = t.clone();
        while !probe.is_one() {
            probe = &probe * &probe % p;
            i += 1;
        }
        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = &b * &b % p;
        }
        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * &b % p;
    }
    Ok(r)
}
