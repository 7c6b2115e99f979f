//! Signing context: the curve and challenge hash in use.

use std::marker::PhantomData;

use curve::{Curve, SECP256K1};
use sha2::Sha256;

/// An ECSSA context: a curve paired with the hash used for challenges
/// and deterministic nonces.
///
/// The scheme proper is secp256k1 with SHA-256, which is what
/// [`Ssa::default`] gives. Other p = 3 (mod 4) curves can be plugged in
/// for testing or experimentation; the hash is a type parameter so the
/// choice is fixed at compile time.
pub struct Ssa<'a, D = Sha256> {
    ec: &'a Curve,
    hash: PhantomData<D>,
}

impl<'a, D> Ssa<'a, D> {
    /// Context over an explicit curve.
    pub fn new(ec: &'a Curve) -> Self {
        Ssa {
            ec,
            hash: PhantomData,
        }
    }

    /// The configured curve.
    #[inline]
    pub fn curve(&self) -> &Curve {
        self.ec
    }
}

impl Default for Ssa<'static, Sha256> {
    /// secp256k1 with SHA-256.
    fn default() -> Self {
        Ssa::new(&SECP256K1)
    }
}

impl<D> Clone for Ssa<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Ssa<'_, D> {}
