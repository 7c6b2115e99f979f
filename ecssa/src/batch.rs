//! Randomized batch verification.

use curve::{JacPoint, Point};
use digest::Digest;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::CryptoRng;

use crate::context::Ssa;
use crate::errors::Error;
use crate::signatures::{challenge, check_sig, ensure_msg_size, Signature};

/// Uniform draw from [0, 2^nlen).
fn random_bits<R: CryptoRng + ?Sized>(rng: &mut R, nlen: u64) -> BigUint {
    let nbytes = nlen.div_ceil(8) as usize;
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    let excess = 8 * nbytes as u64 - nlen;
    BigUint::from_bytes_be(&buf) >> excess
}

impl<D: Digest> Ssa<'_, D> {
    /// Verify a batch of signatures in one multi-scalar equation,
    /// drawing blinding coefficients from the thread-local CSPRNG.
    ///
    /// Like [`Ssa::verify`] this is a boolean boundary; it never
    /// panics and collapses malformed inputs to `false`. A `true`
    /// answer says the whole batch is valid except with negligible
    /// probability; a `false` answer does not say which signature is
    /// bad.
    pub fn batch_verify(&self, mhds: &[&[u8]], pubkeys: &[Point], sigs: &[Signature]) -> bool {
        self.batch_verify_with_rng(mhds, pubkeys, sigs, &mut rand::rng())
    }

    /// Batch verification with an injected coefficient source, for
    /// reproducible tests.
    pub fn batch_verify_with_rng<R: CryptoRng + ?Sized>(
        &self,
        mhds: &[&[u8]],
        pubkeys: &[Point],
        sigs: &[Signature],
        rng: &mut R,
    ) -> bool {
        self.try_batch_verify(mhds, pubkeys, sigs, rng).unwrap_or(false)
    }

    /// Batch verification with full error reporting.
    ///
    /// Checks the linear combination
    /// (sum a_i * s_i) G = sum a_i * R_i + sum (a_i * e_i) P_i
    /// with a_0 = 1 and the other a_i random, which holds for every
    /// batch of valid signatures and fails with overwhelming
    /// probability otherwise. An empty batch is vacuously true.
    pub(crate) fn try_batch_verify<R: CryptoRng + ?Sized>(
        &self,
        mhds: &[&[u8]],
        pubkeys: &[Point],
        sigs: &[Signature],
        rng: &mut R,
    ) -> Result<bool, Error> {
        let ec = self.curve();

        if !ec.p_is_three_mod_four() {
            return Err(Error::CurveConstraint);
        }
        let batch_size = pubkeys.len();
        if mhds.len() != batch_size {
            return Err(Error::SizeMismatch {
                pubkeys: batch_size,
                kind: "messages",
                got: mhds.len(),
            });
        }
        if sigs.len() != batch_size {
            return Err(Error::SizeMismatch {
                pubkeys: batch_size,
                kind: "signatures",
                got: sigs.len(),
            });
        }

        // the blinding coefficient adds nothing for a single signature
        if batch_size == 1 {
            return self.try_verify(mhds[0], &pubkeys[0], &sigs[0]);
        }

        let mut t = BigUint::zero();
        let mut scalars: Vec<BigUint> = Vec::with_capacity(2 * batch_size);
        let mut points: Vec<JacPoint> = Vec::with_capacity(2 * batch_size);

        for i in 0..batch_size {
            check_sig(&sigs[i], ec)?;
            ensure_msg_size::<D>(mhds[i])?;
            ec.require_on_curve(&pubkeys[i])?;
            if pubkeys[i].is_infinity() {
                return Err(Error::InfinitePubKey);
            }

            let e = challenge::<D>(&sigs[i].r, &pubkeys[i], mhds[i], ec)?;
            // no residue test needed: with p = 3 (mod 4), y() already
            // returns the residue root, which is the signer's y(R)
            let y = ec.y(&sigs[i].r)?;

            let a = if i == 0 {
                BigUint::one()
            } else {
                (BigUint::one() + random_bits(rng, ec.nlen())) % ec.order()
            };
            t += &a * &sigs[i].s;

            scalars.push(a.clone());
            points.push(JacPoint::from_affine(&Point::new(sigs[i].r.clone(), y)));
            scalars.push(a * e % ec.order());
            points.push(JacPoint::from_affine(&pubkeys[i]));
        }

        let lhs = ec.scalar_mul(&t, ec.generator_jac());
        let rhs = ec.multi_scalar_mul(&scalars, &points)?;

        // compare without leaving Jacobian coordinates:
        // X1/Z1^2 == X2/Z2^2 and Y1/Z1^3 == Y2/Z2^3, cross-multiplied
        let p = ec.prime();
        let lhs_z2 = &lhs.z * &lhs.z;
        let rhs_z2 = &rhs.z * &rhs.z;
        if &lhs.x * &rhs_z2 % p != &rhs.x * &lhs_z2 % p {
            return Ok(false);
        }
        Ok(&lhs.y * &rhs_z2 * &rhs.z % p == &rhs.y * &lhs_z2 * &lhs.z % p)
    }
}
