//! Signing.

use curve::{legendre_symbol, mod_inv};
use digest::core_api::BlockSizeUser;
use digest::{Digest, FixedOutput, FixedOutputReset};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::context::Ssa;
use crate::errors::Error;
use crate::nonce::deterministic_nonce;
use crate::signatures::{challenge, ensure_msg_size, Signature};

impl<D> Ssa<'_, D>
where
    D: Digest + BlockSizeUser + FixedOutput + FixedOutputReset,
{
    /// Sign a message hash digest.
    ///
    /// `mhd` must be exactly one digest wide and `prvkey` in [1, n-1].
    /// When `nonce` is `None` the RFC 6979 nonce is derived from
    /// `(mhd, prvkey)`, making the signature deterministic; an explicit
    /// nonce must be in [1, n-1] and is the caller's responsibility to
    /// keep secret and never reuse.
    ///
    /// The nonce is flipped to n - k when y(kG) is not a quadratic
    /// residue, so the verifier can resolve the sign ambiguity of r
    /// without an extra bit.
    pub fn sign(
        &self,
        mhd: &[u8],
        prvkey: &BigUint,
        nonce: Option<&BigUint>,
    ) -> Result<Signature, Error> {
        let ec = self.curve();

        if !ec.p_is_three_mod_four() {
            return Err(Error::CurveConstraint);
        }
        ensure_msg_size::<D>(mhd)?;

        if prvkey.is_zero() || prvkey >= ec.order() {
            return Err(Error::KeyRange {
                role: "private",
                key: prvkey.clone(),
            });
        }
        let pubkey = ec.mul_generator(prvkey)?;

        let k = match nonce {
            Some(k) => k.clone(),
            None => deterministic_nonce::<D>(mhd, prvkey, ec)?,
        };
        if k.is_zero() || k >= *ec.order() {
            return Err(Error::KeyRange {
                role: "ephemeral",
                key: k,
            });
        }

        let rj = ec.scalar_mul(&k, ec.generator_jac());
        // y(R) in Jacobian form is Y/Z^3; Y*Z has the same residue class
        let k = if legendre_symbol(&(&rj.y * &rj.z % ec.prime()), ec.prime()) != 1 {
            ec.order() - &k
        } else {
            k
        };

        // the single field inversion of the signing path
        let z2 = &rj.z * &rj.z % ec.prime();
        let r = &rj.x * mod_inv(&z2, ec.prime())? % ec.prime();

        let e = challenge::<D>(&r, &pubkey, mhd, ec)?;
        let s = (k + e * prvkey) % ec.order();
        Ok(Signature { r, s })
    }
}
