//! Verification.

use curve::{legendre_symbol, JacPoint, Point};
use digest::Digest;

use crate::context::Ssa;
use crate::errors::Error;
use crate::signatures::{challenge, check_sig, ensure_msg_size, Signature};

impl<D: Digest> Ssa<'_, D> {
    /// Verify a signature over a message hash digest.
    ///
    /// This is the boolean boundary of the scheme: any failure at all,
    /// whether a malformed input or a signature that does not check
    /// out, comes back as `false` and nothing in this path panics.
    pub fn verify(&self, mhd: &[u8], pubkey: &Point, sig: &Signature) -> bool {
        self.try_verify(mhd, pubkey, sig).unwrap_or(false)
    }

    /// Verification with full error reporting.
    ///
    /// `Ok(false)` means the inputs were well formed but the curve
    /// equation check failed; `Err` pins down the malformed input.
    pub(crate) fn try_verify(
        &self,
        mhd: &[u8],
        pubkey: &Point,
        sig: &Signature,
    ) -> Result<bool, Error> {
        let ec = self.curve();

        if !ec.p_is_three_mod_four() {
            return Err(Error::CurveConstraint);
        }
        check_sig(sig, ec)?;
        ensure_msg_size::<D>(mhd)?;

        ec.require_on_curve(pubkey)?;
        if pubkey.is_infinity() {
            return Err(Error::InfinitePubKey);
        }

        let e = challenge::<D>(&sig.r, pubkey, mhd, ec)?;

        // R = sG - eP, computed as (n - e)P + sG to stay unsigned
        let minus_e = (ec.order() - &e) % ec.order();
        let rj = ec.double_scalar_mul(
            &minus_e,
            &JacPoint::from_affine(pubkey),
            &sig.s,
            ec.generator_jac(),
        );

        if rj.is_infinity() {
            return Err(Error::InfiniteNoncePoint);
        }
        if legendre_symbol(&(&rj.y * &rj.z % ec.prime()), ec.prime()) != 1 {
            return Err(Error::NotQuadraticResidue);
        }

        // x(R) == r compared in Jacobian form: X == Z^2 * r (mod p)
        let z2 = &rj.z * &rj.z % ec.prime();
        Ok(rj.x == z2 * &sig.r % ec.prime())
    }
}
