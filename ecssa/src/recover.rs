//! Public key recovery.

use curve::{mod_inv, Point};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::context::Ssa;
use crate::errors::Error;
use crate::signatures::{check_sig, Signature};

impl<D> Ssa<'_, D> {
    /// Recover the public key that a challenge/signature pair points
    /// at: P = e^-1 * (sG - K), with K the residue-root point at x = r.
    ///
    /// This is a diagnostic for exercising the sign/verify algebra, not
    /// a verification shortcut: it trusts `e` instead of recomputing it
    /// and fails on a zero challenge or when no point exists at r.
    pub(crate) fn recover_pubkey(&self, e: &BigUint, sig: &Signature) -> Result<Point, Error> {
        let ec = self.curve();
        check_sig(sig, ec)?;

        let y = ec.y_quadratic_residue(&sig.r)?;
        let nonce_point = Point::new(sig.r.clone(), y);

        if e.is_zero() {
            return Err(Error::ZeroChallenge);
        }
        let e1 = mod_inv(e, ec.order())?;
        let minus_e1 = ec.order() - &e1;
        let e1s = &e1 * &sig.s % ec.order();

        let pubkey = ec.double_mul_point(&minus_e1, &nonce_point, &e1s, ec.generator())?;
        if pubkey.is_infinity() {
            return Err(Error::InfinitePubKey);
        }
        Ok(pubkey)
    }
}
