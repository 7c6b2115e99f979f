//! Signature type, component range checks, and the challenge hash.

use curve::{int_from_bits, octets_from_int, octets_from_point, Curve, Point};
use digest::Digest;
use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A Schnorr signature (r, s).
///
/// `r` is the x-coordinate of the nonce point R = kG, where k has been
/// flipped to n - k when y(R) is not a quadratic residue, and
/// `s = (k + e*d) mod n` is the response scalar binding the challenge
/// `e` to the private key `d`.
///
/// # Example
///
/// ```
/// use ecssa::Ssa;
/// use sha2::{Digest, Sha256};
///
/// let ssa = Ssa::default();
/// let mut rng = rand::rng();
/// let (prvkey, pubkey) = ssa.keypair(&mut rng).expect("keypair");
///
/// let mhd = Sha256::digest(b"hello schnorr");
/// let sig = ssa.sign(&mhd, &prvkey, None).expect("sign");
/// assert!(ssa.verify(&mhd, &pubkey, &sig));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// x-coordinate of the nonce point.
    pub r: BigUint,
    /// Response scalar; s = 0 is valid and verifies.
    pub s: BigUint,
}

impl Signature {
    /// Create a signature from its components. No range validation is
    /// performed here; verification rejects out-of-range components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Fixed-width wire form: r (field-sized) and s (scalar-sized) back
    /// to back; 64 bytes on secp256k1.
    pub fn to_octets(&self, ec: &Curve) -> Result<Vec<u8>, Error> {
        let mut out = octets_from_int(&self.r, ec.psize())?;
        out.extend_from_slice(&octets_from_int(&self.s, ec.nsize())?);
        Ok(out)
    }
}

/// Range-check the signature components: r in [0, 2^256 - 1) and s in
/// [0, n). The bound on r is fixed by the scheme, not by the curve.
pub(crate) fn check_sig(sig: &Signature, ec: &Curve) -> Result<(), Error> {
    let r_bound = (BigUint::one() << 256u32) - 1u32;
    if sig.r >= r_bound {
        return Err(Error::SignatureFormat {
            field: "r",
            value: sig.r.clone(),
            range: "[0, 2**256-1]",
        });
    }
    if sig.s >= *ec.order() {
        return Err(Error::SignatureFormat {
            field: "s",
            value: sig.s.clone(),
            range: "[0, n-1]",
        });
    }
    Ok(())
}

/// Reject messages that are not exactly one digest wide.
pub(crate) fn ensure_msg_size<D: Digest>(mhd: &[u8]) -> Result<(), Error> {
    let expected = <D as Digest>::output_size();
    if mhd.len() != expected {
        return Err(Error::MessageSize {
            got: mhd.len(),
            expected,
        });
    }
    Ok(())
}

/// The signature challenge:
/// e = int(hash(bytes(r) || compressed(P) || mhd)) mod n,
/// with the digest converted by the leftmost-bits rule.
pub(crate) fn challenge<D: Digest>(
    r: &BigUint,
    pubkey: &Point,
    mhd: &[u8],
    ec: &Curve,
) -> Result<BigUint, Error> {
    let mut hasher = D::new();
    hasher.update(octets_from_int(r, ec.psize())?);
    hasher.update(octets_from_point(pubkey, true, ec)?);
    hasher.update(mhd);
    Ok(int_from_bits(&hasher.finalize(), ec))
}
