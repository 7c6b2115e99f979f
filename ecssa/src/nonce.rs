//! Deterministic nonces per RFC 6979.

use curve::{int_from_bits, octets_from_int, Curve};
use digest::core_api::BlockSizeUser;
use digest::{Digest, FixedOutput, FixedOutputReset, Output};
use num_bigint::BigUint;

use crate::errors::Error;
use crate::signatures::ensure_msg_size;

/// Derive the signing nonce from the message hash digest and the
/// private key, per RFC 6979 with HMAC over `D`.
///
/// Only defined when the curve's scalar width equals the digest size,
/// as with secp256k1 and SHA-256; other pairings must pass an explicit
/// nonce to [`crate::Ssa::sign`]. The digest is pre-reduced mod n by
/// the leftmost-bits rule, as the RFC's bits2octets step requires.
pub(crate) fn deterministic_nonce<D>(
    mhd: &[u8],
    prvkey: &BigUint,
    ec: &Curve,
) -> Result<BigUint, Error>
where
    D: Digest + BlockSizeUser + FixedOutput + FixedOutputReset,
{
    ensure_msg_size::<D>(mhd)?;
    let size = <D as Digest>::output_size();
    if ec.nsize() != size {
        return Err(Error::NonceSize {
            nsize: ec.nsize(),
            digest: size,
        });
    }

    let x = Output::<D>::clone_from_slice(&octets_from_int(prvkey, size)?);
    let order = Output::<D>::clone_from_slice(&octets_from_int(ec.order(), size)?);
    let reduced = int_from_bits(mhd, ec);
    let h = Output::<D>::clone_from_slice(&octets_from_int(&reduced, size)?);

    let k = rfc6979::generate_k::<D, _>(&x, &order, &h, b"");
    Ok(BigUint::from_bytes_be(&k))
}
