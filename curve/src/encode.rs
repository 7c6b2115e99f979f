//! Integer and point octet encodings.
//!
//! Integers travel as fixed-width big-endian strings; points use the
//! SEC 1 forms (0x02/0x03 compressed, 0x04 uncompressed). The point at
//! infinity has no octet form.

use num_bigint::BigUint;

use crate::affine::Point;
use crate::curve::Curve;
use crate::errors::CurveError;

/// Encode `x` as exactly `size` big-endian bytes, zero-padded on the
/// left.
pub fn octets_from_int(x: &BigUint, size: usize) -> Result<Vec<u8>, CurveError> {
    let bytes = x.to_bytes_be();
    // BigUint encodes zero as one 0x00 byte
    let used = if x.bits() == 0 { 0 } else { bytes.len() };
    if used > size {
        return Err(CurveError::IntTooBig {
            int: x.clone(),
            size,
        });
    }
    let mut out = vec![0u8; size - used];
    if used > 0 {
        out.extend_from_slice(&bytes);
    }
    Ok(out)
}

/// Decode big-endian bytes into an integer. Leading zeros are allowed.
pub fn int_from_octets(octets: &[u8]) -> BigUint {
    BigUint::from_bytes_be(octets)
}

/// Interpret the leftmost `nlen` bits of `octets` as an integer and
/// reduce it mod n.
///
/// This is the FIPS 186 bits-to-int conversion used for challenges and
/// deterministic nonces: digests wider than the group order are
/// truncated from the right before reduction.
pub fn int_from_bits(octets: &[u8], ec: &Curve) -> BigUint {
    let mut i = BigUint::from_bytes_be(octets);
    let blen = 8 * octets.len() as u64;
    if blen > ec.nlen {
        i >>= blen - ec.nlen;
    }
    i % &ec.n
}

/// Encode a finite on-curve point in SEC 1 form.
pub fn octets_from_point(
    point: &Point,
    compressed: bool,
    ec: &Curve,
) -> Result<Vec<u8>, CurveError> {
    if point.is_infinity() {
        return Err(CurveError::InfinitePoint);
    }
    ec.require_on_curve(point)?;

    let x = octets_from_int(&point.x, ec.psize)?;
    if compressed {
        let mut out = Vec::with_capacity(1 + ec.psize);
        out.push(if point.y.bit(0) { 0x03 } else { 0x02 });
        out.extend_from_slice(&x);
        return Ok(out);
    }

    let mut out = Vec::with_capacity(1 + 2 * ec.psize);
    out.push(0x04);
    out.extend_from_slice(&x);
    out.extend_from_slice(&octets_from_int(&point.y, ec.psize)?);
    Ok(out)
}

/// Decode a SEC 1 point, accepting both compressed and uncompressed
/// forms.
pub fn point_from_octets(octets: &[u8], ec: &Curve) -> Result<Point, CurveError> {
    if octets.len() == 1 + ec.psize {
        let odd = match octets[0] {
            0x02 => false,
            0x03 => true,
            _ => return Err(CurveError::InvalidOctets("bad compressed prefix")),
        };
        let x = int_from_octets(&octets[1..]);
        let y = ec.y_odd(&x, odd)?;
        return Ok(Point::new(x, y));
    }

    if octets.len() == 1 + 2 * ec.psize {
        if octets[0] != 0x04 {
            return Err(CurveError::InvalidOctets("bad uncompressed prefix"));
        }
        let x = int_from_octets(&octets[1..=ec.psize]);
        let y = int_from_octets(&octets[1 + ec.psize..]);
        let point = Point::new(x, y);
        ec.require_on_curve(&point)?;
        return Ok(point);
    }

    Err(CurveError::InvalidOctets("wrong length"))
}
