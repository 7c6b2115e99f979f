//! Error types for curve construction and point arithmetic.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised by curve parameter validation, point checks, and the
/// modular/octet helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A coordinate pair does not satisfy the curve equation.
    #[error("point not on curve")]
    NotOnCurve,

    /// A finite point was required (octet encodings have no infinity form).
    #[error("infinite point")]
    InfinitePoint,

    /// The curve equation has no root at the claimed x-coordinate.
    #[error("no y exists for x-coordinate {0:#x}")]
    NoRoot(BigUint),

    /// Modular inverse of a non-invertible element.
    #[error("{0:#x} is not invertible modulo {1:#x}")]
    NotInvertible(BigUint, BigUint),

    /// A square root was requested for a non-residue.
    #[error("{0:#x} is not a quadratic residue modulo {1:#x}")]
    NotAResidue(BigUint, BigUint),

    /// Rejected curve domain parameters.
    #[error("invalid curve parameters: {0}")]
    InvalidParams(&'static str),

    /// Fixed-width encoding of an integer that does not fit.
    #[error("integer {int:#x} does not fit in {size} bytes")]
    IntTooBig { int: BigUint, size: usize },

    /// Malformed point octets (bad prefix or length).
    #[error("invalid point octets: {0}")]
    InvalidOctets(&'static str),

    /// Scalar and point sequences of different lengths.
    #[error("{0} scalars for {1} points")]
    LengthMismatch(usize, usize),
}
