//! Error types for the Schnorr signature scheme.

use curve::CurveError;
use num_bigint::BigUint;
use thiserror::Error;

/// Errors surfaced by signing and by the fallible forms of verification
/// and recovery.
///
/// The public boolean entry points collapse every variant to `false`;
/// the detailed variants exist so tests and diagnostics can tell a
/// malformed input from a signature that merely fails the curve
/// equation check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The scheme is only defined for curves whose prime is 3 (mod 4),
    /// where exactly one of the two roots at any x is a quadratic
    /// residue.
    #[error("curve prime p must be equal to 3 (mod 4)")]
    CurveConstraint,

    /// The message was not the challenge hash's digest size. Callers
    /// sign a message hash digest, never a raw message.
    #[error("message of wrong size: {got} instead of {expected} bytes")]
    MessageSize { got: usize, expected: usize },

    /// A private key or an ephemeral key outside [1, n-1].
    #[error("{role} key {key:#x} not in [1, n-1]")]
    KeyRange {
        role: &'static str,
        key: BigUint,
    },

    /// A signature component outside its allowed range.
    #[error("{field} ({value:#x}) not in {range}")]
    SignatureFormat {
        field: &'static str,
        value: BigUint,
        range: &'static str,
    },

    /// The public key is the point at infinity.
    #[error("public key is infinite")]
    InfinitePubKey,

    /// Verification reconstructed the point at infinity.
    #[error("sG - eP is infinite")]
    InfiniteNoncePoint,

    /// The reconstructed nonce point's y-coordinate is not a quadratic
    /// residue.
    #[error("(sG - eP).y is not a quadratic residue")]
    NotQuadraticResidue,

    /// Batch inputs of different lengths.
    #[error("mismatch between number of pubkeys ({pubkeys}) and number of {kind} ({got})")]
    SizeMismatch {
        pubkeys: usize,
        kind: &'static str,
        got: usize,
    },

    /// Key recovery with a zero challenge, which has no inverse mod n.
    #[error("invalid (zero) challenge e")]
    ZeroChallenge,

    /// Deterministic nonces require the curve scalar width to equal the
    /// hash digest size; other pairings must supply an explicit nonce.
    #[error("nonce derivation needs a {nsize}-byte digest, hash outputs {digest} bytes")]
    NonceSize { nsize: usize, digest: usize },

    /// An underlying point or encoding operation failed.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
