//! Elliptic Curve Schnorr Signature Algorithm (ECSSA).
//!
//! This library implements the bip-schnorr draft scheme using:
//! - The secp256k1 curve by default, or any curve with p = 3 (mod 4)
//! - SHA-256 for the Fiat-Shamir challenge
//! - RFC 6979 deterministic nonces
//!
//! # Overview
//!
//! The scheme signs a 32-byte message hash digest and produces a
//! 64-byte signature: the x-coordinate of the nonce point and a
//! response scalar. Compared to ECDSA it is linear, which is what makes
//! randomized batch verification and simple multi-party constructions
//! possible, and it avoids signature malleability by forcing the nonce
//! point's y-coordinate to be a quadratic residue instead of
//! transmitting it.
//!
//! The curve and the challenge hash live in an [`Ssa`] context;
//! [`Ssa::default`] is the scheme proper (secp256k1 with SHA-256).
//! Because curve parameters are runtime values, the same algebra is
//! exercised on hand-checkable toy groups in the tests.
//!
//! # Example
//!
//! ```
//! use ecssa::Ssa;
//! use sha2::{Digest, Sha256};
//!
//! // Generate a key pair on the default context
//! let ssa = Ssa::default();
//! let mut rng = rand::rng();
//! let (prvkey, pubkey) = ssa.keypair(&mut rng).expect("keypair");
//!
//! // The scheme signs a message hash digest, not the raw message
//! let mhd = Sha256::digest(b"Hello, Schnorr!");
//!
//! // Sign deterministically (RFC 6979 nonce)
//! let sig = ssa.sign(&mhd, &prvkey, None).expect("sign");
//!
//! // Verify the signature
//! assert!(ssa.verify(&mhd, &pubkey, &sig));
//! ```
//!
//! # Security Considerations
//!
//! - Never reuse an ephemeral key and never use a predictable one: one
//!   nonce reused across two messages reveals the private key. Passing
//!   `None` derives the nonce per RFC 6979, which is safe.
//! - [`Ssa::verify`] and [`Ssa::batch_verify`] are boolean boundaries:
//!   they never panic and collapse malformed inputs to `false`.
//! - A failed batch does not identify the offending signature; fall
//!   back to per-signature verification to locate it.
//! - Nothing here attempts constant-time execution; big-integer
//!   arithmetic leaks timing. Do not use this crate where side channels
//!   are part of the threat model.

mod batch;
mod context;
mod errors;
mod keys;
mod nonce;
mod recover;
mod sign;
mod signatures;
mod verify;


pub use context::Ssa;
pub use errors::Error;
pub use signatures::Signature;
