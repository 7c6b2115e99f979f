//! Elliptic curve groups over prime fields, parameterized at runtime.
//!
//! This crate provides affine and Jacobian curve points, the group law
//! and scalar multiplication for short Weierstrass curves, modular
//! arithmetic helpers, SEC 1 octet encodings, and the secp256k1 and
//! secp256r1 domain parameters. Curve parameters live in [`Curve`]
//! values rather than in types, so small hand-checkable test curves run
//! through exactly the same code paths as the production curves.

mod affine;
mod curve;
mod encode;
mod errors;
mod jacobian;
mod modular;
mod msm;
mod mult;
mod params;
mod random;

pub use affine::Point;
pub use curve::Curve;
pub use encode::{
    int_from_bits, int_from_octets, octets_from_int, octets_from_point, point_from_octets,
};
pub use errors::CurveError;
pub use jacobian::JacPoint;
pub use modular::{legendre_symbol, mod_inv, mod_sqrt, sub_mod};
pub use params::{SECP256K1, SECP256R1};
