//! Jacobian points.
//!
//! A Jacobian triple (X, Y, Z) with Z != 0 stands for the affine point
//! (X / Z^2, Y / Z^3); any triple with Z = 0 is the point at infinity.
//! Working in these coordinates keeps the group law inversion-free.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::affine::Point;

/// Jacobian point on a short Weierstrass curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JacPoint {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl JacPoint {
    /// The point at infinity, as the canonical triple (1, 1, 0).
    pub fn infinity() -> Self {
        JacPoint {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Lift an affine point to Jacobian coordinates (Z = 1).
    pub fn from_affine(p: &Point) -> Self {
        if p.is_infinity() {
            return Self::infinity();
        }
        JacPoint {
            x: p.x.clone(),
            y: p.y.clone(),
            z: BigUint::one(),
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity() {
        assert!(JacPoint::infinity().is_infinity());
        assert!(JacPoint::from_affine(&Point::infinity()).is_infinity());
    }

    #[test]
    fn test_from_affine() {
        let p = Point::new(BigUint::from(3u32), BigUint::from(5u32));
        let j = JacPoint::from_affine(&p);
        assert!(!j.is_infinity());
        assert_eq!(j.x, BigUint::from(3u32));
        assert_eq!(j.y, BigUint::from(5u32));
        assert_eq!(j.z, BigUint::from(1u32));
    }
}
