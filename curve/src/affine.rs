//! Affine points.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Affine point on a short Weierstrass curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// The x-coordinate of the point
    pub x: BigUint,
    /// The y-coordinate of the point
    pub y: BigUint,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Point {
    /// Create a new affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point {
            x,
            y,
            is_infinity: false,
        }
    }

    /// The point at infinity (identity element).
    ///
    /// The coordinates of an infinite point are zero and carry no meaning.
    pub fn infinity() -> Self {
        Point {
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_infinity: true,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity() {
        let inf = Point::infinity();
        assert!(inf.is_infinity());
        assert_eq!(inf, Point::infinity());
    }

    #[test]
    fn test_finite_point() {
        let p = Point::new(BigUint::from(0u32), BigUint::from(0u32));
        assert!(!p.is_infinity());
        assert_ne!(p, Point::infinity());
    }
}
