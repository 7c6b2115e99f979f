//! Short Weierstrass curves over prime fields, with runtime domain
//! parameters.
//!
//! A [`Curve`] bundles the field prime, the equation coefficients, the
//! base point and its order, and a handful of precomputed facts (byte
//! sizes, p mod 4). All group operations hang off it, so the same code
//! serves secp256k1, secp256r1, and small test curves alike.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::affine::Point;
use crate::errors::CurveError;
use crate::jacobian::JacPoint;
use crate::modular::{mod_inv, mod_sqrt, sub_mod};

/// Elliptic curve y^2 = x^3 + a*x + b over GF(p), with base point G of
/// order n and cofactor h.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    pub(crate) p: BigUint,
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
    pub(crate) g: Point,
    pub(crate) gj: JacPoint,
    pub(crate) n: BigUint,
    pub(crate) h: u32,
    pub(crate) nlen: u64,
    pub(crate) nsize: usize,
    pub(crate) psize: usize,
    pub(crate) p_is_three_mod_four: bool,
}

impl Curve {
    /// Build a curve from its domain parameters.
    ///
    /// Rejects even or tiny primes, singular equations, off-curve base
    /// points, and (n, h) pairs outside the Hasse interval. Primality of
    /// p and n is the caller's responsibility.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        g: (BigUint, BigUint),
        n: BigUint,
        h: u32,
    ) -> Result<Self, CurveError> {
        if p <= BigUint::from(3u32) || !p.bit(0) {
            return Err(CurveError::InvalidParams("p must be an odd prime above 3"));
        }
        if a >= p || b >= p {
            return Err(CurveError::InvalidParams("a and b must be reduced mod p"));
        }
        // 4a^3 + 27b^2 != 0 rules out singular curves
        let discriminant =
            (4u32 * a.modpow(&BigUint::from(3u32), &p) + 27u32 * &b * &b) % &p;
        if discriminant.is_zero() {
            return Err(CurveError::InvalidParams("zero discriminant"));
        }

        if n <= BigUint::one() {
            return Err(CurveError::InvalidParams("n must be above 1"));
        }
        if h < 1 {
            return Err(CurveError::InvalidParams("h must be at least 1"));
        }
        // Hasse bound: |n*h - (p + 1)| <= 2*sqrt(p)
        let group_order = &n * h;
        let p1 = &p + 1u32;
        let gap = if group_order >= p1 {
            &group_order - &p1
        } else {
            &p1 - &group_order
        };
        if &gap * &gap > 4u32 * &p {
            return Err(CurveError::InvalidParams("n and h violate the Hasse bound"));
        }

        let nlen = n.bits();
        let psize = p.bits().div_ceil(8) as usize;
        let p_is_three_mod_four = (&p % 4u32) == BigUint::from(3u32);

        let curve = Curve {
            nsize: nlen.div_ceil(8) as usize,
            nlen,
            psize,
            p_is_three_mod_four,
            g: Point::new(g.0, g.1),
            gj: JacPoint::infinity(),
            p,
            a,
            b,
            n,
            h,
        };
        if !curve.is_on_curve(&curve.g) {
            return Err(CurveError::NotOnCurve);
        }
        Ok(Curve {
            gj: JacPoint::from_affine(&curve.g),
            ..curve
        })
    }

    /// The field prime p.
    #[inline]
    pub fn prime(&self) -> &BigUint {
        &self.p
    }

    /// The order n of the base point.
    #[inline]
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// The base point G.
    #[inline]
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// The base point G in Jacobian coordinates.
    #[inline]
    pub fn generator_jac(&self) -> &JacPoint {
        &self.gj
    }

    /// The cofactor h.
    #[inline]
    pub fn cofactor(&self) -> u32 {
        self.h
    }

    /// Bit length of n.
    #[inline]
    pub fn nlen(&self) -> u64 {
        self.nlen
    }

    /// Byte length of n.
    #[inline]
    pub fn nsize(&self) -> usize {
        self.nsize
    }

    /// Byte length of p.
    #[inline]
    pub fn psize(&self) -> usize {
        self.psize
    }

    /// Whether p = 3 (mod 4), the precondition for residue-based root
    /// selection.
    #[inline]
    pub fn p_is_three_mod_four(&self) -> bool {
        self.p_is_three_mod_four
    }

    /// Right-hand side of the curve equation: (x^3 + a*x + b) mod p.
    pub(crate) fn y2(&self, x: &BigUint) -> BigUint {
        ((x * x % &self.p) * x + &self.a * x + &self.b) % &self.p
    }

    /// Check the curve equation; the point at infinity counts as on-curve.
    /// Finite points must carry canonical (reduced) coordinates.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        if point.is_infinity() {
            return true;
        }
        if point.x >= self.p || point.y >= self.p {
            return false;
        }
        &point.y * &point.y % &self.p == self.y2(&point.x)
    }

    /// Error out unless `point` satisfies the curve equation.
    pub fn require_on_curve(&self, point: &Point) -> Result<(), CurveError> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    /// A root y of the curve equation at `x`, if one exists.
    ///
    /// For p = 3 (mod 4) the returned root is always the quadratic
    /// residue; for other primes either root may come back.
    pub fn y(&self, x: &BigUint) -> Result<BigUint, CurveError> {
        if *x >= self.p {
            return Err(CurveError::NoRoot(x.clone()));
        }
        mod_sqrt(&self.y2(x), &self.p).map_err(|_| CurveError::NoRoot(x.clone()))
    }

    /// The root at `x` that is itself a quadratic residue.
    ///
    /// Only defined for p = 3 (mod 4), where exactly one of the two
    /// roots is a residue (unless y = 0).
    pub fn y_quadratic_residue(&self, x: &BigUint) -> Result<BigUint, CurveError> {
        if !self.p_is_three_mod_four {
            return Err(CurveError::InvalidParams(
                "residue root selection requires p = 3 (mod 4)",
            ));
        }
        self.y(x)
    }

    /// The root at `x` with the requested parity.
    pub fn y_odd(&self, x: &BigUint, odd: bool) -> Result<BigUint, CurveError> {
        let y = self.y(x)?;
        if y.is_zero() {
            return if odd {
                Err(CurveError::NoRoot(x.clone()))
            } else {
                Ok(y)
            };
        }
        if y.bit(0) == odd {
            Ok(y)
        } else {
            Ok(&self.p - y)
        }
    }

    /// The point at `x`, selecting the root by residue preference.
    ///
    /// Only defined for p = 3 (mod 4).
    pub fn point_from_x(&self, x: &BigUint, prefer_residue: bool) -> Result<Point, CurveError> {
        let y = self.y_quadratic_residue(x)?;
        let y = if prefer_residue || y.is_zero() {
            y
        } else {
            &self.p - y
        };
        Ok(Point::new(x.clone(), y))
    }

    /// Affine point addition.
    pub fn add(&self, p1: &Point, p2: &Point) -> Result<Point, CurveError> {
        if p1.is_infinity() {
            return Ok(p2.clone());
        }
        if p2.is_infinity() {
            return Ok(p1.clone());
        }

        if p1.x == p2.x {
            if p1.y != p2.y {
                // points are inverses
                return Ok(Point::infinity());
            }
            return self.double(p1);
        }

        // lambda = (y2 - y1) / (x2 - x1)
        let numerator = sub_mod(&p2.y, &p1.y, &self.p);
        let denominator = sub_mod(&p2.x, &p1.x, &self.p);
        let lambda = numerator * mod_inv(&denominator, &self.p)? % &self.p;

        let x3 = sub_mod(&(&lambda * &lambda), &(&p1.x + &p2.x), &self.p);
        let y3 = sub_mod(&(lambda * sub_mod(&p1.x, &x3, &self.p)), &p1.y, &self.p);
        Ok(Point::new(x3, y3))
    }

    /// Affine point doubling.
    pub fn double(&self, point: &Point) -> Result<Point, CurveError> {
        if point.is_infinity() {
            return Ok(point.clone());
        }
        if point.y.is_zero() {
            // 2-torsion
            return Ok(Point::infinity());
        }

        // lambda = (3x^2 + a) / (2y)
        let numerator = (3u32 * &point.x * &point.x + &self.a) % &self.p;
        let denominator = 2u32 * &point.y % &self.p;
        let lambda = numerator * mod_inv(&denominator, &self.p)? % &self.p;

        let x3 = sub_mod(&(&lambda * &lambda), &(2u32 * &point.x), &self.p);
        let y3 = sub_mod(&(lambda * sub_mod(&point.x, &x3, &self.p)), &point.y, &self.p);
        Ok(Point::new(x3, y3))
    }

    /// Affine point negation.
    pub fn negate(&self, point: &Point) -> Point {
        if point.is_infinity() || point.y.is_zero() {
            return point.clone();
        }
        Point::new(point.x.clone(), &self.p - &point.y)
    }

    /// Jacobian point doubling.
    pub fn jac_double(&self, q: &JacPoint) -> JacPoint {
        if q.is_infinity() || q.y.is_zero() {
            return JacPoint::infinity();
        }

        let p = &self.p;
        let y2 = &q.y * &q.y % p;
        let s = 4u32 * &q.x * &y2 % p;
        let z2 = &q.z * &q.z % p;
        let m = (3u32 * &q.x * &q.x + &self.a * &z2 * &z2) % p;

        let x3 = sub_mod(&(&m * &m), &(2u32 * &s), p);
        let y3 = sub_mod(&(&m * sub_mod(&s, &x3, p)), &(8u32 * &y2 * &y2), p);
        let z3 = 2u32 * &q.y * &q.z % p;
        JacPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Jacobian point addition.
    pub fn jac_add(&self, q1: &JacPoint, q2: &JacPoint) -> JacPoint {
        if q1.is_infinity() {
            return q2.clone();
        }
        if q2.is_infinity() {
            return q1.clone();
        }

        let p = &self.p;
        let z1z1 = &q1.z * &q1.z % p;
        let z2z2 = &q2.z * &q2.z % p;
        let u1 = &q1.x * &z2z2 % p;
        let u2 = &q2.x * &z1z1 % p;
        let s1 = &q1.y * &z2z2 % p * &q2.z % p;
        let s2 = &q2.y * &z1z1 % p * &q1.z % p;

        if u1 == u2 {
            if s1 != s2 {
                // same x, opposite y
                return JacPoint::infinity();
            }
            return self.jac_double(q1);
        }

        let h = sub_mod(&u2, &u1, p);
        let r = sub_mod(&s2, &s1, p);
        let h2 = &h * &h % p;
        let h3 = &h2 * &h % p;
        let u1h2 = &u1 * &h2 % p;

        let x3 = sub_mod(&sub_mod(&(&r * &r), &h3, p), &(2u32 * &u1h2), p);
        let y3 = sub_mod(&(&r * sub_mod(&u1h2, &x3, p)), &(&s1 * &h3), p);
        let z3 = &q1.z * &q2.z % p * &h % p;
        JacPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Project a Jacobian point back to affine coordinates. This is the
    /// only place the group law pays for a field inversion.
    pub fn to_affine(&self, q: &JacPoint) -> Result<Point, CurveError> {
        if q.is_infinity() {
            return Ok(Point::infinity());
        }
        let z_inv = mod_inv(&q.z, &self.p)?;
        let z_inv2 = &z_inv * &z_inv % &self.p;
        let x = &q.x * &z_inv2 % &self.p;
        let y = &q.y * &z_inv2 % &self.p * &z_inv % &self.p;
        Ok(Point::new(x, y))
    }
}

/// y^2 = x^3 + x + 1 over GF(23): 28 points, G = (0, 1) generates the
/// whole group.
#[cfg(test)]
pub(crate) fn curve23() -> Curve {
    Curve::new(
        BigUint::from(23u32),
        BigUint::from(1u32),
        BigUint::from(1u32),
        (BigUint::from(0u32), BigUint::from(1u32)),
        BigUint::from(28u32),
        1,
    )
    .expect("valid test curve")
}
