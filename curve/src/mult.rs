//! Scalar multiplication.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::affine::Point;
use crate::curve::Curve;
use crate::errors::CurveError;
use crate::jacobian::JacPoint;

impl Curve {
    /// m * Q by double-and-add over Jacobian coordinates.
    ///
    /// The scalar is reduced mod n first, so any non-negative integer is
    /// accepted.
    pub fn scalar_mul(&self, m: &BigUint, q: &JacPoint) -> JacPoint {
        let mut m = m % &self.n;
        if q.is_infinity() {
            return JacPoint::infinity();
        }

        let mut result = JacPoint::infinity();
        let mut temp = q.clone();
        while !m.is_zero() {
            if m.bit(0) {
                result = self.jac_add(&result, &temp);
            }
            temp = self.jac_double(&temp);
            m >>= 1u32;
        }
        result
    }

    /// u * H + v * Q in one Strauss-Shamir pass.
    ///
    /// Sharing the doublings almost halves the work of two separate
    /// multiplications, which is what verification spends its time on.
    pub fn double_scalar_mul(
        &self,
        u: &BigUint,
        h: &JacPoint,
        v: &BigUint,
        q: &JacPoint,
    ) -> JacPoint {
        let u = u % &self.n;
        let v = v % &self.n;
        if u.is_zero() || h.is_infinity() {
            return self.scalar_mul(&v, q);
        }
        if v.is_zero() || q.is_infinity() {
            return self.scalar_mul(&u, h);
        }

        let hq = self.jac_add(h, q);
        let top = u.bits().max(v.bits());
        let mut result = JacPoint::infinity();
        for i in (0..top).rev() {
            result = self.jac_double(&result);
            match (u.bit(i), v.bit(i)) {
                (true, true) => result = self.jac_add(&result, &hq),
                (true, false) => result = self.jac_add(&result, h),
                (false, true) => result = self.jac_add(&result, q),
                (false, false) => {}
            }
        }
        result
    }

    /// m * G in affine coordinates.
    pub fn mul_generator(&self, m: &BigUint) -> Result<Point, CurveError> {
        self.to_affine(&self.scalar_mul(m, &self.gj))
    }

    /// m * Q in affine coordinates.
    pub fn mul_point(&self, m: &BigUint, q: &Point) -> Result<Point, CurveError> {
        self.to_affine(&self.scalar_mul(m, &JacPoint::from_affine(q)))
    }

    /// u * H + v * Q in affine coordinates.
    pub fn double_mul_point(
        &self,
        u: &BigUint,
        h: &Point,
        v: &BigUint,
        q: &Point,
    ) -> Result<Point, CurveError> {
        let r = self.double_scalar_mul(
            u,
            &JacPoint::from_affine(h),
            v,
            &JacPoint::from_affine(q),
        );
        self.to_affine(&r)
    }
}
