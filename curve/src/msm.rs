//! Multi-scalar multiplication.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::curve::Curve;
use crate::errors::CurveError;
use crate::jacobian::JacPoint;

/// Heap entry ordered by scalar magnitude only.
struct Entry {
    scalar: BigUint,
    point: JacPoint,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.scalar == other.scalar
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scalar.cmp(&other.scalar)
    }
}

impl Curve {
    /// Sum of m_i * Q_i by Bos-Coster.
    ///
    /// The two largest scalars are repeatedly merged: m1 * Q1 + m2 * Q2 =
    /// (m1 - m2) * Q1 + m2 * (Q1 + Q2) for m1 >= m2, so scalars shrink
    /// while only one addition per round is paid. Zero scalars contribute
    /// nothing and are dropped up front.
    pub fn multi_scalar_mul(
        &self,
        scalars: &[BigUint],
        points: &[JacPoint],
    ) -> Result<JacPoint, CurveError> {
        if scalars.len() != points.len() {
            return Err(CurveError::LengthMismatch(scalars.len(), points.len()));
        }

        let mut heap = BinaryHeap::with_capacity(scalars.len());
        for (scalar, point) in scalars.iter().zip(points) {
            if scalar.is_zero() || point.is_infinity() {
                continue;
            }
            heap.push(Entry {
                scalar: scalar.clone(),
                point: point.clone(),
            });
        }

        while heap.len() > 1 {
            let Some(first) = heap.pop() else { break };
            let Some(second) = heap.pop() else { break };

            let merged = self.jac_add(&first.point, &second.point);
            let reduced = first.scalar - &second.scalar;
            if !reduced.is_zero() {
                heap.push(Entry {
                    scalar: reduced,
                    point: first.point,
                });
            }
            heap.push(Entry {
                scalar: second.scalar,
                point: merged,
            });
        }

        match heap.pop() {
            Some(last) => Ok(self.scalar_mul(&last.scalar, &last.point)),
            None => Ok(JacPoint::infinity()),
        }
    }
}
