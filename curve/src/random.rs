//! Random scalars and key pairs.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::CryptoRng;

use crate::affine::Point;
use crate::curve::Curve;
use crate::errors::CurveError;

impl Curve {
    /// Uniform random scalar in [1, n-1].
    ///
    /// Rejection sampling over the top `nlen` bits keeps the draw
    /// unbiased; for curves with n close to a power of two almost every
    /// draw is accepted.
    pub fn random_scalar<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint {
        let excess = 8 * self.nsize as u64 - self.nlen;
        loop {
            let mut buf = vec![0u8; self.nsize];
            rng.fill_bytes(&mut buf);
            let candidate = BigUint::from_bytes_be(&buf) >> excess;
            if !candidate.is_zero() && candidate < self.n {
                return candidate;
            }
        }
    }

    /// Random key pair: a private scalar and its public point.
    pub fn keypair<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(BigUint, Point), CurveError> {
        let d = self.random_scalar(rng);
        let pubkey = self.mul_generator(&d)?;
        Ok((d, pubkey))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::curve23;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_scalar_range() {
        let ec = curve23();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let k = ec.random_scalar(&mut rng);
            assert!(!k.is_zero());
            assert!(k < *ec.order());
            seen.insert(k);
        }
        // with n = 28 and 200 draws, most residues should show up
        assert!(seen.len() > 20);
    }

    #[test]
    fn test_keypair_on_curve() {
        let ec = curve23();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let (d, pubkey) = ec.keypair(&mut rng).expect("keypair");
            assert!(!pubkey.is_infinity());
            assert!(ec.is_on_curve(&pubkey));
            assert_eq!(pubkey, ec.mul_generator(&d).expect("affine"));
        }
    }
}
