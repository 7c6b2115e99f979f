//! Key generation.

use curve::Point;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::CryptoRng;

use crate::context::Ssa;
use crate::errors::Error;

impl<D> Ssa<'_, D> {
    /// Generate a key pair: a uniform private key in [1, n-1] and its
    /// public point.
    ///
    /// # Example
    ///
    /// ```
    /// use ecssa::Ssa;
    ///
    /// let ssa = Ssa::default();
    /// let (prvkey, pubkey) = ssa.keypair(&mut rand::rng()).expect("keypair");
    /// assert_eq!(pubkey, ssa.pubkey(&prvkey).expect("pubkey"));
    /// ```
    pub fn keypair<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<(BigUint, Point), Error> {
        Ok(self.curve().keypair(rng)?)
    }

    /// The public point of a private key, rejecting keys outside
    /// [1, n-1].
    pub fn pubkey(&self, prvkey: &BigUint) -> Result<Point, Error> {
        let ec = self.curve();
        if prvkey.is_zero() || prvkey >= ec.order() {
            return Err(Error::KeyRange {
                role: "private",
                key: prvkey.clone(),
            });
        }
        Ok(ec.mul_generator(prvkey)?)
    }
}
