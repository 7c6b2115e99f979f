//! Seed derivation.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;

/// Width of a derived seed, in bytes.
pub const SEED_SIZE: usize = 64;

/// PBKDF2 iteration count fixed by both mnemonic schemes.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// PBKDF2-HMAC-SHA512 with caller-chosen iterations.
pub fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], iterations: u32, dk: &mut [u8]) {
    pbkdf2::<Hmac<Sha512>>(password, salt, iterations, dk);
}

/// The schemes' seed derivation: fixed rounds, fixed width.
pub(crate) fn seed(password: &[u8], salt: &[u8]) -> [u8; SEED_SIZE] {
    let mut seed = [0u8; SEED_SIZE];
    pbkdf2_hmac_sha512(password, salt, PBKDF2_ROUNDS, &mut seed);
    seed
}
