//! BIP39 entropy / mnemonic / seed functions.
//!
//! Checksummed entropy (ENT+CS) is converted from and to a mnemonic
//! sentence; the seed is PBKDF2 over the sentence itself, so it can be
//! derived even without the word list.
//!
//! | ENT | CS | ENT+CS | words |
//! |-----|----|--------|-------|
//! | 128 |  4 |    132 |    12 |
//! | 160 |  5 |    165 |    15 |
//! | 192 |  6 |    198 |    18 |
//! | 224 |  7 |    231 |    21 |
//! | 256 |  8 |    264 |    24 |

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::entropy::{bits_from_indexes, bytes_from_int, indexes_from_bits};
use crate::errors::MnemonicError;
use crate::kdf::{seed, SEED_SIZE};
use crate::wordlist::Wordlist;

/// Allowed entropy sizes, in bits.
pub const ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Leftmost ENT/32 bits of SHA256(entropy), right-aligned in the byte.
fn checksum(entropy: &[u8]) -> u8 {
    let digest = Sha256::digest(entropy);
    let checksum_bits = entropy.len() / 4;
    digest[0] >> (8 - checksum_bits)
}

/// Convert entropy to the checksummed mnemonic sentence.
pub fn mnemonic_from_entropy(
    entropy: &[u8],
    wordlist: &Wordlist,
) -> Result<String, MnemonicError> {
    let nbits = entropy.len() * 8;
    if !ENTROPY_BITS.contains(&nbits) {
        return Err(MnemonicError::EntropySize(nbits));
    }
    let checksum_bits = nbits / 32;

    let value = (BigUint::from_bytes_be(entropy) << checksum_bits) + checksum(entropy);
    let indexes = indexes_from_bits(&value, nbits + checksum_bits);

    let mut words = Vec::with_capacity(indexes.len());
    for index in indexes {
        words.push(wordlist.word(index)?);
    }
    Ok(words.join(" "))
}

/// Convert a mnemonic sentence back to its entropy, verifying the word
/// count and the checksum.
pub fn entropy_from_mnemonic(
    mnemonic: &str,
    wordlist: &Wordlist,
) -> Result<Vec<u8>, MnemonicError> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    let nbits = match words.len() {
        12 => 128,
        15 => 160,
        18 => 192,
        21 => 224,
        24 => 256,
        got => return Err(MnemonicError::WordCount(got)),
    };
    let checksum_bits = nbits / 32;

    let mut indexes = Vec::with_capacity(words.len());
    for word in words {
        indexes.push(wordlist.index(word)?);
    }
    let value = bits_from_indexes(&indexes);

    let mask = (BigUint::from(1u32) << checksum_bits) - 1u32;
    let got = (&value & &mask)
        .to_u64_digits()
        .first()
        .copied()
        .unwrap_or(0) as u8;
    let entropy = bytes_from_int(&(value >> checksum_bits), nbits / 8);

    let expected = checksum(&entropy);
    if got != expected {
        return Err(MnemonicError::Checksum { got, expected });
    }
    Ok(entropy)
}

/// Derive the 64-byte seed:
/// PBKDF2-HMAC-SHA512(mnemonic, "mnemonic" + passphrase, 2048 rounds).
///
/// With a word list the sentence's checksum is verified first; passing
/// `None` skips verification, since the KDF itself never needs the
/// list.
pub fn seed_from_mnemonic(
    mnemonic: &str,
    passphrase: &str,
    wordlist: Option<&Wordlist>,
) -> Result<[u8; SEED_SIZE], MnemonicError> {
    if let Some(wordlist) = wordlist {
        entropy_from_mnemonic(mnemonic, wordlist)?;
    }
    let salt = format!("mnemonic{passphrase}");
    Ok(seed(mnemonic.as_bytes(), salt.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::test_wordlist;

    #[test]
    fn test_round_trip_all_sizes() {
        let wordlist = test_wordlist();
        for nbits in ENTROPY_BITS {
            let entropy: Vec<u8> = (0..nbits / 8).map(|i| i as u8).collect();
            let sentence = mnemonic_from_entropy(&entropy, &wordlist).expect("mnemonic");
            assert_eq!(sentence.split_whitespace().count(), nbits * 33 / 32 / 11);
            let back = entropy_from_mnemonic(&sentence, &wordlist).expect("entropy");
            assert_eq!(back, entropy);
        }
    }

    #[test]
    fn test_zero_entropy_sentence() {
        // SHA256 of 16 zero bytes starts 0x3..., so the checksum nibble
        // is 3 and the sentence is eleven zero words plus the checksum
        // word.
        let wordlist = test_wordlist();
        let sentence = mnemonic_from_entropy(&[0u8; 16], &wordlist).expect("mnemonic");
        assert_eq!(
            sentence,
            "w0000 w0000 w0000 w0000 w0000 w0000 w0000 w0000 w0000 w0000 w0000 w0003"
        );
        let back = entropy_from_mnemonic(&sentence, &wordlist).expect("entropy");
        assert_eq!(back, vec![0u8; 16]);
    }

    #[test]
    fn test_rejects_checksum_mismatch() {
        // changing the first word changes the entropy but not the
        // stored checksum, so the embedded 3 no longer matches
        let wordlist = test_wordlist();
        let sentence =
            "w0001 w0000 w0000 w0000 w0000 w0000 w0000 w0000 w0000 w0000 w0000 w0003";
        let err = entropy_from_mnemonic(sentence, &wordlist).expect_err("checksum");
        assert!(matches!(err, MnemonicError::Checksum { got: 3, expected: 13 }));
    }

    #[test]
    fn test_trezor_vector_seed() {
        // BIP39 reference vector #1 (entropy 00...00, passphrase
        // "TREZOR"). The sentence uses the standard English list, which
        // is not embedded here, so checksum verification is skipped.
        let sentence = "abandon abandon abandon abandon abandon abandon abandon abandon \
                        abandon abandon abandon about";
        let seed = seed_from_mnemonic(sentence, "TREZOR", None).expect("seed");
        let expected = hex::decode(
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
             1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04",
        )
        .expect("hex");
        assert_eq!(seed, expected[..]);
    }

    #[test]
    fn test_rejects_bad_entropy_size() {
        let wordlist = test_wordlist();
        let err = mnemonic_from_entropy(&[0u8; 17], &wordlist).expect_err("136 bits");
        assert!(matches!(err, MnemonicError::EntropySize(136)));
    }

    #[test]
    fn test_rejects_bad_word_count() {
        let wordlist = test_wordlist();
        let sentence = vec!["w0000"; 13].join(" ");
        let err = entropy_from_mnemonic(&sentence, &wordlist).expect_err("13 words");
        assert!(matches!(err, MnemonicError::WordCount(13)));
    }

    #[test]
    fn test_rejects_unknown_word() {
        let wordlist = test_wordlist();
        let entropy = [0u8; 16];
        let mut sentence = mnemonic_from_entropy(&entropy, &wordlist).expect("mnemonic");
        sentence.push('x');
        let err = entropy_from_mnemonic(&sentence, &wordlist).expect_err("unknown word");
        assert!(matches!(err, MnemonicError::UnknownWord(_)));
    }

    #[test]
    fn test_seed_matching_kdf() {
        // The seed binds the sentence and the salted passphrase through
        // the KDF; recompute it directly to pin the salt prefix.
        let sentence = "w0001 w0002 w0003";
        let seed = seed_from_mnemonic(sentence, "pass", None).expect("seed");
        let mut expected = [0u8; SEED_SIZE];
        crate::kdf::pbkdf2_hmac_sha512(
            sentence.as_bytes(),
            b"mnemonicpass",
            crate::kdf::PBKDF2_ROUNDS,
            &mut expected,
        );
        assert_eq!(seed, expected);
    }

    #[test]
    fn test_seed_verifies_checksum_when_list_given() {
        let wordlist = test_wordlist();
        let entropy = [7u8; 16];
        let sentence = mnemonic_from_entropy(&entropy, &wordlist).expect("mnemonic");

        let with_list = seed_from_mnemonic(&sentence, "", Some(&wordlist)).expect("seed");
        let without = seed_from_mnemonic(&sentence, "", None).expect("seed");
        assert_eq!(with_list, without);

        let err = seed_from_mnemonic("w0000 w0000 w0000", "", Some(&wordlist))
            .expect_err("word count");
        assert!(matches!(err, MnemonicError::WordCount(3)));
    }
}
