//! Electrum entropy / mnemonic / seed functions.
//!
//! An Electrum mnemonic is versioned: a sentence is valid when the
//! HMAC-SHA512 of the sentence itself, keyed with "Seed version",
//! starts with a known hex tag. The tag also conveys the wallet kind
//! the mnemonic is meant for.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha2::Sha512;

use crate::entropy::{bits_from_indexes, indexes_from_bits};
use crate::errors::MnemonicError;
use crate::kdf::{seed, SEED_SIZE};
use crate::wordlist::Wordlist;

/// Electrum mnemonic versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    /// P2PKH and multisig P2SH wallets.
    Standard,
    /// P2WPKH and P2WSH wallets.
    Segwit,
    /// Two-factor authenticated wallets.
    TwoFa,
    /// Two-factor authenticated wallets, using segwit.
    TwoFaSegwit,
}

impl Version {
    /// Every version, in tag-matching order.
    pub const ALL: [Version; 4] = [
        Version::Standard,
        Version::Segwit,
        Version::TwoFa,
        Version::TwoFaSegwit,
    ];

    /// The hex prefix that marks this version in the seed tag.
    pub fn prefix(self) -> &'static str {
        match self {
            Version::Standard => "01",
            Version::Segwit => "100",
            Version::TwoFa => "101",
            Version::TwoFaSegwit => "102",
        }
    }
}

/// Hex tag of a sentence: HMAC-SHA512(key = "Seed version", sentence).
fn version_tag(mnemonic: &str) -> String {
    let mut mac =
        Hmac::<Sha512>::new_from_slice(b"Seed version").expect("HMAC accepts any key size");
    mac.update(mnemonic.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// The version embedded in a mnemonic sentence.
pub fn version_from_mnemonic(mnemonic: &str) -> Result<Version, MnemonicError> {
    let tag = version_tag(mnemonic);
    for version in Version::ALL {
        if tag.starts_with(version.prefix()) {
            return Ok(version);
        }
    }
    Err(MnemonicError::UnknownVersion(tag[..3].to_string()))
}

/// Convert entropy to a versioned mnemonic sentence.
///
/// Electrum treats entropy as an integer, so leading zeros are lost;
/// the value is incremented until the sentence's tag carries the
/// requested version, which takes a few hundred trials on average.
pub fn mnemonic_from_entropy(
    version: Version,
    entropy: &BigUint,
    wordlist: &Wordlist,
) -> Result<String, MnemonicError> {
    let mut value = entropy.clone();
    loop {
        let nbits = value.bits() as usize;
        let indexes = indexes_from_bits(&value, nbits);
        let mut words = Vec::with_capacity(indexes.len());
        for index in indexes {
            words.push(wordlist.word(index)?);
        }
        let mnemonic = words.join(" ");
        if version_tag(&mnemonic).starts_with(version.prefix()) {
            return Ok(mnemonic);
        }
        value += 1u32;
    }
}

/// Convert a versioned mnemonic sentence back to its entropy integer.
pub fn entropy_from_mnemonic(
    mnemonic: &str,
    wordlist: &Wordlist,
) -> Result<BigUint, MnemonicError> {
    version_from_mnemonic(mnemonic)?;
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    let mut indexes = Vec::with_capacity(words.len());
    for word in words {
        indexes.push(wordlist.index(word)?);
    }
    Ok(bits_from_indexes(&indexes))
}

/// Derive (version, seed):
/// PBKDF2-HMAC-SHA512(mnemonic, "electrum" + passphrase, 2048 rounds).
pub fn seed_from_mnemonic(
    mnemonic: &str,
    passphrase: &str,
) -> Result<(Version, [u8; SEED_SIZE]), MnemonicError> {
    let version = version_from_mnemonic(mnemonic)?;
    let salt = format!("electrum{passphrase}");
    Ok((version, seed(mnemonic.as_bytes(), salt.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::{pbkdf2_hmac_sha512, PBKDF2_ROUNDS};
    use crate::wordlist::test_wordlist;

    #[test]
    fn test_version_prefixes() {
        assert_eq!(Version::Standard.prefix(), "01");
        assert_eq!(Version::Segwit.prefix(), "100");
        assert_eq!(Version::TwoFa.prefix(), "101");
        assert_eq!(Version::TwoFaSegwit.prefix(), "102");
    }

    #[test]
    fn test_entropy_round_trip() {
        let wordlist = test_wordlist();
        let start = BigUint::from(0x1234_5678_9abc_def0u64);

        let sentence =
            mnemonic_from_entropy(Version::Standard, &start, &wordlist).expect("mnemonic");
        assert_eq!(
            version_from_mnemonic(&sentence).expect("version"),
            Version::Standard
        );

        // the search only moves forward from the requested entropy;
        // from this start it settles 196 increments later
        let found = entropy_from_mnemonic(&sentence, &wordlist).expect("entropy");
        assert_eq!(found, BigUint::from(0x1234_5678_9abc_dfb4u64));

        // at the found value the search is a fixed point
        let again = mnemonic_from_entropy(Version::Standard, &found, &wordlist).expect("mnemonic");
        assert_eq!(again, sentence);
    }

    #[test]
    fn test_segwit_version_search() {
        let wordlist = test_wordlist();
        let start = BigUint::from(0xdead_beefu32);
        let sentence = mnemonic_from_entropy(Version::Segwit, &start, &wordlist).expect("mnemonic");
        assert_eq!(sentence, "w0890 w1464 w0355");
        assert_eq!(
            version_from_mnemonic(&sentence).expect("version"),
            Version::Segwit
        );
        assert_eq!(
            entropy_from_mnemonic(&sentence, &wordlist).expect("entropy"),
            BigUint::from(0xdead_c163u32)
        );
    }

    #[test]
    fn test_unknown_version() {
        let err = version_from_mnemonic("zebra crossing").expect_err("unknown tag");
        assert!(matches!(err, MnemonicError::UnknownVersion(ref tag) if tag == "294"));

        // the version gate runs before any word lookup
        let wordlist = test_wordlist();
        let err = entropy_from_mnemonic("zebra crossing", &wordlist).expect_err("unknown tag");
        assert!(matches!(err, MnemonicError::UnknownVersion(_)));
    }

    #[test]
    fn test_seed_binds_version_and_salt() {
        let wordlist = test_wordlist();
        let start = BigUint::from(0x0bad_cafeu32);
        let sentence =
            mnemonic_from_entropy(Version::Standard, &start, &wordlist).expect("mnemonic");

        let (version, seed) = seed_from_mnemonic(&sentence, "pass").expect("seed");
        assert_eq!(version, Version::Standard);

        let mut expected = [0u8; SEED_SIZE];
        pbkdf2_hmac_sha512(
            sentence.as_bytes(),
            b"electrumpass",
            PBKDF2_ROUNDS,
            &mut expected,
        );
        assert_eq!(seed, expected);
    }
}
