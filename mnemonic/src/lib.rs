//! BIP39 and Electrum mnemonic sentences.
//!
//! Both schemes map entropy to a sentence of 11-bit words and derive a
//! 64-byte seed from the sentence with PBKDF2-HMAC-SHA512 at 2048
//! rounds; they differ in how a sentence proves its own validity. BIP39
//! appends a SHA-256 checksum to the entropy before encoding; Electrum
//! keeps searching entropy values until the HMAC tag of the resulting
//! sentence starts with the wanted version prefix.
//!
//! The standard English word list is an input, not a constant: load it
//! with [`Wordlist::from_text`] or [`Wordlist::from_words`].
//!
//! # Example
//!
//! ```
//! use mnemonic::{bip39, Wordlist};
//!
//! // any 2048-word list works; the standard one is just the best known
//! let words: Vec<String> = (0..2048).map(|i| format!("w{i:04}")).collect();
//! let refs: Vec<&str> = words.iter().map(String::as_str).collect();
//! let wordlist = Wordlist::from_words(&refs).expect("wordlist");
//!
//! let entropy = [0x99u8; 16];
//! let sentence = bip39::mnemonic_from_entropy(&entropy, &wordlist).expect("mnemonic");
//! let back = bip39::entropy_from_mnemonic(&sentence, &wordlist).expect("entropy");
//! assert_eq!(back, entropy);
//!
//! let seed = bip39::seed_from_mnemonic(&sentence, "passphrase", Some(&wordlist)).expect("seed");
//! assert_eq!(seed.len(), mnemonic::SEED_SIZE);
//! ```

pub mod bip39;
pub mod electrum;

mod entropy;
mod errors;
mod kdf;
mod wordlist;

pub use errors::MnemonicError;
pub use kdf::{pbkdf2_hmac_sha512, PBKDF2_ROUNDS, SEED_SIZE};
pub use wordlist::{Wordlist, BITS_PER_WORD, WORDLIST_SIZE};
