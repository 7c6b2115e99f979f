//! Error types for mnemonic handling.

use thiserror::Error;

/// Errors raised by word list handling and by the BIP39 and Electrum
/// conversion functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MnemonicError {
    /// A word list that does not hold exactly 2048 words.
    #[error("wordlist must hold 2048 words, got {0}")]
    WordlistSize(usize),

    /// A word list with repeated words, which would make word lookup
    /// ambiguous.
    #[error("wordlist contains duplicate words")]
    DuplicateWords,

    /// A sentence word that is not in the word list.
    #[error("unknown word ({0})")]
    UnknownWord(String),

    /// A word index outside the list.
    #[error("word index out of range ({0})")]
    WordIndex(usize),

    /// Entropy of a size BIP39 does not allow.
    #[error("invalid number of entropy bits ({0}); expected: 128, 160, 192, 224, or 256")]
    EntropySize(usize),

    /// A sentence with a word count BIP39 does not allow.
    #[error("mnemonic with wrong number of words ({0}); expected: 12, 15, 18, 21, or 24")]
    WordCount(usize),

    /// A BIP39 sentence whose embedded checksum does not match its
    /// entropy.
    #[error("invalid mnemonic checksum ({got:#x}); expected: {expected:#x}")]
    Checksum { got: u8, expected: u8 },

    /// An Electrum sentence whose version tag matches no known version.
    #[error("unknown electrum mnemonic version ({0})")]
    UnknownVersion(String),
}
