//! Word lists for mnemonic encoding.

use crate::errors::MnemonicError;

/// Number of words a valid list must hold.
pub const WORDLIST_SIZE: usize = 2048;

/// Bits encoded by one word: log2 of the list size.
pub const BITS_PER_WORD: usize = 11;

/// A 2048-word list mapping 11-bit indexes to words and back.
///
/// No list ships with the crate: the standard BIP39 English list, or
/// any other 2048-word list, is loaded by the caller.
#[derive(Clone, Debug)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Load a list from whitespace-separated text, one word per entry.
    pub fn from_text(text: &str) -> Result<Self, MnemonicError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        Self::from_words(&words)
    }

    /// Build a list from word slices, in index order.
    pub fn from_words(words: &[&str]) -> Result<Self, MnemonicError> {
        if words.len() != WORDLIST_SIZE {
            return Err(MnemonicError::WordlistSize(words.len()));
        }
        let mut sorted = words.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != WORDLIST_SIZE {
            return Err(MnemonicError::DuplicateWords);
        }
        Ok(Wordlist {
            words: words.iter().map(|word| word.to_string()).collect(),
        })
    }

    /// The word at `index`.
    pub fn word(&self, index: usize) -> Result<&str, MnemonicError> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(MnemonicError::WordIndex(index))
    }

    /// The index of `word`.
    pub fn index(&self, word: &str) -> Result<usize, MnemonicError> {
        self.words
            .iter()
            .position(|w| w == word)
            .ok_or_else(|| MnemonicError::UnknownWord(word.to_string()))
    }
}

/// Synthetic sorted list ("w0000" .. "w2047") for tests that need a
/// valid list without embedding the standard one.
#[cfg(test)]
pub(crate) fn test_wordlist() -> Wordlist {
    let words: Vec<String> = (0..WORDLIST_SIZE).map(|i| format!("w{i:04}")).collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    Wordlist::from_words(&refs).expect("valid synthetic wordlist")
}
