//! 11-bit index packing shared by the BIP39 and Electrum schemes.

use num_bigint::BigUint;

use crate::wordlist::{BITS_PER_WORD, WORDLIST_SIZE};

/// Split `value`, read as an `nbits`-wide big-endian bit string, into
/// 11-bit word indexes, leftmost bits first. Short values keep their
/// leading zero indexes.
pub(crate) fn indexes_from_bits(value: &BigUint, nbits: usize) -> Vec<usize> {
    let slots = nbits.div_ceil(BITS_PER_WORD);
    let mut indexes = vec![0usize; slots];
    let mut value = value.clone();
    let size = BigUint::from(WORDLIST_SIZE);
    for slot in indexes.iter_mut().rev() {
        let digit = &value % &size;
        *slot = digit.to_u64_digits().first().copied().unwrap_or(0) as usize;
        value >>= BITS_PER_WORD;
    }
    indexes
}

/// Reassemble word indexes into the packed integer, leftmost first.
pub(crate) fn bits_from_indexes(indexes: &[usize]) -> BigUint {
    let mut value = BigUint::from(0u32);
    for &index in indexes {
        value = (value << BITS_PER_WORD) + index;
    }
    value
}

/// Fixed-width big-endian bytes of `value`; the caller keeps the value
/// below 2^(8*size).
pub(crate) fn bytes_from_int(value: &BigUint, size: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; size - bytes.len().min(size)];
    out.extend_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_round_trip() {
        for indexes in [
            vec![0usize; 12],
            vec![2047usize; 12],
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 2047],
        ] {
            let value = bits_from_indexes(&indexes);
            assert_eq!(indexes_from_bits(&value, indexes.len() * 11), indexes);
        }
    }

    #[test]
    fn test_leading_zero_indexes_kept() {
        // value 5 in a 33-bit string is three indexes: [0, 0, 5]
        let indexes = indexes_from_bits(&BigUint::from(5u32), 33);
        assert_eq!(indexes, vec![0, 0, 5]);
    }

    #[test]
    fn test_partial_leading_slot() {
        // 12 bits split as 1 + 11: the leading index holds the top bit
        let value = BigUint::from(0b1_00000000001u32);
        assert_eq!(indexes_from_bits(&value, 12), vec![1, 1]);
    }

    #[test]
    fn test_bytes_from_int() {
        assert_eq!(bytes_from_int(&BigUint::from(0u32), 4), vec![0, 0, 0, 0]);
        assert_eq!(
            bytes_from_int(&BigUint::from(0x0102u32), 4),
            vec![0, 0, 1, 2]
        );
    }
}
