//! Little-endian word conversions shared by the compression kernels.
//!
//! All word/byte conversions are little-endian regardless of host
//! endianness; short tails are zero-padded at word granularity.

use crate::params::{BLOCK_LEN, KEY_LEN};

/// Load up to 64 bytes into 16 little-endian message words.
///
/// Bytes beyond `bytes.len()` read as zero.
#[inline]
pub(crate) fn block_words(bytes: &[u8]) -> [u32; 16] {
    debug_assert!(bytes.len() <= BLOCK_LEN);
    let mut words = [0u32; 16];
    let mut whole = bytes.chunks_exact(4);
    for (word, four) in words.iter_mut().zip(whole.by_ref()) {
        *word = u32::from_le_bytes([four[0], four[1], four[2], four[3]]);
    }
    let tail = whole.remainder();
    if !tail.is_empty() {
        let mut last = [0u8; 4];
        last[..tail.len()].copy_from_slice(tail);
        words[bytes.len() / 4] = u32::from_le_bytes(last);
    }
    words
}

/// Load eight chaining-value words from 32 little-endian key bytes.
#[inline]
pub(crate) fn key_words(key: &[u8; KEY_LEN]) -> [u32; 8] {
    let mut words = [0u32; 8];
    for (word, four) in words.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_le_bytes([four[0], four[1], four[2], four[3]]);
    }
    words
}

/// Serialize words into `out` as little-endian, truncating the final word
/// if `out` is not word-aligned.
#[inline]
pub(crate) fn write_words_le(words: &[u32], out: &mut [u8]) {
    debug_assert!(out.len() <= 4 * words.len());
    for (word, slot) in words.iter().zip(out.chunks_mut(4)) {
        slot.copy_from_slice(&word.to_le_bytes()[..slot.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tail_is_zero_padded() {
        let words = block_words(&[0xaa, 0xbb, 0xcc, 0xdd, 0x01]);
        assert_eq!(words[0], 0xddccbbaa);
        assert_eq!(words[1], 0x0000_0001);
        assert_eq!(&words[2..], &[0u32; 14]);
    }

    #[test]
    fn empty_block_is_all_zero() {
        assert_eq!(block_words(&[]), [0u32; 16]);
    }

    #[test]
    fn key_words_round_trip() {
        let mut key = [0u8; KEY_LEN];
        for (i, byte) in key.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let words = key_words(&key);
        assert_eq!(words[0], u32::from_le_bytes([0, 1, 2, 3]));
        let mut back = [0u8; KEY_LEN];
        write_words_le(&words, &mut back);
        assert_eq!(back, key);
    }

    #[test]
    fn write_truncates_final_word() {
        let mut out = [0u8; 5];
        write_words_le(&[0x04030201, 0x08070605], &mut out);
        assert_eq!(out, [1, 2, 3, 4, 5]);
    }
}
