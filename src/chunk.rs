//! Chunk engine: the blocks of one chunk folded into a chaining value.

use crate::compress::compress_cv;
use crate::output::Output;
use crate::params::{BLOCK_LEN, CHUNK_END, CHUNK_LEN, CHUNK_START};
use crate::utils::block_words;

/// Fold a whole chunk, capturing its final block as an [`Output`].
///
/// `chunk` may be empty (the empty input is one zero-length block) and is
/// at most `CHUNK_LEN` bytes. Every block carries the chunk's counter; the
/// first block adds CHUNK_START and the captured last block adds CHUNK_END.
/// ROOT is deliberately left to the digest extractor, so the same node can
/// serve as either a leaf chaining value or the root of a one-chunk tree.
pub(crate) fn chunk_output(chunk: &[u8], key: &[u32; 8], counter: u64, flags: u32) -> Output {
    debug_assert!(chunk.len() <= CHUNK_LEN);
    let mut cv = *key;
    let mut block_flags = flags | CHUNK_START;
    let mut rest = chunk;
    while rest.len() > BLOCK_LEN {
        let (head, tail) = rest.split_at(BLOCK_LEN);
        cv = compress_cv(
            &cv,
            &block_words(head),
            counter,
            BLOCK_LEN as u32,
            block_flags,
        );
        block_flags = flags;
        rest = tail;
    }
    Output {
        input_cv: cv,
        block: block_words(rest),
        block_len: rest.len() as u32,
        counter,
        flags: block_flags | CHUNK_END,
    }
}

/// Chaining value of one non-root chunk.
#[inline]
pub(crate) fn chunk_cv(chunk: &[u8], key: &[u32; 8], counter: u64, flags: u32) -> [u32; 8] {
    chunk_output(chunk, key, counter, flags).chaining_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::IV;

    #[test]
    fn empty_chunk_is_one_zero_length_block() {
        let out = chunk_output(&[], &IV, 0, 0);
        assert_eq!(out.block_len, 0);
        assert_eq!(out.block, [0u32; 16]);
        assert_eq!(out.flags, CHUNK_START | CHUNK_END);
        assert_eq!(out.input_cv, IV);
    }

    #[test]
    fn single_block_chunk_keeps_both_chunk_flags() {
        let out = chunk_output(&[0xab; 64], &IV, 9, 0);
        assert_eq!(out.block_len, 64);
        assert_eq!(out.counter, 9);
        assert_eq!(out.flags, CHUNK_START | CHUNK_END);
        // No compression has happened yet for a one-block chunk.
        assert_eq!(out.input_cv, IV);
    }

    #[test]
    fn short_final_block_records_its_length() {
        let out = chunk_output(&[7u8; 65], &IV, 0, 0);
        assert_eq!(out.block_len, 1);
        // The first block was already folded, so the captured flags only
        // mark the end of the chunk.
        assert_eq!(out.flags, CHUNK_END);
        assert_ne!(out.input_cv, IV);
    }

    #[test]
    fn full_chunk_folds_fifteen_blocks_before_capture() {
        let chunk = [3u8; CHUNK_LEN];
        let out = chunk_output(&chunk, &IV, 0, 0);
        assert_eq!(out.block_len, BLOCK_LEN as u32);
        assert_eq!(out.flags, CHUNK_END);

        // Folding by hand must land on the same captured state.
        let mut cv = IV;
        let mut flags = CHUNK_START;
        for block in chunk[..CHUNK_LEN - BLOCK_LEN].chunks(BLOCK_LEN) {
            cv = compress_cv(&cv, &block_words(block), 0, BLOCK_LEN as u32, flags);
            flags = 0;
        }
        assert_eq!(out.input_cv, cv);
    }
}
