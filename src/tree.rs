//! Tree engine: chunk iteration, the subtree stack, and root capture.
//!
//! The input is consumed chunk by chunk; completed chunk chaining values
//! are merged through a fixed-capacity stack whose live entries mirror the
//! binary representation of the completed-chunk count. The final chunk is
//! never merged eagerly, which reserves the ROOT flag for the very last
//! compression of the run.

use crate::chunk::{chunk_cv, chunk_output};
use crate::output::Output;
use crate::params::{BLOCK_LEN, CHUNK_LEN, PARENT, STACK_CAPACITY};
use crate::simd::{compress_chunks4, DEGREE};

/// Minimum number of complete chunks before forking to the thread pool.
#[cfg(feature = "rayon")]
const PARALLEL_MIN_CHUNKS: usize = 128;

/// Build the parent node over two child chaining values.
fn parent_output(left: &[u32; 8], right: &[u32; 8], key: &[u32; 8], flags: u32) -> Output {
    let mut block = [0u32; 16];
    block[..8].copy_from_slice(left);
    block[8..].copy_from_slice(right);
    Output {
        input_cv: *key,
        block,
        block_len: BLOCK_LEN as u32,
        counter: 0,
        flags: flags | PARENT,
    }
}

#[inline]
fn parent_cv(left: &[u32; 8], right: &[u32; 8], key: &[u32; 8], flags: u32) -> [u32; 8] {
    parent_output(left, right, key, flags).chaining_value()
}

/// Fixed-capacity stack of subtree chaining values, one entry per set bit
/// of the completed-chunk count.
struct CvStack {
    cvs: [[u32; 8]; STACK_CAPACITY],
    len: usize,
}

impl CvStack {
    fn new() -> Self {
        Self {
            cvs: [[0u32; 8]; STACK_CAPACITY],
            len: 0,
        }
    }

    fn push(&mut self, cv: [u32; 8]) {
        self.cvs[self.len] = cv;
        self.len += 1;
    }

    fn pop(&mut self) -> [u32; 8] {
        self.len -= 1;
        self.cvs[self.len]
    }
}

/// Account one completed non-final chunk.
///
/// `total_chunks` is the number of chunks completed so far including this
/// one. Equal-height neighbors collapse while the count has trailing zero
/// bits; the stack always holds a left sibling when a merge is due.
fn push_chunk_cv(
    stack: &mut CvStack,
    key: &[u32; 8],
    flags: u32,
    mut cv: [u32; 8],
    mut total_chunks: u64,
) {
    while total_chunks & 1 == 0 {
        cv = parent_cv(&stack.pop(), &cv, key, flags);
        total_chunks >>= 1;
    }
    stack.push(cv);
}

/// Fold a run of complete chunks into the stack, four at a time where
/// possible. `full.len()` must be a multiple of `CHUNK_LEN`.
fn fold_chunks(full: &[u8], key: &[u32; 8], flags: u32, stack: &mut CvStack) {
    let mut counter = 0u64;
    let mut rest = full;
    while rest.len() >= DEGREE * CHUNK_LEN {
        let (batch, tail) = rest.split_at(DEGREE * CHUNK_LEN);
        for cv in compress_chunks4(batch, key, counter, flags) {
            counter += 1;
            push_chunk_cv(stack, key, flags, cv, counter);
        }
        rest = tail;
    }
    for chunk in rest.chunks(CHUNK_LEN) {
        let cv = chunk_cv(chunk, key, counter, flags);
        counter += 1;
        push_chunk_cv(stack, key, flags, cv, counter);
    }
}

/// Parallel variant of [`fold_chunks`]: contiguous four-chunk spans are
/// dispatched to the pool, their chaining values collected in span order,
/// and the stack driven exactly as in the serial case. The digest is
/// bit-identical for any worker count.
#[cfg(feature = "rayon")]
fn fold_chunks_parallel(full: &[u8], key: &[u32; 8], flags: u32, stack: &mut CvStack) {
    use rayon::prelude::*;

    let spans: Vec<Vec<[u32; 8]>> = full
        .par_chunks(DEGREE * CHUNK_LEN)
        .enumerate()
        .map(|(span_index, span)| {
            let base = (span_index * DEGREE) as u64;
            if span.len() == DEGREE * CHUNK_LEN {
                compress_chunks4(span, key, base, flags).to_vec()
            } else {
                span.chunks(CHUNK_LEN)
                    .enumerate()
                    .map(|(i, chunk)| chunk_cv(chunk, key, base + i as u64, flags))
                    .collect()
            }
        })
        .collect();

    let mut counter = 0u64;
    for cv in spans.into_iter().flatten() {
        counter += 1;
        push_chunk_cv(stack, key, flags, cv, counter);
    }
}

/// Hash a fully materialized input down to its root node.
///
/// The returned [`Output`] is the unique compression allowed to carry
/// ROOT; the extractor applies the flag when serializing the digest.
pub(crate) fn hash_tree(input: &[u8], key: &[u32; 8], flags: u32) -> Output {
    if input.len() <= CHUNK_LEN {
        return chunk_output(input, key, 0, flags);
    }

    let num_chunks = input.len().div_ceil(CHUNK_LEN);
    // The final chunk is held back so it can become the right edge of the
    // root merge; everything before it is a run of complete chunks.
    let (full, last) = input.split_at((num_chunks - 1) * CHUNK_LEN);

    #[cfg(feature = "tracing")]
    tracing::trace!(chunks = num_chunks, bytes = input.len(), "folding chunk tree");

    let mut stack = CvStack::new();

    #[cfg(feature = "rayon")]
    {
        if full.len() >= PARALLEL_MIN_CHUNKS * CHUNK_LEN {
            fold_chunks_parallel(full, key, flags, &mut stack);
        } else {
            fold_chunks(full, key, flags, &mut stack);
        }
    }

    #[cfg(not(feature = "rayon"))]
    {
        fold_chunks(full, key, flags, &mut stack);
    }

    let mut node = chunk_output(last, key, (num_chunks - 1) as u64, flags);
    while stack.len > 0 {
        node = parent_output(&stack.pop(), &node.chaining_value(), key, flags);
    }
    node
}
