//! Single-block compression kernel.
//!
//! One call mixes a 64-byte message block into an eight-word chaining
//! value: the 16-word state runs seven rounds of eight quarter-round
//! applications, with message words indexed through the precomputed
//! per-round schedule.

use crate::params::{IV, MSG_SCHEDULE};

/// The quarter-round mix over four state words and two message words.
#[inline(always)]
fn g(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, mx: u32, my: u32) {
    state[a] = state[a].wrapping_add(state[b]).wrapping_add(mx);
    state[d] = (state[d] ^ state[a]).rotate_right(16);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_right(12);
    state[a] = state[a].wrapping_add(state[b]).wrapping_add(my);
    state[d] = (state[d] ^ state[a]).rotate_right(8);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_right(7);
}

/// One round: four column mixes, then four diagonal mixes.
#[inline(always)]
fn round(state: &mut [u32; 16], msg: &[u32; 16], schedule: &[usize; 16]) {
    g(state, 0, 4, 8, 12, msg[schedule[0]], msg[schedule[1]]);
    g(state, 1, 5, 9, 13, msg[schedule[2]], msg[schedule[3]]);
    g(state, 2, 6, 10, 14, msg[schedule[4]], msg[schedule[5]]);
    g(state, 3, 7, 11, 15, msg[schedule[6]], msg[schedule[7]]);

    g(state, 0, 5, 10, 15, msg[schedule[8]], msg[schedule[9]]);
    g(state, 1, 6, 11, 12, msg[schedule[10]], msg[schedule[11]]);
    g(state, 2, 7, 8, 13, msg[schedule[12]], msg[schedule[13]]);
    g(state, 3, 4, 9, 14, msg[schedule[14]], msg[schedule[15]]);
}

/// Full compression, returning all sixteen output words.
///
/// The low half is the truncated chaining value (`s[i] ^ s[i+8]`); the high
/// half (`s[i+8] ^ cv[i]`) is only meaningful for extended root output.
pub(crate) fn compress(
    cv: &[u32; 8],
    block: &[u32; 16],
    counter: u64,
    block_len: u32,
    flags: u32,
) -> [u32; 16] {
    let mut state = [
        cv[0],
        cv[1],
        cv[2],
        cv[3],
        cv[4],
        cv[5],
        cv[6],
        cv[7],
        IV[0],
        IV[1],
        IV[2],
        IV[3],
        counter as u32,
        (counter >> 32) as u32,
        block_len,
        flags,
    ];
    for schedule in MSG_SCHEDULE.iter() {
        round(&mut state, block, schedule);
    }
    for i in 0..8 {
        state[i] ^= state[i + 8];
        state[i + 8] ^= cv[i];
    }
    state
}

/// Truncated compression: only the eight-word chaining value.
#[inline]
pub(crate) fn compress_cv(
    cv: &[u32; 8],
    block: &[u32; 16],
    counter: u64,
    block_len: u32,
    flags: u32,
) -> [u32; 8] {
    let out = compress(cv, block, counter, block_len, flags);
    let mut truncated = [0u32; 8];
    truncated.copy_from_slice(&out[..8]);
    truncated
}
