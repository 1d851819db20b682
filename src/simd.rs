//! Batched 4-way compression over portable four-lane vectors.
//!
//! Four independent block compressions run in lockstep, with lane `i` of
//! every vector holding instance `i`'s corresponding word. The lane type
//! compiles to 128-bit SIMD on any target whose vectorizer recognizes the
//! shape; rotation is expressed as shift-or because a lanewise hardware
//! rotate cannot be assumed.

use crate::params::{BLOCK_LEN, CHUNK_END, CHUNK_LEN, CHUNK_START, IV, MSG_SCHEDULE};
use crate::utils::block_words;

/// Number of lanes in the batched kernel.
pub(crate) const DEGREE: usize = 4;

/// Four u32 lanes mixed in lockstep.
#[derive(Clone, Copy, Debug)]
struct Lanes([u32; 4]);

impl Lanes {
    #[inline(always)]
    fn splat(x: u32) -> Self {
        Self([x; 4])
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        Self([
            self.0[0].wrapping_add(rhs.0[0]),
            self.0[1].wrapping_add(rhs.0[1]),
            self.0[2].wrapping_add(rhs.0[2]),
            self.0[3].wrapping_add(rhs.0[3]),
        ])
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self([
            self.0[0] ^ rhs.0[0],
            self.0[1] ^ rhs.0[1],
            self.0[2] ^ rhs.0[2],
            self.0[3] ^ rhs.0[3],
        ])
    }

    /// Lanewise right rotation as shift-or with immediate shift counts.
    #[inline(always)]
    fn rotr<const N: u32>(self) -> Self {
        Self([
            (self.0[0] >> N) | (self.0[0] << (32 - N)),
            (self.0[1] >> N) | (self.0[1] << (32 - N)),
            (self.0[2] >> N) | (self.0[2] << (32 - N)),
            (self.0[3] >> N) | (self.0[3] << (32 - N)),
        ])
    }
}

/// The quarter-round mix, four instances at a time.
#[inline(always)]
fn g4(state: &mut [Lanes; 16], a: usize, b: usize, c: usize, d: usize, mx: Lanes, my: Lanes) {
    state[a] = state[a].wrapping_add(state[b]).wrapping_add(mx);
    state[d] = state[d].xor(state[a]).rotr::<16>();
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = state[b].xor(state[c]).rotr::<12>();
    state[a] = state[a].wrapping_add(state[b]).wrapping_add(my);
    state[d] = state[d].xor(state[a]).rotr::<8>();
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = state[b].xor(state[c]).rotr::<7>();
}

#[inline(always)]
fn round4(state: &mut [Lanes; 16], msg: &[Lanes; 16], schedule: &[usize; 16]) {
    g4(state, 0, 4, 8, 12, msg[schedule[0]], msg[schedule[1]]);
    g4(state, 1, 5, 9, 13, msg[schedule[2]], msg[schedule[3]]);
    g4(state, 2, 6, 10, 14, msg[schedule[4]], msg[schedule[5]]);
    g4(state, 3, 7, 11, 15, msg[schedule[6]], msg[schedule[7]]);

    g4(state, 0, 5, 10, 15, msg[schedule[8]], msg[schedule[9]]);
    g4(state, 1, 6, 11, 12, msg[schedule[10]], msg[schedule[11]]);
    g4(state, 2, 7, 8, 13, msg[schedule[12]], msg[schedule[13]]);
    g4(state, 3, 4, 9, 14, msg[schedule[14]], msg[schedule[15]]);
}

/// Gather word `w` of each instance into one vector.
#[inline]
fn transpose_cvs(cvs: &[[u32; 8]; DEGREE]) -> [Lanes; 8] {
    let mut vecs = [Lanes::splat(0); 8];
    for (w, vec) in vecs.iter_mut().enumerate() {
        *vec = Lanes([cvs[0][w], cvs[1][w], cvs[2][w], cvs[3][w]]);
    }
    vecs
}

#[inline]
fn untranspose_cvs(vecs: &[Lanes; 8]) -> [[u32; 8]; DEGREE] {
    let mut cvs = [[0u32; 8]; DEGREE];
    for (w, vec) in vecs.iter().enumerate() {
        for lane in 0..DEGREE {
            cvs[lane][w] = vec.0[lane];
        }
    }
    cvs
}

#[inline]
fn transpose_msgs(blocks: &[[u32; 16]; DEGREE]) -> [Lanes; 16] {
    let mut vecs = [Lanes::splat(0); 16];
    for (w, vec) in vecs.iter_mut().enumerate() {
        *vec = Lanes([blocks[0][w], blocks[1][w], blocks[2][w], blocks[3][w]]);
    }
    vecs
}

/// Core of the batched kernel, operating on already-transposed state.
#[inline]
fn compress4_lanes(
    cv: &[Lanes; 8],
    msg: &[Lanes; 16],
    counter_lo: Lanes,
    counter_hi: Lanes,
    block_len: Lanes,
    flags: Lanes,
) -> [Lanes; 8] {
    let mut state = [
        cv[0],
        cv[1],
        cv[2],
        cv[3],
        cv[4],
        cv[5],
        cv[6],
        cv[7],
        Lanes::splat(IV[0]),
        Lanes::splat(IV[1]),
        Lanes::splat(IV[2]),
        Lanes::splat(IV[3]),
        counter_lo,
        counter_hi,
        block_len,
        flags,
    ];
    for schedule in MSG_SCHEDULE.iter() {
        round4(&mut state, msg, schedule);
    }
    let mut out = [Lanes::splat(0); 8];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = state[i].xor(state[i + 8]);
    }
    out
}

/// Four independent single-block compressions, truncated to chaining values.
///
/// Elementwise identical to four `compress_cv` calls on the corresponding
/// inputs.
pub(crate) fn compress4_cv(
    cvs: &[[u32; 8]; DEGREE],
    blocks: &[[u32; 16]; DEGREE],
    counters: [u64; DEGREE],
    block_lens: [u32; DEGREE],
    flags: [u32; DEGREE],
) -> [[u32; 8]; DEGREE] {
    let out = compress4_lanes(
        &transpose_cvs(cvs),
        &transpose_msgs(blocks),
        Lanes(counters.map(|c| c as u32)),
        Lanes(counters.map(|c| (c >> 32) as u32)),
        Lanes(block_lens),
        Lanes(flags),
    );
    untranspose_cvs(&out)
}

/// Fold four complete chunks block by block, returning their chaining values.
///
/// `bytes` must hold exactly four chunks; lane `i` hashes
/// `bytes[i * CHUNK_LEN..]` under chunk counter `first_counter + i`. The
/// chaining values stay lane-resident across all sixteen blocks; the only
/// transposes are the key broadcast on entry and the gather on exit.
pub(crate) fn compress_chunks4(
    bytes: &[u8],
    key: &[u32; 8],
    first_counter: u64,
    flags: u32,
) -> [[u32; 8]; DEGREE] {
    debug_assert_eq!(bytes.len(), DEGREE * CHUNK_LEN);
    const BLOCKS_PER_CHUNK: usize = CHUNK_LEN / BLOCK_LEN;

    let mut cv = transpose_cvs(&[*key; DEGREE]);
    let mut counter_lo = [0u32; DEGREE];
    let mut counter_hi = [0u32; DEGREE];
    for lane in 0..DEGREE {
        let counter = first_counter + lane as u64;
        counter_lo[lane] = counter as u32;
        counter_hi[lane] = (counter >> 32) as u32;
    }

    for b in 0..BLOCKS_PER_CHUNK {
        let mut blocks = [[0u32; 16]; DEGREE];
        for (lane, block) in blocks.iter_mut().enumerate() {
            let offset = lane * CHUNK_LEN + b * BLOCK_LEN;
            *block = block_words(&bytes[offset..offset + BLOCK_LEN]);
        }
        let mut block_flags = flags;
        if b == 0 {
            block_flags |= CHUNK_START;
        }
        if b == BLOCKS_PER_CHUNK - 1 {
            block_flags |= CHUNK_END;
        }
        cv = compress4_lanes(
            &cv,
            &transpose_msgs(&blocks),
            Lanes(counter_lo),
            Lanes(counter_hi),
            Lanes::splat(BLOCK_LEN as u32),
            Lanes::splat(block_flags),
        );
    }
    untranspose_cvs(&cv)
}
