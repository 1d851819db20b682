//! Algorithm constants for the BLAKE3 tree hash.
//!
//! Everything here is fixed by the BLAKE3 specification; none of these
//! values are tunable.

/// Number of bytes consumed by one compression call.
pub const BLOCK_LEN: usize = 64;

/// Number of bytes in a chunk, the leaf unit of the hash tree.
pub const CHUNK_LEN: usize = 1024;

/// Number of bytes in a default digest.
pub const OUT_LEN: usize = 32;

/// Number of bytes in a key for the keyed mode.
pub const KEY_LEN: usize = 32;

/// Initial chaining value, shared with SHA-256's IV.
pub const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Flag for the first block of a chunk.
pub const CHUNK_START: u32 = 1 << 0;
/// Flag for the last block of a chunk.
pub const CHUNK_END: u32 = 1 << 1;
/// Flag for a parent node over two child chaining values.
pub const PARENT: u32 = 1 << 2;
/// Flag for the final compression of a run; set on exactly one compression.
pub const ROOT: u32 = 1 << 3;
/// Mode-wide flag for `keyed_hash`.
pub const KEYED_HASH: u32 = 1 << 4;
/// Mode-wide flag for the context pass of `derive_key`.
pub const DERIVE_KEY_CONTEXT: u32 = 1 << 5;
/// Mode-wide flag for the material pass of `derive_key`.
pub const DERIVE_KEY_MATERIAL: u32 = 1 << 6;

/// The message word permutation applied between rounds.
pub const MSG_PERMUTATION: [usize; 16] = [2, 6, 3, 10, 7, 0, 4, 13, 1, 11, 12, 5, 9, 14, 15, 8];

/// Message word indices for each of the seven rounds.
///
/// Row `r` holds the permutation applied `r` times, so both compression
/// kernels can index the original message words instead of shuffling them
/// in place between rounds.
pub(crate) const MSG_SCHEDULE: [[usize; 16]; 7] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [2, 6, 3, 10, 7, 0, 4, 13, 1, 11, 12, 5, 9, 14, 15, 8],
    [3, 4, 10, 12, 13, 2, 7, 14, 6, 5, 9, 0, 11, 15, 8, 1],
    [10, 7, 12, 9, 14, 3, 13, 15, 4, 0, 11, 2, 5, 8, 1, 6],
    [12, 13, 9, 11, 15, 10, 14, 8, 7, 2, 5, 3, 0, 1, 6, 4],
    [9, 14, 11, 5, 8, 12, 15, 1, 13, 3, 0, 10, 2, 6, 4, 7],
    [11, 15, 5, 0, 1, 9, 8, 6, 14, 10, 2, 12, 3, 4, 7, 13],
];

/// Capacity of the subtree chaining-value stack.
///
/// Inputs are at most 2^64 bytes, i.e. 2^54 chunks, and the stack holds one
/// entry per set bit of the completed-chunk count.
pub(crate) const STACK_CAPACITY: usize = 54;
