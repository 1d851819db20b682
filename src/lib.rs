//! # blake3-core
//!
//! A pure-Rust implementation of the BLAKE3 cryptographic hash: a keyed
//! hash function built from a binary Merkle tree over 1024-byte chunks,
//! with a Blake2-derived compression function over 64-byte blocks and
//! extensible output of any length.
//!
//! ## Features
//!
//! - **Three modes**: plain hashing, keyed hashing, and key derivation,
//!   all through one tree engine
//! - **Extensible output**: digests of any nonzero length, where shorter
//!   outputs are prefixes of longer ones
//! - **Batched core**: a portable 4-lane kernel compresses four chunks in
//!   lockstep whenever at least four complete chunks remain
//! - **Optional parallelism**: the `rayon` feature forks chunk folding
//!   across a thread pool for large inputs, with bit-identical digests
//! - **🦀 Pure Rust**: no unsafe code, `no_std` compatible
//!
//! ## Quick Start
//!
//! ```
//! use blake3_core::prelude::*;
//!
//! # fn main() -> Result<(), blake3_core::Error> {
//! let digest = hash(b"hello world");
//!
//! let mac = keyed_hash(&[0x42; 32], b"authenticated message")?;
//! assert_ne!(mac, hash(b"authenticated message"));
//!
//! let session_key = derive_key("example.com 2026-08-01 session keys", b"key material");
//! # let _ = (digest, session_key);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`api`]: the public hashing operations and mode dispatch
//! - [`params`]: the fixed BLAKE3 constants
//! - [`error`]: error and result types
//!
//! ## Security Considerations
//!
//! The compression function is data-independent, so hashing is naturally
//! constant-time over the input; digest comparison is constant-time as
//! well. Key words are zeroed after keyed and derive-key runs. This
//! library has not undergone a formal security audit.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

pub use crate::error::{Error, Result};
pub use crate::output::Digest;

// Core modules
pub mod api;
pub mod error;
pub mod params;

// Kernels and engines
mod chunk;
mod compress;
mod output;
mod simd;
mod tree;
mod utils;

pub use crate::api::{derive_key, hash, keyed_hash};

// Prelude for convenient imports
pub mod prelude {
    //! Common imports for using blake3-core
    //!
    //! # Example
    //!
    //! ```
    //! use blake3_core::prelude::*;
    //! ```

    pub use crate::{
        api::{derive_key, derive_key_into, hash, hash_into, keyed_hash, keyed_hash_into},
        Digest, Error, Result,
    };

    #[cfg(feature = "std")]
    pub use crate::api::{derive_key_to_vec, hash_to_vec, keyed_hash_to_vec};
}
