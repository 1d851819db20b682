//! Public hashing operations and mode dispatch.
//!
//! The three modes share one tree engine and differ only in the initial
//! chunk chaining value and the mode-wide flag OR'd into every
//! compression:
//!
//! | Mode         | Initial CV                    | Mode-wide flag        |
//! |--------------|-------------------------------|-----------------------|
//! | `hash`       | the BLAKE3 IV                 | none                  |
//! | `keyed_hash` | 8 LE words of the 32-byte key | `KEYED_HASH`          |
//! | `derive_key` | digest of the context string  | `DERIVE_KEY_MATERIAL` |
//!
//! Chunk counters always start at zero; extended output replays the root
//! compression with counters 0, 1, 2, ...

use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::output::Digest;
use crate::params::{DERIVE_KEY_CONTEXT, DERIVE_KEY_MATERIAL, IV, KEYED_HASH, KEY_LEN};
use crate::tree::hash_tree;
use crate::utils::key_words;

/// Hash `input`, returning the default 32-byte digest.
pub fn hash(input: &[u8]) -> Digest {
    Digest::from_output(&hash_tree(input, &IV, 0))
}

/// Hash `input` into `out`, filling it with extended output.
///
/// Any output length is supported; shorter outputs are prefixes of longer
/// ones. Fails with [`Error::InvalidOutputLength`] if `out` is empty.
pub fn hash_into(input: &[u8], out: &mut [u8]) -> Result<()> {
    if out.is_empty() {
        return Err(Error::InvalidOutputLength);
    }
    hash_tree(input, &IV, 0).root_bytes(out);
    Ok(())
}

/// Hash `input` to an owned buffer of `output_len` bytes.
#[cfg(feature = "std")]
pub fn hash_to_vec(input: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; output_len];
    hash_into(input, &mut out)?;
    Ok(out)
}

/// Keyed hash of `input` under a 32-byte key.
///
/// Fails with [`Error::InvalidKeyLength`] unless `key` is exactly 32
/// bytes. The key words are wiped after the run.
pub fn keyed_hash(key: &[u8], input: &[u8]) -> Result<Digest> {
    let mut words = keyed_words(key)?;
    let digest = Digest::from_output(&hash_tree(input, &words, KEYED_HASH));
    words.zeroize();
    Ok(digest)
}

/// Keyed hash with extended output into `out`.
pub fn keyed_hash_into(key: &[u8], input: &[u8], out: &mut [u8]) -> Result<()> {
    if out.is_empty() {
        return Err(Error::InvalidOutputLength);
    }
    let mut words = keyed_words(key)?;
    hash_tree(input, &words, KEYED_HASH).root_bytes(out);
    words.zeroize();
    Ok(())
}

/// Keyed hash to an owned buffer of `output_len` bytes.
#[cfg(feature = "std")]
pub fn keyed_hash_to_vec(key: &[u8], input: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; output_len];
    keyed_hash_into(key, input, &mut out)?;
    Ok(out)
}

/// Derive a key from a context string and key material (KDF mode).
///
/// The context is hashed first in its own subordinate run under
/// `DERIVE_KEY_CONTEXT`; contexts of any length flow through the full
/// tree. Its 32-byte digest then keys the material pass.
pub fn derive_key(context: &str, material: &[u8]) -> Digest {
    let mut words = context_key_words(context);
    let digest = Digest::from_output(&hash_tree(material, &words, DERIVE_KEY_MATERIAL));
    words.zeroize();
    digest
}

/// Key derivation with extended output into `out`.
pub fn derive_key_into(context: &str, material: &[u8], out: &mut [u8]) -> Result<()> {
    if out.is_empty() {
        return Err(Error::InvalidOutputLength);
    }
    let mut words = context_key_words(context);
    hash_tree(material, &words, DERIVE_KEY_MATERIAL).root_bytes(out);
    words.zeroize();
    Ok(())
}

/// Key derivation to an owned buffer of `output_len` bytes.
#[cfg(feature = "std")]
pub fn derive_key_to_vec(context: &str, material: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; output_len];
    derive_key_into(context, material, &mut out)?;
    Ok(out)
}

fn keyed_words(key: &[u8]) -> Result<[u32; 8]> {
    let key: &[u8; KEY_LEN] = key.try_into().map_err(|_| Error::InvalidKeyLength)?;
    Ok(key_words(key))
}

/// The context digest, as chaining-value words for the material pass.
fn context_key_words(context: &str) -> [u32; 8] {
    let mut key_bytes = [0u8; KEY_LEN];
    hash_tree(context.as_bytes(), &IV, DERIVE_KEY_CONTEXT).root_bytes(&mut key_bytes);
    let words = key_words(&key_bytes);
    key_bytes.zeroize();
    words
}
