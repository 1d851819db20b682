//! Root-node capture and digest extraction.

use core::fmt;

use subtle::ConstantTimeEq;

use crate::compress::{compress, compress_cv};
use crate::params::{OUT_LEN, ROOT};
use crate::utils::write_words_le;

/// A deferred compression: everything needed to rerun a node's final block.
///
/// The chunk and tree engines hand one of these to the extractor instead of
/// a bare chaining value, so the single compression that carries ROOT can
/// be replayed with successive counters for extended output.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Output {
    pub(crate) input_cv: [u32; 8],
    pub(crate) block: [u32; 16],
    pub(crate) block_len: u32,
    pub(crate) counter: u64,
    pub(crate) flags: u32,
}

impl Output {
    /// Chaining value of this node when it is *not* the root.
    #[inline]
    pub(crate) fn chaining_value(&self) -> [u32; 8] {
        compress_cv(
            &self.input_cv,
            &self.block,
            self.counter,
            self.block_len,
            self.flags,
        )
    }

    /// Serialize the root digest into `out`, 64 bytes per compression.
    ///
    /// Block `i` of the output reruns this node's compression with ROOT set
    /// and counter `i`; the root node's own counter is always zero, so the
    /// first output block coincides with the plain root compression.
    pub(crate) fn root_bytes(&self, out: &mut [u8]) {
        for (index, block_out) in out.chunks_mut(2 * OUT_LEN).enumerate() {
            let words = compress(
                &self.input_cv,
                &self.block,
                index as u64,
                self.block_len,
                self.flags | ROOT,
            );
            write_words_le(&words, block_out);
        }
    }
}

/// A 32-byte BLAKE3 digest.
///
/// Comparison is constant-time, since a keyed digest doubles as a MAC.
/// `Display` and `Debug` render lowercase hex.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digest([u8; OUT_LEN]);

impl Digest {
    pub(crate) fn from_output(output: &Output) -> Self {
        let mut bytes = [0u8; OUT_LEN];
        output.root_bytes(&mut bytes);
        Self(bytes)
    }

    /// Borrow the digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; OUT_LEN] {
        &self.0
    }

    /// Consume the digest into its raw byte array.
    #[inline]
    pub fn to_bytes(self) -> [u8; OUT_LEN] {
        self.0
    }

    /// Lowercase hex rendering of the digest.
    #[cfg(feature = "std")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; OUT_LEN]> for Digest {
    fn from(bytes: [u8; OUT_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; OUT_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl PartialEq<[u8; OUT_LEN]> for Digest {
    fn eq(&self, other: &[u8; OUT_LEN]) -> bool {
        self.0.ct_eq(other).into()
    }
}

impl Eq for Digest {}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CHUNK_END, CHUNK_START, IV};

    fn sample_output() -> Output {
        Output {
            input_cv: IV,
            block: [5u32; 16],
            block_len: 64,
            counter: 0,
            flags: CHUNK_START | CHUNK_END,
        }
    }

    #[test]
    fn shorter_outputs_are_prefixes() {
        let output = sample_output();
        let mut long = [0u8; 160];
        output.root_bytes(&mut long);
        for len in [1usize, 31, 32, 33, 64, 65, 128, 159] {
            let mut short = [0u8; 160];
            output.root_bytes(&mut short[..len]);
            assert_eq!(&short[..len], &long[..len], "len {len}");
        }
    }

    #[test]
    fn root_flag_changes_the_chaining_value() {
        let output = sample_output();
        let mut first_block = [0u8; 32];
        output.root_bytes(&mut first_block);
        let mut plain = [0u8; 32];
        write_words_le(&output.chaining_value(), &mut plain);
        assert_ne!(first_block, plain);
    }

    #[cfg(feature = "std")]
    #[test]
    fn digest_display_is_lowercase_hex() {
        let digest = Digest::from_output(&sample_output());
        assert_eq!(format!("{digest}"), hex::encode(digest.as_bytes()));
        assert_eq!(digest.to_hex(), format!("{digest}"));
    }
}
