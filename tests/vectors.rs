//! Official BLAKE3 test vectors.
//!
//! Inputs are the standard pattern `i % 251`; expected digests are the
//! published vectors for the plain, keyed, and derive-key modes.

use blake3_core::prelude::*;
use hex_literal::hex;

const TEST_KEY: &[u8; 32] = b"whats the Elvish word for friend";
const TEST_CONTEXT: &str = "BLAKE3 2019-12-27 16:29:52 test vectors context";

fn test_input(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn hash_vectors() {
    let cases: [(usize, [u8; 32]); 6] = [
        (
            0,
            hex!("af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"),
        ),
        (
            1,
            hex!("2d3adedff11b61f14c886e35afa036736dcd87a74d27b5c1510225d0f592e213"),
        ),
        (
            64,
            hex!("4eed7141ea4a5cd4b788606bd23f46e212af9cacebacdc7d1f4c6dc7f2511b98"),
        ),
        (
            1024,
            hex!("42214739f095a406f3fc83deb889744ac00df831c10daa55189b5d121c855af7"),
        ),
        (
            1025,
            hex!("d00278ae47eb27b34faecf67b4fe263f82d5412916c1ffd97c8cb7fb814b8444"),
        ),
        (
            65536,
            hex!("de1e5fa0be70df6d2be8fffd0e99ceaa8eb6e8c93a63f2d8d1c30ecb6b263dee"),
        ),
    ];
    for (len, expected) in cases {
        let digest = hash(&test_input(len));
        assert_eq!(digest, expected, "input length {len}");
    }
}

#[test]
fn hash_vectors_via_extended_output() {
    // The first 32 bytes of a longer output must equal the plain digest.
    for len in [0usize, 1, 64, 1024, 1025, 65536] {
        let input = test_input(len);
        let mut out = [0u8; 96];
        hash_into(&input, &mut out).expect("nonzero output");
        assert_eq!(hash(&input), <[u8; 32]>::try_from(&out[..32]).unwrap());
    }
}

#[test]
fn keyed_hash_vector() {
    let digest = keyed_hash(TEST_KEY, &test_input(64)).expect("32-byte key");
    assert_eq!(
        digest,
        hex!("ba8ced36f327700d213f120b1a207a3b8c04330528586f414d09f2f7d9ccb7e6")
    );
}

#[test]
fn derive_key_vector() {
    let digest = derive_key(TEST_CONTEXT, &test_input(64));
    assert_eq!(
        digest,
        hex!("a5c4a7053fa86b64746d4bb688d06ad1f02a18fce9afd3e818fefaa7126bf73e")
    );
}

#[test]
fn modes_disagree_on_identical_input() {
    let input = test_input(64);
    let plain = hash(&input);
    let keyed = keyed_hash(TEST_KEY, &input).expect("32-byte key");
    let derived = derive_key(TEST_CONTEXT, &input);
    assert_ne!(plain, keyed);
    assert_ne!(plain, derived);
    assert_ne!(keyed, derived);
}
