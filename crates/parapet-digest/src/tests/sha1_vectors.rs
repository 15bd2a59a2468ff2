// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// SHA-1 test vectors
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
// [2] RFC 3174: US Secure Hash Algorithm 1 (SHA1), Section 7.3
//     https://www.rfc-editor.org/rfc/rfc3174.html

use parapet_util::hex_to_bytes;

use crate::{Sha1, sha1};

#[test]
fn test_sha1_empty() {
    // The empty-string digest is reachable only through the padding path
    let digest = sha1(b"");

    let expected = hex_to_bytes("da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(digest[..], expected[..], "SHA-1 mismatch for empty message");
}

#[test]
fn test_sha1_abc() {
    let digest = sha1(b"abc");

    let expected = hex_to_bytes("a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(digest[..], expected[..], "SHA-1 mismatch for 'abc'");
}

#[test]
fn test_sha1_56_bytes() {
    // Exactly 56 bytes forces a second block holding only padding + length
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(msg.len(), 56);

    let digest = sha1(msg);

    let expected = hex_to_bytes("84983e441c3bd26ebaae4aa1f95129e5e54670f1");
    assert_eq!(digest[..], expected[..], "SHA-1 mismatch for 56-byte message");
}

#[test]
fn test_sha1_rfc3174_test4() {
    // RFC 3174 TEST4: a 64-byte chunk fed ten times, crossing block
    // boundaries on every update
    let chunk = b"0123456701234567012345670123456701234567012345670123456701234567";
    assert_eq!(chunk.len(), 64);

    let mut state = Sha1::new();
    for _ in 0..10 {
        state.update(chunk).expect("update failed");
    }
    let digest = state.finalize().expect("finalize failed");

    let expected = hex_to_bytes("dea356a2cddd90c7a7ecedc5ebb563934f460452");
    assert_eq!(digest[..], expected[..], "SHA-1 mismatch for RFC 3174 TEST4");
}

#[test]
fn test_sha1_million_a() {
    // FIPS 180-4 long-message vector: 1,000,000 repetitions of 'a';
    // verifies multi-block padding over many chained blocks
    let msg = vec![b'a'; 1_000_000];

    let digest = sha1(&msg);

    let expected = hex_to_bytes("34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    assert_eq!(digest[..], expected[..], "SHA-1 mismatch for 1,000,000 x 'a'");
}
