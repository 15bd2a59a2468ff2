// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// SHA-256 test vectors
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
// [2] NIST SHA-256 Examples PDF
//     https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf
// [3] RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//     https://www.rfc-editor.org/rfc/rfc6234.html#section-8.5

use parapet_util::hex_to_bytes;

use crate::sha256;

#[test]
fn test_sha256_empty() {
    // The empty-string digest is reachable only through the padding path
    let digest = sha256(b"");

    let expected = hex_to_bytes("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
    assert_eq!(digest[..], expected[..], "SHA-256 mismatch for empty message");
}

#[test]
fn test_sha256_abc() {
    let digest = sha256(b"abc");

    let expected = hex_to_bytes("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    assert_eq!(digest[..], expected[..], "SHA-256 mismatch for 'abc'");
}

#[test]
fn test_sha256_56_bytes() {
    // Exactly 56 bytes forces a second block holding only padding + length
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(msg.len(), 56);

    let digest = sha256(msg);

    let expected = hex_to_bytes("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1");
    assert_eq!(digest[..], expected[..], "SHA-256 mismatch for 56-byte message");
}

#[test]
fn test_sha256_112_bytes() {
    // Two complete blocks (64 + 48 + padding in the second); verifies state
    // chaining between blocks
    let msg = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    assert_eq!(msg.len(), 112);

    let digest = sha256(msg);

    let expected = hex_to_bytes("cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1");
    assert_eq!(digest[..], expected[..], "SHA-256 mismatch for 112-byte message");
}

#[test]
fn test_sha256_million_a() {
    // FIPS 180-4 long-message vector: 1,000,000 repetitions of 'a'
    let msg = vec![b'a'; 1_000_000];

    let digest = sha256(&msg);

    let expected = hex_to_bytes("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0");
    assert_eq!(digest[..], expected[..], "SHA-256 mismatch for 1,000,000 x 'a'");
}
