// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Lifecycle tests: Created -> Updating* -> Finalized, with Finalized
// terminal until an explicit reset().

use crate::{DigestError, SHA1_DIGEST_LEN, SHA256_DIGEST_LEN, Sha1, Sha256, sha1, sha256};

#[test]
fn test_digest_lengths() {
    assert_eq!(SHA1_DIGEST_LEN, 20);
    assert_eq!(SHA256_DIGEST_LEN, 32);
}

#[test]
fn test_digest_length_is_input_independent() {
    assert_eq!(sha1(&[0u8; 1]).len(), sha1(&vec![0u8; 100_000]).len());
    assert_eq!(sha256(&[0u8; 1]).len(), sha256(&vec![0u8; 100_000]).len());
}

#[test]
fn test_sha256_update_after_finalize_fails() {
    let mut state = Sha256::new();
    state.update(b"abc").expect("update failed");
    state.finalize().expect("finalize failed");

    assert_eq!(state.update(b"more"), Err(DigestError::Finalized));
}

#[test]
fn test_sha256_double_finalize_fails() {
    let mut state = Sha256::new();
    state.finalize().expect("finalize failed");

    assert_eq!(state.finalize(), Err(DigestError::Finalized));
}

#[test]
fn test_sha1_update_after_finalize_fails() {
    let mut state = Sha1::new();
    state.update(b"abc").expect("update failed");
    state.finalize().expect("finalize failed");

    assert_eq!(state.update(b"more"), Err(DigestError::Finalized));
}

#[test]
fn test_sha1_double_finalize_fails() {
    let mut state = Sha1::new();
    state.finalize().expect("finalize failed");

    assert_eq!(state.finalize(), Err(DigestError::Finalized));
}

#[test]
fn test_sha256_reset_reuses_state() {
    let mut state = Sha256::new();
    state.update(b"throwaway input").expect("update failed");
    state.finalize().expect("finalize failed");

    state.reset();
    state.update(b"abc").expect("update after reset failed");

    assert_eq!(state.finalize().expect("finalize failed"), sha256(b"abc"));
}

#[test]
fn test_sha1_reset_reuses_state() {
    let mut state = Sha1::new();
    state.update(b"throwaway input").expect("update failed");
    state.finalize().expect("finalize failed");

    state.reset();
    state.update(b"abc").expect("update after reset failed");

    assert_eq!(state.finalize().expect("finalize failed"), sha1(b"abc"));
}

#[test]
fn test_fresh_state_matches_default() {
    let mut a = Sha256::default();
    let mut b = Sha256::new();

    assert_eq!(
        a.finalize().expect("finalize failed"),
        b.finalize().expect("finalize failed")
    );
}

#[test]
fn test_finalize_without_update_is_empty_digest() {
    let mut state = Sha256::new();

    assert_eq!(state.finalize().expect("finalize failed"), sha256(b""));
}
