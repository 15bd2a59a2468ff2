// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared helpers for the parapet workspace.
//!
//! Dependency-free byte utilities: bulk zeroization, constant-time
//! comparison, and the zeroizing big-endian conversions used by the digest
//! word wrappers.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "test-utils")]
extern crate alloc;

use core::sync::atomic::{Ordering, compiler_fence};

/// Zeroizes a slice with a single bulk memset.
///
/// Valid only for element types where all-zeros is a valid bit pattern;
/// the `parapet-zero` trait impls gate on `CAN_BE_BULK_ZEROIZED` before
/// taking this path.
#[inline(always)]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    // The fence keeps the memset from being elided as a dead store.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr(), 0, slice.len());
    }
    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every byte of the slice is zero.
pub fn is_fully_zeroized(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}

/// Constant-time equality for byte slices.
///
/// Slices of different lengths compare unequal immediately; equal-length
/// slices are compared without data-dependent branches.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Fills `out` from big-endian bytes, zeroizing the source bytes.
#[inline(always)]
pub fn u32_from_be(out: &mut u32, bytes: &mut [u8; 4]) {
    *out = u32::from_be_bytes(*bytes);
    fast_zeroize_slice(bytes);
}

/// Exports a word as big-endian bytes, zeroizing the source word.
#[inline(always)]
pub fn u32_to_be(value: &mut u32, out: &mut [u8; 4]) {
    out.copy_from_slice(&value.to_be_bytes());
    unsafe {
        core::ptr::write_volatile(value, 0);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Exports a 64-bit value as big-endian bytes, zeroizing the source.
#[inline(always)]
pub fn u64_to_be(value: &mut u64, out: &mut [u8; 8]) {
    out.copy_from_slice(&value.to_be_bytes());
    unsafe {
        core::ptr::write_volatile(value, 0);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Decodes a hex string into bytes.
///
/// # Panics
///
/// Panics on odd-length input or non-hex digits. Test helper only.
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> alloc::vec::Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
