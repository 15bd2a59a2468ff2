// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for slices and fixed-size arrays.

use core::sync::atomic::{Ordering, compiler_fence};

use parapet_util::fast_zeroize_slice;

use super::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Zeroizes a slice using either a bulk memset or recursive element
/// zeroization.
///
/// When `bulk` is true the whole slice is wiped with one memset; otherwise
/// each element is zeroized through its own `fast_zeroize`.
pub(crate) fn slice_fast_zeroize<T: FastZeroizable + ZeroizeMetadata>(slice: &mut [T], bulk: bool) {
    if bulk {
        fast_zeroize_slice(slice);
        compiler_fence(Ordering::SeqCst);
    } else {
        for elem in slice.iter_mut() {
            elem.fast_zeroize();
            compiler_fence(Ordering::SeqCst);
        }
    }
}

// === === === === === === === === === ===
// [T] - slices
// === === === === === === === === === ===

impl<T> ZeroizeMetadata for [T]
where
    T: FastZeroizable + ZeroizeMetadata,
{
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T> FastZeroizable for [T]
where
    T: FastZeroizable + ZeroizeMetadata,
{
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T> ZeroizationProbe for [T]
where
    T: ZeroizationProbe,
{
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}

// === === === === === === === === === ===
// [T; N] - arrays
// === === === === === === === === === ===

impl<T: ZeroizeMetadata, const N: usize> ZeroizeMetadata for [T; N] {
    // Arrays inherit bulk-zeroize capability from their element type
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T, const N: usize> FastZeroizable for [T; N]
where
    T: FastZeroizable + ZeroizeMetadata,
{
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self.as_mut_slice(), T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T, const N: usize> ZeroizationProbe for [T; N]
where
    T: ZeroizationProbe,
{
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}
