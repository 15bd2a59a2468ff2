// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for integer primitives and `bool`.

use core::sync::atomic::{Ordering, compiler_fence};

use super::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_zeroize_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl FastZeroizable for $t {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    // Volatile write so the wipe survives dead-store elimination
                    unsafe {
                        core::ptr::write_volatile(self, 0);
                    }
                    compiler_fence(Ordering::SeqCst);
                }
            }

            impl ZeroizeMetadata for $t {
                const CAN_BE_BULK_ZEROIZED: bool = true;
            }

            impl ZeroizationProbe for $t {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_zeroize_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl FastZeroizable for bool {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        unsafe {
            core::ptr::write_volatile(self, false);
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl ZeroizeMetadata for bool {
    const CAN_BE_BULK_ZEROIZED: bool = true;
}

impl ZeroizationProbe for bool {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        !*self
    }
}
