// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for systematic zeroization.

/// Trait for verifying that a value has been zeroized.
///
/// Allows runtime checks that zeroization actually happened. Used in tests
/// and drop assertions to ensure no sensitive data remains in memory.
///
/// # Example
///
/// ```rust
/// use parapet_zero::{FastZeroizable, ZeroizationProbe};
///
/// let mut value: u32 = 42;
///
/// assert!(!value.is_zeroized());
///
/// value.fast_zeroize();
/// assert!(value.is_zeroized());
/// assert_eq!(value, 0);
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if the value is zeroized (all bytes are 0).
    fn is_zeroized(&self) -> bool;
}

/// Metadata about the zeroization strategy for a type.
///
/// Compile-time information about whether a type can be bulk-zeroized with a
/// memset or requires element-by-element zeroization.
///
/// **Note:** this trait is NOT dyn-compatible (associated constant). Use
/// [`FastZeroizable`] for trait objects.
pub trait ZeroizeMetadata {
    /// Whether this type can be bulk-zeroized with memset.
    ///
    /// - `true`: all-zeros is a valid bit pattern (primitives)
    /// - `false`: requires element-by-element recursive zeroization
    const CAN_BE_BULK_ZEROIZED: bool;
}

/// Trait for types that can be zeroized at runtime.
///
/// Dyn-compatible, so it can be used as `&mut dyn FastZeroizable` where
/// dynamic dispatch is needed.
pub trait FastZeroizable {
    /// Zeroizes the value in place.
    ///
    /// After this call, all sensitive data has been overwritten with zeros.
    fn fast_zeroize(&mut self);
}

/// Combined trait for types with both zeroization metadata and runtime
/// zeroization.
///
/// Blanket-implemented for every type that implements [`ZeroizeMetadata`]
/// and [`FastZeroizable`].
pub trait FastZeroize: ZeroizeMetadata + FastZeroizable {}

impl<T: ZeroizeMetadata + FastZeroizable> FastZeroize for T {}
