// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Zeroization traits for the parapet workspace.
//!
//! Provides the [`FastZeroizable`] / [`ZeroizeMetadata`] / [`ZeroizationProbe`]
//! trait family together with implementations for integer primitives, slices,
//! and fixed-size arrays. Types that hold sensitive material implement these
//! traits and wipe themselves on every exit path, with `Drop` as the safety
//! net.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod collections;
mod primitives;
mod traits;

pub use traits::{FastZeroizable, FastZeroize, ZeroizationProbe, ZeroizeMetadata};
