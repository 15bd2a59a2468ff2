// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 32-bit word wrapper with guaranteed zeroization on drop.
//!
//! All operations are in-place `_assign` variants so no word value escapes
//! into stack temporaries the wipe cannot reach. The boolean and rotation
//! functions both engines need live here: Ch and Maj are shared between
//! SHA-1 and SHA-256, Parity belongs to SHA-1, and the four sigma functions
//! belong to SHA-256.

use parapet_util::{u32_from_be, u32_to_be};
use parapet_zero::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// 32-bit word with guaranteed zeroization.
///
/// `#[repr(transparent)]` keeps the layout identical to `u32`. Drop asserts
/// zeroization in debug builds, then wipes as a safety net.
#[derive(Default)]
#[repr(transparent)]
pub(crate) struct Word32(u32);

impl Word32 {
    /// Create a new Word32 with the given value
    #[inline(always)]
    pub(crate) const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a zero Word32
    #[inline(always)]
    pub(crate) const fn zero() -> Self {
        Self(0)
    }

    /// Copy the value from another Word32
    #[inline(always)]
    pub(crate) fn copy_from(&mut self, src: &Word32) {
        self.0 = src.0;
    }

    /// Fill from big-endian bytes, zeroizing the source bytes
    #[inline(always)]
    pub(crate) fn fill_with_be_bytes(&mut self, bytes: &mut [u8; 4]) {
        u32_from_be(&mut self.0, bytes);
    }

    /// Export as big-endian bytes, zeroizing self
    #[inline(always)]
    pub(crate) fn export_as_be_bytes(&mut self, bytes: &mut [u8; 4]) {
        u32_to_be(&mut self.0, bytes);
    }

    /// self += rhs (wrapping)
    #[inline(always)]
    pub(crate) fn wrapping_add_assign(&mut self, rhs: &Word32) {
        self.0 = self.0.wrapping_add(rhs.0);
    }

    /// self += rhs (wrapping, raw value)
    #[inline(always)]
    pub(crate) fn wrapping_add_assign_val(&mut self, rhs: u32) {
        self.0 = self.0.wrapping_add(rhs);
    }

    /// self ^= rhs
    #[inline(always)]
    pub(crate) fn xor_assign(&mut self, rhs: &Word32) {
        self.0 ^= rhs.0;
    }

    /// self &= rhs
    #[inline(always)]
    pub(crate) fn and_assign(&mut self, rhs: &Word32) {
        self.0 &= rhs.0;
    }

    /// self = !self
    #[inline(always)]
    pub(crate) fn not_assign(&mut self) {
        self.0 = !self.0;
    }

    /// self = self.rotate_left(n)
    #[inline(always)]
    pub(crate) fn rotate_left_assign(&mut self, n: u32) {
        self.0 = self.0.rotate_left(n);
    }

    /// self = self.rotate_right(n)
    #[inline(always)]
    pub(crate) fn rotate_right_assign(&mut self, n: u32) {
        self.0 = self.0.rotate_right(n);
    }

    /// self = self >> n
    #[inline(always)]
    pub(crate) fn shift_right_assign(&mut self, n: u32) {
        self.0 >>= n;
    }

    // === === === === === === === === === ===
    // Boolean functions
    // === === === === === === === === === ===

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    ///
    /// RFC 6234 Section 5.1; also SHA-1's f for rounds 0..19 (RFC 3174
    /// Section 5). Internal temporaries are zeroized before return.
    #[inline(always)]
    pub(crate) fn set_ch(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        let mut xy = Word32::zero();
        xy.copy_from(x);
        xy.and_assign(y);

        out.copy_from(x);
        out.not_assign();
        out.and_assign(z);
        out.xor_assign(&xy);

        xy.fast_zeroize();
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
    ///
    /// Computed in the reduced form (x ∧ y) ⊕ (z ∧ (x ⊕ y)). RFC 6234
    /// Section 5.1; also SHA-1's f for rounds 40..59.
    #[inline(always)]
    pub(crate) fn set_maj(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        let mut xy = Word32::zero();
        xy.copy_from(x);
        xy.and_assign(y);

        out.copy_from(x);
        out.xor_assign(y);
        out.and_assign(z);
        out.xor_assign(&xy);

        xy.fast_zeroize();
    }

    /// Parity(x,y,z) = x ⊕ y ⊕ z
    ///
    /// SHA-1's f for rounds 20..39 and 60..79 (RFC 3174 Section 5).
    #[inline(always)]
    pub(crate) fn set_parity(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        out.copy_from(x);
        out.xor_assign(y);
        out.xor_assign(z);
    }

    // === === === === === === === === === ===
    // SHA-256 sigma functions per RFC 6234 Section 5.1
    // === === === === === === === === === ===

    /// out = ROTR^a(x) ⊕ ROTR^b(x) ⊕ ROTR^c(x)
    #[inline(always)]
    fn set_rotr_xor3(out: &mut Word32, x: &Word32, a: u32, b: u32, c: u32) {
        let mut v = Word32::zero();

        out.fast_zeroize();
        for n in [a, b, c] {
            v.copy_from(x);
            v.rotate_right_assign(n);
            out.xor_assign(&v);
        }
        v.fast_zeroize();
    }

    /// out = ROTR^a(x) ⊕ ROTR^b(x) ⊕ SHR^s(x)
    #[inline(always)]
    fn set_rotr2_shr(out: &mut Word32, x: &Word32, a: u32, b: u32, s: u32) {
        let mut v = Word32::zero();

        out.fast_zeroize();
        for n in [a, b] {
            v.copy_from(x);
            v.rotate_right_assign(n);
            out.xor_assign(&v);
        }
        v.copy_from(x);
        v.shift_right_assign(s);
        out.xor_assign(&v);
        v.fast_zeroize();
    }

    /// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
    #[inline(always)]
    pub(crate) fn set_bsig0(out: &mut Word32, x: &Word32) {
        Self::set_rotr_xor3(out, x, 2, 13, 22);
    }

    /// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
    #[inline(always)]
    pub(crate) fn set_bsig1(out: &mut Word32, x: &Word32) {
        Self::set_rotr_xor3(out, x, 6, 11, 25);
    }

    /// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
    #[inline(always)]
    pub(crate) fn set_ssig0(out: &mut Word32, x: &Word32) {
        Self::set_rotr2_shr(out, x, 7, 18, 3);
    }

    /// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
    #[inline(always)]
    pub(crate) fn set_ssig1(out: &mut Word32, x: &Word32) {
        Self::set_rotr2_shr(out, x, 17, 19, 10);
    }

    /// Get a mutable reference to the inner u32
    #[inline(always)]
    pub(crate) fn as_mut_u32(&mut self) -> &mut u32 {
        &mut self.0
    }

    /// Get the inner u32 value, for tests and assertions only
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_u32(&self) -> u32 {
        self.0
    }
}

impl FastZeroizable for Word32 {
    fn fast_zeroize(&mut self) {
        self.0.fast_zeroize();
    }
}

impl ZeroizeMetadata for Word32 {
    const CAN_BE_BULK_ZEROIZED: bool = true;
}

impl ZeroizationProbe for Word32 {
    fn is_zeroized(&self) -> bool {
        self.0.is_zeroized()
    }
}

impl Drop for Word32 {
    fn drop(&mut self) {
        // Debug: assert the word was properly zeroized before drop
        debug_assert!(self.is_zeroized(), "Word32 dropped without zeroization");
        // Safety net: zeroize anyway
        self.fast_zeroize();
    }
}
