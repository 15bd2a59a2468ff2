// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle-Damgård block buffering shared by both digest engines.

use parapet_util::{fast_zeroize_slice, u64_to_be};
use parapet_zero::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Message block length in bytes (512 bits)
pub(crate) const BLOCK_LEN: usize = 64;

/// Offset where the big-endian bit length begins in the final block
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Accumulates arbitrary-length input into complete 64-byte blocks.
///
/// Both engines compose one of these in front of their compression function.
/// The buffer holds strictly less than one block between calls; completed
/// blocks are handed to `compress` and wiped immediately. Input length is
/// tracked in bytes and encoded as a bit count modulo 2^64 during padding,
/// per the FIPS 180-4 length contract.
pub(crate) struct BlockBuffer {
    block: [u8; BLOCK_LEN],
    fill: usize,
    total_len: u64,
    finalized: bool,
}

impl BlockBuffer {
    pub(crate) fn new() -> Self {
        Self {
            block: [0u8; BLOCK_LEN],
            fill: 0,
            total_len: 0,
            finalized: false,
        }
    }

    pub(crate) fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Appends `data`, invoking `compress` once per completed block.
    ///
    /// Full blocks are staged through the internal buffer so the copy can be
    /// wiped after compression; the input itself belongs to the caller.
    pub(crate) fn feed(&mut self, data: &[u8], mut compress: impl FnMut(&[u8; BLOCK_LEN])) {
        debug_assert!(!self.finalized, "feed on finalized BlockBuffer");

        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let mut offset = 0;

        // Top up a partially filled block first
        if self.fill > 0 {
            let space = BLOCK_LEN - self.fill;
            let copy_len = core::cmp::min(space, data.len());

            self.block[self.fill..self.fill + copy_len].copy_from_slice(&data[..copy_len]);
            self.fill += copy_len;
            offset = copy_len;

            if self.fill < BLOCK_LEN {
                return;
            }

            compress(&self.block);
            fast_zeroize_slice(&mut self.block);
            self.fill = 0;
        }

        // Full blocks straight from the input
        while offset + BLOCK_LEN <= data.len() {
            self.block.copy_from_slice(&data[offset..offset + BLOCK_LEN]);
            compress(&self.block);
            fast_zeroize_slice(&mut self.block);
            offset += BLOCK_LEN;
        }

        // Retain the tail for the next call
        if offset < data.len() {
            let remaining = data.len() - offset;
            self.block[..remaining].copy_from_slice(&data[offset..]);
            self.fill = remaining;
        }
    }

    /// Standard Merkle-Damgård padding: a single 0x80 byte, zero fill, then
    /// the 64-bit big-endian bit length; spills into an extra block when
    /// fewer than 8 bytes remain after the 0x80. Marks the buffer finalized.
    pub(crate) fn pad(&mut self, mut compress: impl FnMut(&[u8; BLOCK_LEN])) {
        debug_assert!(!self.finalized, "pad on finalized BlockBuffer");

        let mut bit_len = self.total_len.wrapping_mul(8);

        self.block[self.fill] = 0x80;
        self.fill += 1;

        // Not enough space left for the length field: flush a zero-padded block
        if self.fill > LENGTH_OFFSET {
            for i in self.fill..BLOCK_LEN {
                self.block[i] = 0;
            }

            compress(&self.block);
            fast_zeroize_slice(&mut self.block);
            self.fill = 0;
        }

        for i in self.fill..LENGTH_OFFSET {
            self.block[i] = 0;
        }

        let mut len_bytes = [0u8; 8];
        u64_to_be(&mut bit_len, &mut len_bytes);
        self.block[LENGTH_OFFSET..].copy_from_slice(&len_bytes);
        fast_zeroize_slice(&mut len_bytes);

        compress(&self.block);
        fast_zeroize_slice(&mut self.block);
        self.fill = 0;
        self.finalized = true;
    }

    /// Back to the empty, un-finalized state
    pub(crate) fn reset(&mut self) {
        self.fast_zeroize();
    }
}

impl FastZeroizable for BlockBuffer {
    fn fast_zeroize(&mut self) {
        self.block.fast_zeroize();
        self.fill.fast_zeroize();
        self.total_len.fast_zeroize();
        self.finalized.fast_zeroize();
    }
}

impl ZeroizeMetadata for BlockBuffer {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl ZeroizationProbe for BlockBuffer {
    fn is_zeroized(&self) -> bool {
        self.block.is_zeroized()
            && self.fill.is_zeroized()
            && self.total_len.is_zeroized()
            && self.finalized.is_zeroized()
    }
}

impl Drop for BlockBuffer {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
