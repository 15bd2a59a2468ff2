// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 implementation per FIPS 180-4 / RFC 3174.
//!
//! SHA-1 is cryptographically broken for collision resistance; it is kept
//! for interoperability with legacy formats and protocols. Use SHA-256 for
//! anything new.

use parapet_zero::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

use super::block::{BLOCK_LEN, BlockBuffer};
use super::error::DigestError;
use super::word32::Word32;

/// SHA-1 digest length in bytes
pub const SHA1_DIGEST_LEN: usize = 20;

/// Round constants K per RFC 3174 Section 5, one per 20-round phase
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// Initial hash values H(0) per RFC 3174 Section 6.1
const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round scratch for the compression function.
///
/// Same layout discipline as the SHA-256 engine: schedule, working
/// variables, and temporaries all live in the struct so zeroization is
/// guaranteed.
struct Sha1Rounds {
    // Message schedule W[0..79]
    w: [Word32; 80],

    // Working variables a..e per RFC 3174 Section 6.1
    wv: [Word32; 5],

    // Temporaries
    t1: Word32,
    scratch: Word32,
    tmp: Word32,
    tmp_word: [u8; 4],
}

impl Sha1Rounds {
    fn new() -> Self {
        Self {
            w: core::array::from_fn(|_| Word32::zero()),
            wv: core::array::from_fn(|_| Word32::zero()),
            t1: Word32::zero(),
            scratch: Word32::zero(),
            tmp: Word32::zero(),
            tmp_word: [0u8; 4],
        }
    }

    /// Compression function per RFC 3174 Section 6.1: updates `h` with a
    /// single 512-bit message block.
    fn compress(&mut self, h: &mut [Word32; 5], block: &[u8; BLOCK_LEN]) {
        // W[0..15] from the block, big-endian
        for t in 0..16 {
            self.tmp_word.copy_from_slice(&block[t * 4..(t + 1) * 4]);
            self.w[t].fill_with_be_bytes(&mut self.tmp_word);
        }

        // W[t] = ROTL^1(W[t-3] ⊕ W[t-8] ⊕ W[t-14] ⊕ W[t-16])
        for t in 16..80 {
            self.tmp.copy_from(&self.w[t - 3]);
            self.tmp.xor_assign(&self.w[t - 8]);
            self.tmp.xor_assign(&self.w[t - 14]);
            self.tmp.xor_assign(&self.w[t - 16]);
            self.tmp.rotate_left_assign(1);

            self.w[t].copy_from(&self.tmp);
            self.tmp.fast_zeroize();
        }

        // Working variables from the current hash state
        for i in 0..5 {
            self.wv[i].copy_from(&h[i]);
        }

        // 80 rounds in four 20-round phases: Ch, Parity, Maj, Parity
        for t in 0..80 {
            let phase = t / 20;

            // T = ROTL^5(a) + f(b,c,d) + e + K[phase] + W[t]
            self.t1.copy_from(&self.wv[0]);
            self.t1.rotate_left_assign(5);

            match phase {
                0 => Word32::set_ch(&mut self.scratch, &self.wv[1], &self.wv[2], &self.wv[3]),
                2 => Word32::set_maj(&mut self.scratch, &self.wv[1], &self.wv[2], &self.wv[3]),
                _ => Word32::set_parity(&mut self.scratch, &self.wv[1], &self.wv[2], &self.wv[3]),
            }
            self.t1.wrapping_add_assign(&self.scratch);

            self.t1.wrapping_add_assign(&self.wv[4]);
            self.t1.wrapping_add_assign_val(K[phase]);
            self.t1.wrapping_add_assign(&self.w[t]);

            // W[t] is no longer needed
            self.w[t].fast_zeroize();

            // e=d, d=c, c=ROTL^30(b), b=a, a=T
            for i in (1..5).rev() {
                self.tmp.copy_from(&self.wv[i - 1]);
                self.wv[i].copy_from(&self.tmp);
            }
            self.wv[2].rotate_left_assign(30);
            self.wv[0].copy_from(&self.t1);

            self.scratch.fast_zeroize();
            self.tmp.fast_zeroize();
            self.t1.fast_zeroize();
        }

        // H(i) = H(i-1) + working variables (take wipes wv as it goes)
        for i in 0..5 {
            let v = core::mem::take(self.wv[i].as_mut_u32());
            h[i].wrapping_add_assign_val(v);
        }
    }
}

impl FastZeroizable for Sha1Rounds {
    fn fast_zeroize(&mut self) {
        self.w.fast_zeroize();
        self.wv.fast_zeroize();
        self.t1.fast_zeroize();
        self.scratch.fast_zeroize();
        self.tmp.fast_zeroize();
        self.tmp_word.fast_zeroize();
    }
}

impl ZeroizationProbe for Sha1Rounds {
    fn is_zeroized(&self) -> bool {
        self.w.is_zeroized()
            && self.wv.is_zeroized()
            && self.t1.is_zeroized()
            && self.scratch.is_zeroized()
            && self.tmp.is_zeroized()
            && self.tmp_word.is_zeroized()
    }
}

/// SHA-1 streaming state.
///
/// Lifecycle: created with [`Sha1::new`], fed with [`Sha1::update`],
/// consumed by a single [`Sha1::finalize`]. Once finalized, further calls
/// return [`DigestError::Finalized`]; [`Sha1::reset`] re-initializes the
/// state for reuse. All sensitive material is wiped on finalize and on drop.
pub struct Sha1 {
    // Hash state H(i) per RFC 3174 Section 6.1
    h: [Word32; 5],
    rounds: Sha1Rounds,
    buffer: BlockBuffer,
}

impl Sha1 {
    /// Create a new SHA-1 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: core::array::from_fn(|i| Word32::new(H0[i])),
            rounds: Sha1Rounds::new(),
            buffer: BlockBuffer::new(),
        }
    }

    /// Absorb input data.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Finalized`] if the state has already been
    /// finalized.
    pub fn update(&mut self, data: &[u8]) -> Result<(), DigestError> {
        if self.buffer.is_finalized() {
            return Err(DigestError::Finalized);
        }

        self.absorb(data);
        Ok(())
    }

    /// Apply the final padding and produce the digest.
    ///
    /// Terminal: the state stays finalized afterwards and must be
    /// [`reset`](Self::reset) before reuse.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Finalized`] on a second call.
    pub fn finalize(&mut self) -> Result<[u8; SHA1_DIGEST_LEN], DigestError> {
        if self.buffer.is_finalized() {
            return Err(DigestError::Finalized);
        }

        Ok(self.squeeze())
    }

    /// Wipe everything and return to H(0) for reuse
    pub fn reset(&mut self) {
        self.fast_zeroize();
        for (word, init) in self.h.iter_mut().zip(H0.iter()) {
            *word = Word32::new(*init);
        }
    }

    fn absorb(&mut self, data: &[u8]) {
        let Self { h, rounds, buffer } = self;
        buffer.feed(data, |block| rounds.compress(h, block));
    }

    fn squeeze(&mut self) -> [u8; SHA1_DIGEST_LEN] {
        {
            let Self { h, rounds, buffer } = self;
            buffer.pad(|block| rounds.compress(h, block));
        }

        // Serialize H(N) big-endian; export wipes each word as it goes
        let mut out = [0u8; SHA1_DIGEST_LEN];
        for (i, word) in self.h.iter_mut().enumerate() {
            word.export_as_be_bytes(&mut self.rounds.tmp_word);
            out[i * 4..(i + 1) * 4].copy_from_slice(&self.rounds.tmp_word);
        }
        self.rounds.tmp_word.fast_zeroize();

        out
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl FastZeroizable for Sha1 {
    fn fast_zeroize(&mut self) {
        self.h.fast_zeroize();
        self.rounds.fast_zeroize();
        self.buffer.fast_zeroize();
    }
}

impl ZeroizeMetadata for Sha1 {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl ZeroizationProbe for Sha1 {
    fn is_zeroized(&self) -> bool {
        self.h.is_zeroized() && self.rounds.is_zeroized() && self.buffer.is_zeroized()
    }
}

impl Drop for Sha1 {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

/// Computes the SHA-1 digest of `data` in one call.
///
/// Pure function of its input; the internal state is wiped before returning.
/// The caller owns the returned array.
pub fn sha1(data: &[u8]) -> [u8; SHA1_DIGEST_LEN] {
    let mut state = Sha1::new();
    state.absorb(data);
    let digest = state.squeeze();
    state.fast_zeroize();
    digest
}
