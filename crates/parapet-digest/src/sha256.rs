// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 implementation per FIPS 180-4 / RFC 6234 Section 6.2

use parapet_zero::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

use super::block::{BLOCK_LEN, BlockBuffer};
use super::error::DigestError;
use super::word32::Word32;

/// SHA-256 digest length in bytes
pub const SHA256_DIGEST_LEN: usize = 32;

/// Round constants K per RFC 6234 Section 5.1
/// First 32 bits of fractional parts of cube roots of first 64 primes
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash values H(0) per RFC 6234 Section 6.2.1
/// First 32 bits of fractional parts of square roots of first 8 primes
const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round scratch for the compression function.
///
/// The message schedule, working variables, and temporaries live in the
/// struct so zeroization is guaranteed; nothing sensitive persists on the
/// stack across rounds.
struct Sha256Rounds {
    // Message schedule W[0..63]
    w: [Word32; 64],

    // Working variables a..h per RFC 6234 Section 6.2.2
    wv: [Word32; 8],

    // Temporaries
    t1: Word32,
    t2: Word32,
    scratch: Word32,
    tmp: Word32,
    tmp_word: [u8; 4],
}

impl Sha256Rounds {
    fn new() -> Self {
        Self {
            w: core::array::from_fn(|_| Word32::zero()),
            wv: core::array::from_fn(|_| Word32::zero()),
            t1: Word32::zero(),
            t2: Word32::zero(),
            scratch: Word32::zero(),
            tmp: Word32::zero(),
            tmp_word: [0u8; 4],
        }
    }

    /// Compression function per RFC 6234 Section 6.2.2: updates `h` with a
    /// single 512-bit message block.
    fn compress(&mut self, h: &mut [Word32; 8], block: &[u8; BLOCK_LEN]) {
        // W[0..15] from the block, big-endian
        for t in 0..16 {
            self.tmp_word.copy_from_slice(&block[t * 4..(t + 1) * 4]);
            self.w[t].fill_with_be_bytes(&mut self.tmp_word);
        }

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            Word32::set_ssig1(&mut self.scratch, &self.w[t - 2]);
            self.tmp.copy_from(&self.w[t - 7]);
            self.tmp.wrapping_add_assign(&self.scratch);

            Word32::set_ssig0(&mut self.scratch, &self.w[t - 15]);
            self.tmp.wrapping_add_assign(&self.scratch);
            self.tmp.wrapping_add_assign(&self.w[t - 16]);

            self.w[t].copy_from(&self.tmp);

            self.scratch.fast_zeroize();
            self.tmp.fast_zeroize();
        }

        // Working variables from the current hash state
        for i in 0..8 {
            self.wv[i].copy_from(&h[i]);
        }

        // 64 rounds
        for (kt, wt) in K256.iter().zip(self.w.iter_mut()) {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            self.t1.copy_from(&self.wv[7]);

            Word32::set_bsig1(&mut self.scratch, &self.wv[4]);
            self.t1.wrapping_add_assign(&self.scratch);

            Word32::set_ch(&mut self.scratch, &self.wv[4], &self.wv[5], &self.wv[6]);
            self.t1.wrapping_add_assign(&self.scratch);

            self.t1.wrapping_add_assign_val(*kt);
            self.t1.wrapping_add_assign(wt);

            // W[t] is no longer needed
            wt.fast_zeroize();

            // T2 = Σ0(a) + Maj(a,b,c)
            Word32::set_bsig0(&mut self.t2, &self.wv[0]);
            Word32::set_maj(&mut self.scratch, &self.wv[0], &self.wv[1], &self.wv[2]);
            self.t2.wrapping_add_assign(&self.scratch);

            // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
            for i in (1..8).rev() {
                self.tmp.copy_from(&self.wv[i - 1]);
                self.wv[i].copy_from(&self.tmp);
            }
            self.wv[4].wrapping_add_assign(&self.t1);
            self.wv[0].copy_from(&self.t1);
            self.wv[0].wrapping_add_assign(&self.t2);

            self.scratch.fast_zeroize();
            self.tmp.fast_zeroize();
            self.t1.fast_zeroize();
            self.t2.fast_zeroize();
        }

        // H(i) = H(i-1) + working variables (take wipes wv as it goes)
        for i in 0..8 {
            let v = core::mem::take(self.wv[i].as_mut_u32());
            h[i].wrapping_add_assign_val(v);
        }
    }
}

impl FastZeroizable for Sha256Rounds {
    fn fast_zeroize(&mut self) {
        self.w.fast_zeroize();
        self.wv.fast_zeroize();
        self.t1.fast_zeroize();
        self.t2.fast_zeroize();
        self.scratch.fast_zeroize();
        self.tmp.fast_zeroize();
        self.tmp_word.fast_zeroize();
    }
}

impl ZeroizationProbe for Sha256Rounds {
    fn is_zeroized(&self) -> bool {
        self.w.is_zeroized()
            && self.wv.is_zeroized()
            && self.t1.is_zeroized()
            && self.t2.is_zeroized()
            && self.scratch.is_zeroized()
            && self.tmp.is_zeroized()
            && self.tmp_word.is_zeroized()
    }
}

/// SHA-256 streaming state.
///
/// Lifecycle: created with [`Sha256::new`], fed with [`Sha256::update`],
/// consumed by a single [`Sha256::finalize`]. Once finalized, further calls
/// return [`DigestError::Finalized`]; [`Sha256::reset`] re-initializes the
/// state for reuse. All sensitive material is wiped on finalize and on drop.
pub struct Sha256 {
    // Hash state H(i) per RFC 6234 Section 6.2.1
    h: [Word32; 8],
    rounds: Sha256Rounds,
    buffer: BlockBuffer,
}

impl Sha256 {
    /// Create a new SHA-256 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: core::array::from_fn(|i| Word32::new(H0[i])),
            rounds: Sha256Rounds::new(),
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
    pub fn finalize(&mut self) -> Result<[u8; SHA256_DIGEST_LEN], DigestError> {
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

    fn squeeze(&mut self) -> [u8; SHA256_DIGEST_LEN] {
        {
            let Self { h, rounds, buffer } = self;
            buffer.pad(|block| rounds.compress(h, block));
        }

        // Serialize H(N) big-endian; export wipes each word as it goes
        let mut out = [0u8; SHA256_DIGEST_LEN];
        for (i, word) in self.h.iter_mut().enumerate() {
            word.export_as_be_bytes(&mut self.rounds.tmp_word);
            out[i * 4..(i + 1) * 4].copy_from_slice(&self.rounds.tmp_word);
        }
        self.rounds.tmp_word.fast_zeroize();

        out
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl FastZeroizable for Sha256 {
    fn fast_zeroize(&mut self) {
        self.h.fast_zeroize();
        self.rounds.fast_zeroize();
        self.buffer.fast_zeroize();
    }
}

impl ZeroizeMetadata for Sha256 {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl ZeroizationProbe for Sha256 {
    fn is_zeroized(&self) -> bool {
        self.h.is_zeroized() && self.rounds.is_zeroized() && self.buffer.is_zeroized()
    }
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

/// Computes the SHA-256 digest of `data` in one call.
///
/// Pure function of its input; the internal state is wiped before returning.
/// The caller owns the returned array.
pub fn sha256(data: &[u8]) -> [u8; SHA256_DIGEST_LEN] {
    let mut state = Sha256::new();
    state.absorb(data);
    let digest = state.squeeze();
    state.fast_zeroize();
    digest
}
