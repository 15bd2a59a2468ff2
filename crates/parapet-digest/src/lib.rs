// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 and SHA-256 with systematic zeroization.
//!
//! Implementation per FIPS 180-4: SHA-256 follows RFC 6234 Section 6.2,
//! SHA-1 follows RFC 3174. No external cryptography dependencies. Working
//! registers, message schedules, and block buffers live inside the state
//! structs so every intermediate value is wiped on the way out, with `Drop`
//! as the safety net.
//!
//! Each algorithm exposes a streaming state machine (`new` / `update` /
//! `finalize`) and a one-shot convenience function. A state is exclusively
//! owned by its caller; `update` or `finalize` on an already-finalized state
//! returns [`DigestError::Finalized`], and [`Sha1::reset`] /
//! [`Sha256::reset`] are the explicit way to reuse an allocation.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//! - RFC 3174: US Secure Hash Algorithm 1 (SHA1)
//!   <https://datatracker.ietf.org/doc/html/rfc3174>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod block;
mod error;
mod sha1;
mod sha256;
mod word32;

pub use error::DigestError;
pub use sha1::{SHA1_DIGEST_LEN, Sha1, sha1};
pub use sha256::{SHA256_DIGEST_LEN, Sha256, sha256};
