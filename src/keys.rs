//! Key stretching and key-material ownership.
//!
//! This module owns two responsibilities:
//! 1. Stretching the normalized master phrase into a long, uniformly
//!    distributed byte sequence via salted, iterated PBKDF2-HMAC-SHA256.
//! 2. Holding the stretched bytes in a type that is opaque,
//!    non-cloneable, and zeroised on drop.
//!
//! ## Derivation structure
//!
//! ```text
//! PBKDF2-HMAC-SHA256(
//!     secret     = normalized master phrase,
//!     salt       = 16-byte derived salt,
//!     iterations = work factor (>= 100,000),
//!     dk_len     = max(512, length * 16) / 8 bytes
//! )
//! ```
//!
//! The iteration floor keeps offline brute-force of the master phrase
//! computationally expensive; the slowness is the point, not a
//! performance defect. The output width guarantees at least 512 bits of
//! material and never fewer than two bytes per requested character, so
//! the mapper and shuffler never run dry of fresh bytes.

use std::num::NonZeroU32;

use zeroize::Zeroize;

use crate::error::PassforgeError;
use crate::provider::CryptoProvider;
use crate::salt::Salt;

/// Minimum accepted PBKDF2 iteration count.
pub const MIN_ITERATIONS: u32 = 100_000;

/// Minimum width of stretched key material, in bits.
const MIN_OUTPUT_BITS: usize = 512;

/// Bits of key material reserved per requested output character.
const BITS_PER_CHAR: usize = 16;

/// Stretched key material for one derivation call.
///
/// - Not `Clone`. One derivation produces exactly one copy.
/// - Zeroised on drop. The bytes are overwritten before deallocation.
/// - Raw bytes never leave the crate; `as_bytes` is `pub(crate)`.
pub(crate) struct KeyMaterial {
    bytes: Vec<u8>,
}

impl KeyMaterial {
    /// Borrow the raw key bytes for mapping and shuffling.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Stretch the master phrase into key material sized for `length`
/// output characters.
///
/// Fails with [`PassforgeError::WeakIterationCount`] if `iterations`
/// is below [`MIN_ITERATIONS`]. The caller passes the phrase already
/// normalized; this module treats it as opaque bytes.
pub(crate) fn stretch<P: CryptoProvider>(
    provider: &P,
    phrase: &str,
    salt: &Salt,
    iterations: u32,
    length: usize,
) -> Result<KeyMaterial, PassforgeError> {
    let work_factor = NonZeroU32::new(iterations)
        .filter(|n| n.get() >= MIN_ITERATIONS)
        .ok_or(PassforgeError::WeakIterationCount(iterations))?;

    let output_bits = MIN_OUTPUT_BITS.max(length * BITS_PER_CHAR);
    let mut bytes = vec![0u8; output_bits / 8];
    provider.stretch(phrase.as_bytes(), salt.as_bytes(), work_factor, &mut bytes)?;

    Ok(KeyMaterial { bytes })
}
