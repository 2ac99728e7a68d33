//! Cryptographic capability providers.
//!
//! This module is the only place in the crate that imports `ring`
//! directly. All other modules reach the primitives exclusively through
//! the [`CryptoProvider`] trait exposed here.
//!
//! The derivation pipeline needs exactly three capabilities:
//! - **hash256**: a collision-resistant 256-bit hash (SHA-256)
//! - **hmac256**: a keyed pseudorandom function (HMAC-SHA256)
//! - **stretch**: salted, iterated password-based key derivation
//!   (PBKDF2 over HMAC-SHA256)
//!
//! Selecting a backend is a startup-time concern for the caller; the
//! pipeline itself is generic over the trait and contains no platform
//! branches. [`RingProvider`] is the default backend and the one used
//! by [`crate::generate`].

use std::num::NonZeroU32;

use ring::{digest, hmac, pbkdf2};

use crate::error::PassforgeError;

/// Size of a 256-bit digest or MAC tag in bytes.
pub const DIGEST_LEN: usize = 32;

/// Host-supplied cryptographic capabilities.
///
/// Implementations must be deterministic: for fixed arguments every call
/// returns the same bytes. An implementation that cannot supply one of
/// the capabilities reports [`PassforgeError::PrimitiveUnavailable`]
/// naming it, which callers surface as an environment failure.
pub trait CryptoProvider {
    /// Compute a 256-bit collision-resistant hash of `data`.
    fn hash256(&self, data: &[u8]) -> Result<[u8; DIGEST_LEN], PassforgeError>;

    /// Compute a 256-bit keyed MAC of `data` under `key`.
    fn hmac256(&self, key: &[u8], data: &[u8]) -> Result<[u8; DIGEST_LEN], PassforgeError>;

    /// Stretch `secret` into `out.len()` bytes of uniformly distributed
    /// key material, salted with `salt` and iterated `iterations` times
    /// per output block.
    fn stretch(
        &self,
        secret: &[u8],
        salt: &[u8],
        iterations: NonZeroU32,
        out: &mut [u8],
    ) -> Result<(), PassforgeError>;
}

/// The default provider, backed by `ring`.
///
/// Stateless and trivially shareable; constructing one performs no work.
#[derive(Debug, Default, Clone, Copy)]
pub struct RingProvider;

impl CryptoProvider for RingProvider {
    fn hash256(&self, data: &[u8]) -> Result<[u8; DIGEST_LEN], PassforgeError> {
        let digest = digest::digest(&digest::SHA256, data);
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(digest.as_ref());
        Ok(out)
    }

    fn hmac256(&self, key: &[u8], data: &[u8]) -> Result<[u8; DIGEST_LEN], PassforgeError> {
        let key = hmac::Key::new(hmac::HMAC_SHA256, key);
        let tag = hmac::sign(&key, data);
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(tag.as_ref());
        Ok(out)
    }

    fn stretch(
        &self,
        secret: &[u8],
        salt: &[u8],
        iterations: NonZeroU32,
        out: &mut [u8],
    ) -> Result<(), PassforgeError> {
        pbkdf2::derive(pbkdf2::PBKDF2_HMAC_SHA256, iterations, salt, secret, out);
        Ok(())
    }
}
