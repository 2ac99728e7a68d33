//! Deterministic salt derivation.
//!
//! The salt binds a derivation to its target context and rotation
//! number, so one master phrase yields unrelated passwords per site and
//! per rotation. It is derived, never stored:
//!
//! ```text
//! salt = SHA-256("passforge-v1:{context}:{rotation}")[..16]
//! ```
//!
//! Context is normalized (Unicode canonical composition, whitespace
//! trim) before hashing so that visually identical inputs hash
//! identically. The rotation number's canonical form is its decimal
//! string. Bumping the version tag would rotate every derived password
//! at once, so it is frozen.

use unicode_normalization::UnicodeNormalization;

use crate::error::PassforgeError;
use crate::provider::CryptoProvider;

/// Size of a derived salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Domain-separation tag mixed into every salt payload.
const VERSION_TAG: &str = "passforge-v1";

/// A derived salt. Not secret, but never persisted either: it is
/// recomputed from context and rotation on every call.
pub(crate) struct Salt([u8; SALT_LEN]);

impl Salt {
    pub(crate) fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

/// Canonicalize caller-supplied text: trim surrounding whitespace, then
/// apply Unicode canonical composition (NFC). Composed and decomposed
/// spellings of the same text normalize to the same string.
pub(crate) fn normalize(input: &str) -> String {
    input.trim().nfc().collect()
}

/// Derive the salt for a (context, rotation) pair.
///
/// Deterministic: the same pair always yields the same 16 bytes, and
/// any change to either input changes the full payload being hashed.
/// The colon-joined payload is unambiguous because the rotation segment
/// is all digits and always last.
pub(crate) fn derive<P: CryptoProvider>(
    provider: &P,
    context: &str,
    rotation: u32,
) -> Result<Salt, PassforgeError> {
    let payload = format!("{}:{}:{}", VERSION_TAG, normalize(context), rotation);
    let digest = provider.hash256(payload.as_bytes())?;

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&digest[..SALT_LEN]);
    Ok(Salt(salt))
}
