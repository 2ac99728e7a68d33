//! Deterministic Fisher–Yates permutation.
//!
//! The mapper pins one character of each class to positions 0–3; left
//! as is, an attacker who knows the scheme would know position 2 is
//! always a digit. The shuffler removes that positional bias with a
//! Fisher–Yates pass driven by a pseudorandom byte stream that is a
//! pure function of the key material:
//!
//! ```text
//! stream[0..32]  = HMAC-SHA256(key, "shuffle-v1")
//! stream[n..n+32] = HMAC-SHA256(key, stream[0..n] || "shuffle-next")
//! ```
//!
//! Each swap consumes exactly one stream byte and no byte is ever
//! reused, so identical key material always yields the identical
//! permutation. The extension step re-MACs the entire prior stream, an
//! ad hoc extendable-output construction; both tags are frozen because
//! changing either would repermute every derived password.

use zeroize::Zeroize;

use crate::error::PassforgeError;
use crate::keys::KeyMaterial;
use crate::provider::CryptoProvider;

/// Seed tag for the first stream block.
const SEED_TAG: &[u8] = b"shuffle-v1";

/// Tag appended to the prior stream when another block is needed.
const EXTEND_TAG: &[u8] = b"shuffle-next";

/// Permute `candidate` in place, keyed solely by `key`.
///
/// Walks positions from the end down to 1; position `i` is swapped with
/// `stream_byte mod (i + 1)`, which may be `i` itself (a self-swap).
pub(crate) fn shuffle<P: CryptoProvider>(
    provider: &P,
    key: &KeyMaterial,
    candidate: &mut [u8],
) -> Result<(), PassforgeError> {
    let mut stream = provider.hmac256(key.as_bytes(), SEED_TAG)?.to_vec();
    let mut cursor = 0;

    for i in (1..candidate.len()).rev() {
        if cursor == stream.len() {
            let mut payload = stream.clone();
            payload.extend_from_slice(EXTEND_TAG);
            let block = provider.hmac256(key.as_bytes(), &payload)?;
            payload.zeroize();
            stream.extend_from_slice(&block);
        }

        let b = stream[cursor] as usize;
        cursor += 1;
        candidate.swap(i, b % (i + 1));
    }

    // The stream is key-derived; wipe it like the key itself.
    stream.zeroize();
    Ok(())
}
