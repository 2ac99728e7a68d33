//! Key-byte to character mapping.
//!
//! Turns stretched key material into a candidate password. The first
//! four positions take one character each from the four classes in
//! fixed order (lower, upper, digit, symbol), which guarantees class
//! coverage; the remaining positions draw from the combined alphabet.
//! The fixed positions are a deliberate intermediate artifact; the
//! shuffler exists to erase exactly that positional structure.

use crate::alphabet::{CharClass, COMBINED};
use crate::error::PassforgeError;
use crate::keys::KeyMaterial;

/// Minimum accepted password length.
pub const MIN_LENGTH: usize = 8;

/// Map key bytes onto a candidate character sequence of `length` bytes.
///
/// Position `i` always consumes key byte `i % key.len()`, for the
/// coverage positions and the combined positions alike, so the mapping
/// is a pure function of the key material.
pub(crate) fn map(key: &KeyMaterial, length: usize) -> Result<Vec<u8>, PassforgeError> {
    if length < MIN_LENGTH {
        return Err(PassforgeError::LengthTooShort(length));
    }

    let bytes = key.as_bytes();
    let mut candidate = Vec::with_capacity(length);

    for (i, class) in CharClass::COVERAGE_ORDER.iter().enumerate() {
        let alphabet = class.alphabet();
        let b = bytes[i % bytes.len()] as usize;
        candidate.push(alphabet[b % alphabet.len()]);
    }

    for i in CharClass::COVERAGE_ORDER.len()..length {
        let b = bytes[i % bytes.len()] as usize;
        candidate.push(COMBINED[b % COMBINED.len()]);
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use crate::provider::RingProvider;
    use crate::salt;

    fn key_for(length: usize) -> KeyMaterial {
        let provider = RingProvider;
        let s = salt::derive(&provider, "mapper-test", 1).unwrap();
        keys::stretch(&provider, "phrase", &s, keys::MIN_ITERATIONS, length).unwrap()
    }

    #[test]
    fn test_rejects_short_length() {
        let key = key_for(8);
        assert_eq!(
            map(&key, 7).err(),
            Some(PassforgeError::LengthTooShort(7))
        );
        assert!(map(&key, 8).is_ok());
    }

    #[test]
    fn test_first_four_positions_cover_all_classes() {
        let key = key_for(12);
        let candidate = map(&key, 12).unwrap();
        for (i, class) in CharClass::COVERAGE_ORDER.iter().enumerate() {
            assert!(
                class.contains(candidate[i] as char),
                "position {} is not in its class",
                i
            );
        }
    }

    #[test]
    fn test_output_length_and_alphabet_membership() {
        let key = key_for(40);
        let candidate = map(&key, 40).unwrap();
        assert_eq!(candidate.len(), 40);
        assert!(candidate.iter().all(|b| COMBINED.contains(b)));
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let key = key_for(20);
        assert_eq!(map(&key, 20).unwrap(), map(&key, 20).unwrap());
    }
}
