//! # passforge
//!
//! Deterministic, policy-aware password derivation.
//!
//! One secret master phrase, a rotation number, and a target context
//! deterministically derive a high-entropy password that contains at
//! least one lowercase letter, one uppercase letter, one digit, and one
//! symbol. Identical inputs always produce the identical string; any
//! change to any input produces an unrelated one. Nothing is stored:
//! salt, key material, and password are recomputed from scratch on
//! every call and secret intermediates are wiped when the call returns.
//!
//! The pipeline runs four stages strictly in order, each consuming the
//! previous stage's output:
//!
//! ```text
//! (context, rotation) ── salt ──┐
//! master phrase ── stretch ── key bytes ── map ── candidate ── shuffle ── password
//! ```
//!
//! ## Public API
//!
//! The public surface of this crate is intentionally narrow: the
//! [`generate`] entry points, [`GenerateOptions`], the
//! [`provider::CryptoProvider`] seam for alternative crypto backends,
//! and the [`alphabet`] policy types. Everything else is `pub(crate)`.
//!
//! ```no_run
//! use passforge::{generate, GenerateOptions};
//!
//! let options = GenerateOptions {
//!     context: "example.com".into(),
//!     ..GenerateOptions::default()
//! };
//! let password = generate("correct horse battery staple", 1, &options)?;
//! assert_eq!(password.len(), 20);
//! # Ok::<(), passforge::PassforgeError>(())
//! ```
//!
//! Concurrent calls are independent: no state is shared, no result is
//! memoized (a cache would keep secret-derived bytes alive longer than
//! one call), and a given input tuple yields the same output no matter
//! how many calls are in flight.

// Module declarations.
pub mod alphabet;
pub mod error;
pub mod provider;
pub(crate) mod keys;
pub(crate) mod mapper;
pub(crate) mod salt;
pub(crate) mod shuffle;

use zeroize::Zeroize;

use provider::{CryptoProvider, RingProvider};

pub use alphabet::CharClass;
pub use error::PassforgeError;
pub use keys::MIN_ITERATIONS;
pub use mapper::MIN_LENGTH;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Default password length.
pub const DEFAULT_LENGTH: usize = 20;

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 600_000;

/// Contextual parameters for one derivation.
///
/// `Default` gives an empty context, [`DEFAULT_LENGTH`] characters, and
/// [`DEFAULT_ITERATIONS`] iterations. Presentation layers that bound
/// the length (a slider, say) should clamp to [`MIN_LENGTH`] at the low
/// end; the core enforces the same floor.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Target identifier (site name, account label). Domain-separates
    /// the salt so one phrase yields unrelated passwords per target.
    pub context: String,
    /// Requested password length in characters, at least [`MIN_LENGTH`].
    pub length: usize,
    /// PBKDF2 work factor, at least [`MIN_ITERATIONS`].
    pub iterations: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            context: String::new(),
            length: DEFAULT_LENGTH,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Derive a password with the default `ring`-backed provider.
///
/// This is the main entry point. See [`generate_with_provider`] for the
/// pipeline contract; this function merely fixes the backend.
pub fn generate(
    master_phrase: &str,
    rotation: u32,
    options: &GenerateOptions,
) -> Result<String, PassforgeError> {
    generate_with_provider(&RingProvider, master_phrase, rotation, options)
}

/// Derive a password using an explicit cryptographic provider.
///
/// Validates up front (length below [`MIN_LENGTH`], an iteration count
/// below [`MIN_ITERATIONS`], or a master phrase that is empty after
/// normalization all fail before any key stretching happens), then runs
/// salt derivation, key stretching, character mapping, and the
/// deterministic shuffle in sequence and returns the first
/// `options.length` characters.
///
/// Pure with respect to its declared inputs: no global state, no
/// external randomness, no observable side effects beyond invoking the
/// provider's primitives.
pub fn generate_with_provider<P: CryptoProvider>(
    provider: &P,
    master_phrase: &str,
    rotation: u32,
    options: &GenerateOptions,
) -> Result<String, PassforgeError> {
    if options.length < MIN_LENGTH {
        return Err(PassforgeError::LengthTooShort(options.length));
    }
    if options.iterations < MIN_ITERATIONS {
        return Err(PassforgeError::WeakIterationCount(options.iterations));
    }

    let mut phrase = salt::normalize(master_phrase);
    if phrase.is_empty() {
        return Err(PassforgeError::EmptyMasterPhrase);
    }

    let salt = salt::derive(provider, &options.context, rotation)?;
    let key = keys::stretch(provider, &phrase, &salt, options.iterations, options.length)?;
    phrase.zeroize();

    let mut candidate = mapper::map(&key, options.length)?;
    shuffle::shuffle(provider, &key, &mut candidate)?;

    candidate.truncate(options.length);
    // The alphabets are pure ASCII, so every byte is a valid char.
    Ok(candidate.iter().map(|&b| b as char).collect())
}
