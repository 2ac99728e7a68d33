//! Error types for passforge.
//!
//! Every error variant is a distinct failure mode in the derivation
//! pipeline. Error messages are intentionally minimal: they signal
//! *what* failed without echoing input material that could leak
//! secret state. In particular, no variant ever carries the master
//! phrase, salt, or derived bytes.
//!
//! Variants fall into three groups:
//! - request validation (`LengthTooShort`, `EmptyMasterPhrase`)
//! - security configuration (`WeakIterationCount`)
//! - host environment (`PrimitiveUnavailable`)
//!
//! All failures are synchronous and final: the pipeline is a pure
//! function of its inputs, so retrying a failed call with the same
//! arguments can never succeed.

use std::fmt;

/// The single error type for all passforge operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassforgeError {
    /// The requested password length is below the minimum of 8.
    /// Carries the rejected length.
    LengthTooShort(usize),

    /// The master phrase is empty after normalization (trim + NFC).
    /// A whitespace-only phrase is rejected the same way.
    EmptyMasterPhrase,

    /// The iteration count is below the floor of 100,000. The floor
    /// keeps offline brute-force of the master phrase expensive; a
    /// count below it is an unsafe configuration, not a tuning choice.
    /// Carries the rejected count.
    WeakIterationCount(u32),

    /// A required cryptographic primitive is not available from the
    /// active provider. Carries the name of the missing capability.
    PrimitiveUnavailable(&'static str),
}

impl fmt::Display for PassforgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthTooShort(len) => {
                write!(f, "requested length {} is below the minimum of 8", len)
            }
            Self::EmptyMasterPhrase => write!(f, "master phrase is empty"),
            Self::WeakIterationCount(count) => {
                write!(f, "iteration count {} is below the floor of 100000", count)
            }
            Self::PrimitiveUnavailable(name) => {
                write!(f, "cryptographic primitive unavailable: {}", name)
            }
        }
    }
}

impl std::error::Error for PassforgeError {}
