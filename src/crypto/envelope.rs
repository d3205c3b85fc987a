//! Plaintext envelope wrapping
//!
//! Plaintext is wrapped in a small JSON envelope before encryption. The
//! wrapper lets the decrypt path tell a wrong password apart from authentic
//! data in an unknown format, and leaves room for future fields.

use serde::{Deserialize, Serialize};

use crate::error::{PasslockError, PasslockResult};

/// Current envelope version
const ENVELOPE_VERSION: u8 = 1;

/// The structured wrapper placed around plaintext prior to encryption
///
/// Serializes as `{"plaintext":"..."}`. The version field stays off the wire
/// while at its default, so current blobs keep the single-key form; a future
/// version bump starts writing it without breaking older payload validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// The wrapped plaintext
    pub plaintext: String,
    /// Version for future format upgrades
    #[serde(default = "default_version", skip_serializing_if = "is_default_version")]
    pub version: u8,
}

fn default_version() -> u8 {
    ENVELOPE_VERSION
}

fn is_default_version(version: &u8) -> bool {
    *version == ENVELOPE_VERSION
}

impl Envelope {
    /// Wrap plaintext in a new envelope
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self {
            plaintext: plaintext.into(),
            version: ENVELOPE_VERSION,
        }
    }

    /// Serialize the envelope to the bytes that get encrypted
    pub fn to_bytes(&self) -> PasslockResult<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| PasslockError::Encryption(format!("Failed to serialize envelope: {}", e)))
    }

    /// Parse decrypted bytes back into an envelope
    ///
    /// The typed parse enforces UTF-8, the JSON shape, and a string-typed
    /// `plaintext` field in one step. Unknown extra fields are tolerated.
    pub fn from_bytes(bytes: &[u8]) -> PasslockResult<Self> {
        serde_json::from_slice(bytes).map_err(|_| PasslockError::InvalidPayload)
    }
}
