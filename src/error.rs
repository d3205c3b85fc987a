//! Custom error types for passlock
//!
//! This module defines the error taxonomy for encryption and decryption using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for passlock operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasslockError {
    /// Authentication failure during decryption
    ///
    /// Covers a wrong password, a corrupted salt or IV, and tampered
    /// ciphertext. The variant carries no detail distinguishing those cases.
    #[error("Decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    /// Decryption succeeded but the recovered bytes are not a valid envelope
    ///
    /// Indicates format drift or a blob produced by an incompatible version.
    #[error("Invalid payload: decrypted data is not a valid envelope")]
    InvalidPayload,

    /// The blob is not well-formed ciphertext framing
    ///
    /// The input was not base64, or decoded to fewer bytes than the salt and
    /// IV occupy. The message describes the framing problem only.
    #[error("Malformed blob: {0}")]
    MalformedBlob(String),

    /// Encryption-side failure in the host primitives
    #[error("Encryption error: {0}")]
    Encryption(String),
}

impl PasslockError {
    /// Check if this is an authentication failure (wrong password or tamper)
    pub fn is_decryption_failed(&self) -> bool {
        matches!(self, Self::DecryptionFailed)
    }

    /// Check if this is an invalid-payload error
    pub fn is_invalid_payload(&self) -> bool {
        matches!(self, Self::InvalidPayload)
    }

    /// Check if this is a malformed-blob error
    pub fn is_malformed_blob(&self) -> bool {
        matches!(self, Self::MalformedBlob(_))
    }
}

/// Result type alias for passlock operations
pub type PasslockResult<T> = Result<T, PasslockError>;
