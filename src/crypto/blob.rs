//! Ciphertext blob framing
//!
//! The wire format is a fixed-width binary concatenation, base64-encoded
//! with the standard alphabet:
//!
//! ```text
//! [0..16)   salt        (16 bytes, random)
//! [16..48)  iv          (32 bytes, random)
//! [48..end) ciphertext  (envelope JSON + 16-byte GCM tag)
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::crypto::key_derivation::{Salt, SALT_LENGTH};
use crate::error::{PasslockError, PasslockResult};

/// Size of the AES-GCM initialization vector in bytes
pub const IV_LENGTH: usize = 32;

/// A decoded ciphertext blob: salt, IV, and ciphertext with auth tag
#[derive(Debug, Clone)]
pub struct CipherBlob {
    /// Salt the key was derived with
    pub salt: Salt,
    /// Initialization vector for AES-GCM
    pub iv: [u8; IV_LENGTH],
    /// Ciphertext with the appended authentication tag
    pub ciphertext: Vec<u8>,
}

impl CipherBlob {
    /// Encode the blob to its transportable base64 form
    pub fn encode(&self) -> String {
        let mut bytes = Vec::with_capacity(SALT_LENGTH + IV_LENGTH + self.ciphertext.len());
        bytes.extend_from_slice(self.salt.as_bytes());
        bytes.extend_from_slice(&self.iv);
        bytes.extend_from_slice(&self.ciphertext);
        STANDARD.encode(bytes)
    }

    /// Decode a base64 blob and split it into salt, IV, and ciphertext
    ///
    /// Rejects input that is not base64 or that decodes to fewer bytes than
    /// the salt and IV occupy, before any slicing happens.
    pub fn decode(blob: &str) -> PasslockResult<Self> {
        let bytes = STANDARD
            .decode(blob)
            .map_err(|e| PasslockError::MalformedBlob(format!("Invalid base64: {}", e)))?;

        if bytes.len() < SALT_LENGTH + IV_LENGTH {
            return Err(PasslockError::MalformedBlob(format!(
                "Blob too short: expected at least {} bytes, got {}",
                SALT_LENGTH + IV_LENGTH,
                bytes.len()
            )));
        }

        let mut salt = [0u8; SALT_LENGTH];
        salt.copy_from_slice(&bytes[..SALT_LENGTH]);

        let mut iv = [0u8; IV_LENGTH];
        iv.copy_from_slice(&bytes[SALT_LENGTH..SALT_LENGTH + IV_LENGTH]);

        Ok(Self {
            salt: Salt::from_bytes(salt),
            iv,
            ciphertext: bytes[SALT_LENGTH + IV_LENGTH..].to_vec(),
        })
    }
}
