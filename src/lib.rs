//! passlock - password-based authenticated encryption
//!
//! This library turns a password and a plaintext string into a
//! self-contained, base64-encoded blob that can be decrypted only with the
//! same password. Every encryption uses a fresh random salt and IV, so
//! identical inputs never produce identical blobs, and AES-GCM
//! authentication makes any tampering detectable.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `crypto::key_derivation`: PBKDF2-HMAC-SHA256 key derivation with
//!   mode-gated key types
//! - `crypto::envelope`: the JSON wrapper around plaintext that backs
//!   payload validation
//! - `crypto::blob`: the salt ‖ iv ‖ ciphertext wire framing and its base64
//!   encoding
//! - `crypto::encryption`: the AES-256-GCM encrypt/decrypt pipeline
//!
//! # Example
//!
//! ```rust
//! use passlock::{decrypt, encrypt};
//!
//! let blob = encrypt("correct-password", "hello world")?;
//! let plaintext = decrypt("correct-password", &blob)?;
//! assert_eq!(plaintext, "hello world");
//!
//! // A wrong password is an ordinary, typed failure
//! assert!(decrypt("wrong-password", &blob).unwrap_err().is_decryption_failed());
//! # Ok::<(), passlock::PasslockError>(())
//! ```

pub mod crypto;
pub mod error;

pub use crypto::{
    decrypt, derive_decryption_key, derive_encryption_key, encrypt, encrypt_with_rng, CipherBlob,
    DecryptionKey, EncryptionKey, Envelope, Salt, IV_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH,
};
pub use error::{PasslockError, PasslockResult};
