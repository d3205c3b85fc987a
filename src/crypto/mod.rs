//! Cryptographic core for passlock
//!
//! Provides password-based authenticated encryption: PBKDF2-HMAC-SHA256 key
//! derivation and AES-256-GCM over a JSON plaintext envelope, framed into a
//! self-contained base64 blob.

pub mod blob;
pub mod encryption;
pub mod envelope;
pub mod key_derivation;

pub use blob::{CipherBlob, IV_LENGTH};
pub use encryption::{decrypt, encrypt, encrypt_with_rng};
pub use envelope::Envelope;
pub use key_derivation::{
    derive_decryption_key, derive_encryption_key, DecryptionKey, EncryptionKey, Salt,
    PBKDF2_ITERATIONS, SALT_LENGTH,
};
