//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Derives 256-bit AES keys from passwords. The salt is generated fresh for
//! every encryption and travels inside the ciphertext blob, so the decrypt
//! side can rebuild the same key from the password alone.

use std::fmt;

use aes_gcm::aead::rand_core::{CryptoRng, RngCore};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the key-derivation salt in bytes
pub const SALT_LENGTH: usize = 16;

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 1000;

/// Size of the derived AES-256 key in bytes
const KEY_LENGTH: usize = 32;

/// Salt mixed into key derivation
///
/// Ensures distinct keys even for identical passwords across calls. Not a
/// secret; it is carried in the clear at the front of the ciphertext blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salt([u8; SALT_LENGTH]);

impl Salt {
    /// Generate a random salt from the given RNG
    pub fn generate(rng: &mut (impl RngCore + CryptoRng)) -> Self {
        let mut bytes = [0u8; SALT_LENGTH];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Reconstruct a salt from raw bytes sliced out of a blob
    pub fn from_bytes(bytes: [u8; SALT_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the salt bytes
    pub fn as_bytes(&self) -> &[u8; SALT_LENGTH] {
        &self.0
    }
}

/// A key usable only for encryption
///
/// Both key types wrap identical PBKDF2 output; the split keeps an
/// encrypt-side key from ever being fed to the decrypt path, and vice versa.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey([u8; KEY_LENGTH]);

impl EncryptionKey {
    /// Get the key bytes
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

// Don't print key material in Debug output
impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("len", &KEY_LENGTH)
            .finish()
    }
}

/// A key usable only for decryption
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DecryptionKey([u8; KEY_LENGTH]);

impl DecryptionKey {
    /// Get the key bytes
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

// Don't print key material in Debug output
impl fmt::Debug for DecryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptionKey")
            .field("len", &KEY_LENGTH)
            .finish()
    }
}

/// Derive a fresh encryption key from a password
///
/// Generates a new random salt and returns it alongside the key; the salt
/// must be carried with the ciphertext for the key to be recoverable.
/// Derivation never fails, for any password including the empty string.
pub fn derive_encryption_key(
    password: &str,
    rng: &mut (impl RngCore + CryptoRng),
) -> (EncryptionKey, Salt) {
    let salt = Salt::generate(rng);
    let key = pbkdf2_key(password, &salt);
    (EncryptionKey(key), salt)
}

/// Derive a decryption key from a password and the salt extracted from a blob
pub fn derive_decryption_key(password: &str, salt: &Salt) -> DecryptionKey {
    DecryptionKey(pbkdf2_key(password, salt))
}

/// PBKDF2-HMAC-SHA256 over the password with the given salt
fn pbkdf2_key(password: &str, salt: &Salt) -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut key,
    );
    key
}
