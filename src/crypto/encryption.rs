//! AES-256-GCM encryption/decryption
//!
//! Implements the two public operations. `encrypt` wraps plaintext in the
//! envelope, derives a key from a fresh random salt, and seals with
//! AES-256-GCM under a fresh random IV; `decrypt` reverses the framing,
//! authenticates, and unwraps the envelope.

use aes_gcm::{
    aead::{
        consts::U32,
        rand_core::{CryptoRng, RngCore},
        Aead, KeyInit, OsRng,
    },
    aes::Aes256,
    AesGcm, Nonce,
};

use crate::crypto::blob::{CipherBlob, IV_LENGTH};
use crate::crypto::envelope::Envelope;
use crate::crypto::key_derivation::{
    derive_decryption_key, derive_encryption_key, DecryptionKey, EncryptionKey,
};
use crate::error::{PasslockError, PasslockResult};

/// AES-256-GCM parameterized with the 32-byte IV this format uses
///
/// GCM's standard nonce is 96 bits; this format fixes a 32-byte IV, which the
/// cipher absorbs through its GHASH-based IV processing.
type Aes256Gcm32 = AesGcm<Aes256, U32>;

/// Encrypt plaintext with a password, returning a base64 blob
///
/// Generates a fresh random salt and IV on every call, so two encryptions of
/// the same inputs produce different blobs.
pub fn encrypt(password: &str, plaintext: &str) -> PasslockResult<String> {
    encrypt_with_rng(password, plaintext, &mut OsRng)
}

/// Encrypt with a caller-supplied random source
///
/// `encrypt` fixes the source to the operating system RNG; tests substitute
/// a deterministic one to pin the salt and IV.
pub fn encrypt_with_rng(
    password: &str,
    plaintext: &str,
    rng: &mut (impl RngCore + CryptoRng),
) -> PasslockResult<String> {
    let envelope_bytes = Envelope::new(plaintext).to_bytes()?;

    let (key, salt) = derive_encryption_key(password, rng);

    // Independent draw from the salt
    let mut iv = [0u8; IV_LENGTH];
    rng.fill_bytes(&mut iv);

    let ciphertext = seal(&key, &iv, &envelope_bytes)?;

    Ok(CipherBlob {
        salt,
        iv,
        ciphertext,
    }
    .encode())
}

/// Decrypt a base64 blob with a password
///
/// Returns the original plaintext, or a typed failure: `MalformedBlob` for
/// framing problems, `DecryptionFailed` for a wrong password or tampered
/// data, `InvalidPayload` for an authentic payload that is not a valid
/// envelope.
pub fn decrypt(password: &str, blob: &str) -> PasslockResult<String> {
    let blob = CipherBlob::decode(blob)?;

    let key = derive_decryption_key(password, &blob.salt);

    let envelope_bytes = open(&key, &blob.iv, &blob.ciphertext)?;

    let envelope = Envelope::from_bytes(&envelope_bytes)?;
    Ok(envelope.plaintext)
}

/// Run AES-256-GCM encryption with an encrypt-capability key
fn seal(key: &EncryptionKey, iv: &[u8; IV_LENGTH], plaintext: &[u8]) -> PasslockResult<Vec<u8>> {
    let cipher = Aes256Gcm32::new_from_slice(key.as_bytes())
        .map_err(|e| PasslockError::Encryption(format!("Failed to create cipher: {}", e)))?;

    cipher
        .encrypt(Nonce::from_slice(iv), plaintext)
        .map_err(|e| PasslockError::Encryption(format!("Encryption failed: {}", e)))
}

/// Run AES-256-GCM decryption with a decrypt-capability key
///
/// Wrong password, wrong salt pairing, and tampered ciphertext all surface as
/// the same `DecryptionFailed`.
fn open(key: &DecryptionKey, iv: &[u8; IV_LENGTH], ciphertext: &[u8]) -> PasslockResult<Vec<u8>> {
    let cipher = Aes256Gcm32::new_from_slice(key.as_bytes())
        .map_err(|e| PasslockError::Encryption(format!("Failed to create cipher: {}", e)))?;

    cipher
        .decrypt(Nonce::from_slice(iv), ciphertext)
        .map_err(|_| PasslockError::DecryptionFailed)
}
