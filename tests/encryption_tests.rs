//! Integration tests exercising the public encrypt/decrypt surface.

use base64::{engine::general_purpose::STANDARD, Engine};
use passlock::{decrypt, encrypt, encrypt_with_rng, PasslockError, IV_LENGTH, SALT_LENGTH};
use rand_core::{impls, CryptoRng, Error, RngCore};

/// Deterministic RNG emitting 0, 1, 2, ... per byte
struct CountingRng(u8);

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.0;
            self.0 = self.0.wrapping_add(1);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for CountingRng {}

/// Flip one bit at the given decoded-byte offset and re-encode the blob
fn flip_bit(blob: &str, offset: usize) -> String {
    let mut raw = STANDARD.decode(blob).unwrap();
    raw[offset] ^= 0x01;
    STANDARD.encode(raw)
}

#[test]
fn round_trip_hello_world() {
    let blob = encrypt("correct-password", "hello world").unwrap();

    assert_eq!(decrypt("correct-password", &blob).unwrap(), "hello world");
    assert_eq!(
        decrypt("wrong-password", &blob).unwrap_err(),
        PasslockError::DecryptionFailed
    );
}

#[test]
fn round_trip_empty_plaintext() {
    let blob = encrypt("password", "").unwrap();
    assert_eq!(decrypt("password", &blob).unwrap(), "");
}

#[test]
fn round_trip_long_plaintext() {
    let plaintext = "x".repeat(100_000);
    let blob = encrypt("password", &plaintext).unwrap();
    assert_eq!(decrypt("password", &blob).unwrap(), plaintext);
}

#[test]
fn round_trip_embedded_nul() {
    let plaintext = "before\u{0000}after";
    let blob = encrypt("password", plaintext).unwrap();
    assert_eq!(decrypt("password", &blob).unwrap(), plaintext);
}

#[test]
fn round_trip_multibyte_unicode() {
    let plaintext = "héllo wörld — 密码 🔐";
    let blob = encrypt("password", plaintext).unwrap();
    assert_eq!(decrypt("password", &blob).unwrap(), plaintext);
}

#[test]
fn round_trip_empty_password() {
    let blob = encrypt("", "secret data").unwrap();
    assert_eq!(decrypt("", &blob).unwrap(), "secret data");
    assert!(decrypt("nonempty", &blob).unwrap_err().is_decryption_failed());
}

#[test]
fn round_trip_unicode_password() {
    let blob = encrypt("пароль-密码", "secret data").unwrap();
    assert_eq!(decrypt("пароль-密码", &blob).unwrap(), "secret data");
}

#[test]
fn encryption_is_nondeterministic() {
    let blob1 = encrypt("password", "same plaintext").unwrap();
    let blob2 = encrypt("password", "same plaintext").unwrap();
    assert_ne!(blob1, blob2);

    // Salt and IV segments differ, not just the ciphertext
    let raw1 = STANDARD.decode(&blob1).unwrap();
    let raw2 = STANDARD.decode(&blob2).unwrap();
    assert_ne!(raw1[..SALT_LENGTH], raw2[..SALT_LENGTH]);
    assert_ne!(
        raw1[SALT_LENGTH..SALT_LENGTH + IV_LENGTH],
        raw2[SALT_LENGTH..SALT_LENGTH + IV_LENGTH]
    );
}

#[test]
fn bit_flip_in_ciphertext_detected() {
    let blob = encrypt("password", "hello world").unwrap();
    let len = STANDARD.decode(&blob).unwrap().len();

    let tampered = flip_bit(&blob, SALT_LENGTH + IV_LENGTH);
    assert!(decrypt("password", &tampered).unwrap_err().is_decryption_failed());

    // Also the final byte, inside the authentication tag
    let tampered = flip_bit(&blob, len - 1);
    assert!(decrypt("password", &tampered).unwrap_err().is_decryption_failed());
}

#[test]
fn bit_flip_in_salt_detected() {
    let blob = encrypt("password", "hello world").unwrap();
    let tampered = flip_bit(&blob, 0);
    assert!(decrypt("password", &tampered).unwrap_err().is_decryption_failed());
}

#[test]
fn bit_flip_in_iv_detected() {
    let blob = encrypt("password", "hello world").unwrap();
    let tampered = flip_bit(&blob, SALT_LENGTH);
    assert!(decrypt("password", &tampered).unwrap_err().is_decryption_failed());
}

#[test]
fn truncated_blob_is_malformed() {
    // Fewer decoded bytes than the salt and IV occupy
    let truncated = STANDARD.encode([0u8; SALT_LENGTH + IV_LENGTH - 1]);
    assert!(decrypt("password", &truncated).unwrap_err().is_malformed_blob());
}

#[test]
fn garbage_blob_is_malformed() {
    assert!(decrypt("password", "%%% not base64 %%%")
        .unwrap_err()
        .is_malformed_blob());
}

#[test]
fn empty_blob_is_malformed() {
    assert!(decrypt("password", "").unwrap_err().is_malformed_blob());
}

#[test]
fn blob_layout_is_salt_then_iv_then_ciphertext() {
    let blob = encrypt_with_rng("password", "hello world", &mut CountingRng(0)).unwrap();
    let raw = STANDARD.decode(&blob).unwrap();

    // With the counting RNG the salt is bytes 0..16 and the IV bytes 16..48
    let expected: Vec<u8> = (0u8..48).collect();
    assert_eq!(&raw[..SALT_LENGTH + IV_LENGTH], &expected[..]);

    // Ciphertext is the envelope JSON plus the 16-byte GCM tag
    let envelope_len = r#"{"plaintext":"hello world"}"#.len();
    assert_eq!(raw.len(), SALT_LENGTH + IV_LENGTH + envelope_len + 16);

    // And the deterministic blob still decrypts through the normal path
    assert_eq!(decrypt("password", &blob).unwrap(), "hello world");
}

#[test]
fn blob_is_standard_base64() {
    let blob = encrypt("password", "hello world").unwrap();
    assert!(STANDARD.decode(&blob).is_ok());
}
