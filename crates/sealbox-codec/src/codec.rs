//! Encrypt and decrypt entry points over hex strings.
//!
//! Encryption always uses the instance's own key and IV. Decryption takes both
//! from the caller, who typically obtained the key by unwrapping it with an
//! asymmetric mechanism on the receiving side.

use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sealbox_core::{decrypt_message, encrypt_message, Aes256Key, Iv, BLOCK_SIZE};

use crate::error::{parse_hex, HexField, Result};
use crate::key_source::{KeySource, TimestampKeySource};
use crate::text;

/// An AES-256-CBC codec bound to one key and one IV.
#[derive(Clone, Debug)]
pub struct Codec {
    key: Aes256Key,
    iv: Iv,
}

impl Codec {
    /// Creates a codec with a timestamp-derived key and a random IV.
    pub fn new() -> Self {
        Self::with_key_source(&mut TimestampKeySource::new(), &mut OsRng)
    }

    /// Creates a codec whose key comes from `source` and IV from `rng`.
    pub fn with_key_source<K, R>(source: &mut K, rng: &mut R) -> Self
    where
        K: KeySource + ?Sized,
        R: RngCore + CryptoRng,
    {
        let key = source.generate_key();
        let iv = random_iv(rng);
        debug!("created codec instance with fresh key and iv");
        Self { key, iv }
    }

    /// Creates a codec from existing key material.
    pub fn from_parts(key: Aes256Key, iv: Iv) -> Self {
        Self { key, iv }
    }

    /// The instance key.
    pub fn key(&self) -> &Aes256Key {
        &self.key
    }

    /// The instance IV.
    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// Lowercase hex of the key, for handing to a key-wrapping step.
    pub fn key_hex(&self) -> String {
        hex::encode(self.key.as_bytes())
    }

    /// Lowercase hex of the IV.
    pub fn iv_hex(&self) -> String {
        hex::encode(self.iv.as_bytes())
    }

    /// Encrypts single-byte text, returning lowercase hex.
    pub fn encrypt(&self, message: &str) -> Result<String> {
        let bytes = text::to_bytes(message)?;
        Ok(self.encrypt_bytes(&bytes))
    }

    /// Encrypts raw bytes, returning lowercase hex. The output length is a
    /// multiple of 32 hex digits.
    pub fn encrypt_bytes(&self, data: &[u8]) -> String {
        hex::encode(encrypt_message(&self.key, &self.iv, data))
    }

    /// Decrypts hex ciphertext with the supplied hex key and IV, returning text.
    pub fn decrypt(key_hex: &str, iv_hex: &str, ciphertext_hex: &str) -> Result<String> {
        let bytes = Self::decrypt_bytes(key_hex, iv_hex, ciphertext_hex)?;
        Ok(text::from_bytes(&bytes))
    }

    /// Decrypts hex ciphertext with the supplied hex key and IV, returning bytes.
    ///
    /// All three inputs are parsed before any length check or cipher work.
    pub fn decrypt_bytes(key_hex: &str, iv_hex: &str, ciphertext_hex: &str) -> Result<Vec<u8>> {
        let key = parse_hex(HexField::Key, key_hex)?;
        let iv = parse_hex(HexField::Iv, iv_hex)?;
        let ciphertext = parse_hex(HexField::Ciphertext, ciphertext_hex)?;

        let key = Aes256Key::from_slice(&key)?;
        let iv = Iv::from_slice(&iv)?;
        decrypt_with(&key, &iv, &ciphertext)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// Decrypts raw ciphertext with raw key material.
pub fn decrypt_with(key: &Aes256Key, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
    debug!("decrypting {} ciphertext bytes", ciphertext.len());
    Ok(decrypt_message(key, iv, ciphertext)?)
}

/// Draws a fresh IV from `rng`.
pub fn random_iv<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Iv {
    let mut iv = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut iv);
    Iv::from(iv)
}
