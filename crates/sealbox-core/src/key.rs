//! Key material types for AES-256.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::{Error, Result};

/// Key length in bytes (Nk = 8 words).
pub const KEY_SIZE: usize = 32;

/// Number of cipher rounds for AES-256.
pub const ROUNDS: usize = 14;

/// AES-256 key wrapper. Bytes are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Aes256Key([u8; KEY_SIZE]);

impl Aes256Key {
    /// Builds a key from a slice, rejecting anything that is not exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::KeyLength { got: bytes.len() })?;
        Ok(Self(key))
    }

    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Aes256Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Aes256Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes256Key(..)")
    }
}

/// CBC initialization vector. Public, but must be carried next to the ciphertext.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iv(pub Block);

impl Iv {
    /// Builds an IV from a slice, rejecting anything that is not exactly 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let iv: Block = bytes
            .try_into()
            .map_err(|_| Error::IvLength { got: bytes.len() })?;
        Ok(Self(iv))
    }

    /// Raw IV bytes.
    #[inline]
    pub fn as_bytes(&self) -> &Block {
        &self.0
    }
}

impl From<Block> for Iv {
    fn from(value: Block) -> Self {
        Self(value)
    }
}

/// The 15 round keys expanded from an [`Aes256Key`].
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(pub(crate) [Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=14).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundKeys([..; {}])", self.0.len())
    }
}
