//! Errors surfaced by the codec entry points.

use core::fmt;

use thiserror::Error;

/// Which hex input failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexField {
    /// The 64-digit key.
    Key,
    /// The 32-digit IV.
    Iv,
    /// The ciphertext body.
    Ciphertext,
}

impl fmt::Display for HexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HexField::Key => "key",
            HexField::Iv => "iv",
            HexField::Ciphertext => "ciphertext",
        };
        f.write_str(name)
    }
}

/// Codec failures. All are input-validation errors and none are retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Non-hex characters or an odd digit count. Raised before any cipher work.
    #[error("malformed {field} hex: {source}")]
    MalformedHex {
        /// Input that failed to parse.
        field: HexField,
        /// Underlying parse error.
        #[source]
        source: hex::FromHexError,
    },

    /// Character whose code point does not fit in a single byte.
    #[error("character {ch:?} at position {index} is outside the single-byte range")]
    NonLatin1Char {
        /// Offending character.
        ch: char,
        /// Character position in the input text.
        index: usize,
    },

    /// Failure from the cipher core: key, IV, block length or padding.
    #[error(transparent)]
    Cipher(#[from] sealbox_core::Error),
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

pub(crate) fn parse_hex(field: HexField, input: &str) -> Result<Vec<u8>> {
    hex::decode(input).map_err(|source| Error::MalformedHex { field, source })
}
