//! Error taxonomy for the cipher core.

use thiserror::Error;

/// Input-validation failures. None of them leave state behind, so a failed
/// call never affects later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Key is not exactly 32 bytes.
    #[error("AES-256 key must be 32 bytes, got {got}")]
    KeyLength {
        /// Length that was supplied.
        got: usize,
    },

    /// IV is not exactly 16 bytes.
    #[error("CBC initialization vector must be 16 bytes, got {got}")]
    IvLength {
        /// Length that was supplied.
        got: usize,
    },

    /// Ciphertext is not a whole number of 16-byte blocks.
    #[error("ciphertext must be a multiple of 16 bytes, got {got}")]
    BlockLength {
        /// Length that was supplied.
        got: usize,
    },

    /// Trailing pad-length byte is zero, above 16, or longer than the buffer.
    #[error("invalid padding: pad length {pad_len} for {len}-byte plaintext")]
    InvalidPadding {
        /// Value of the trailing pad-length byte.
        pad_len: u8,
        /// Length of the decrypted buffer.
        len: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;
