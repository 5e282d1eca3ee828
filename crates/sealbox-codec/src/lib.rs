//! Text and hex entry points for sealbox AES-256-CBC.
//!
//! A [`Codec`] owns one key and one IV. [`Codec::encrypt`] always uses them;
//! [`Codec::decrypt`] takes the key and IV from the caller so that a receiver can
//! decrypt with material it unwrapped itself.
//!
//! The wire format is bare lowercase hex: no header, version or embedded IV.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod error;
mod key_source;
pub mod text;

pub use crate::codec::{decrypt_with, random_iv, Codec};
pub use crate::error::{Error, HexField, Result};
pub use crate::key_source::{
    derive_key, timestamp_seed, KeySource, RandomKeySource, TimestampKeySource,
};
pub use sealbox_core::{Aes256Key, Iv};
