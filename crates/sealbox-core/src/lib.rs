//! AES-256 in cipher-block-chaining mode, implemented from FIPS-197.
//!
//! This crate provides:
//! - Substitution and GF(2^8) multiplication tables as static data.
//! - The AES-256 key schedule (15 round keys) and single-block encryption and decryption.
//! - Block padding and CBC chaining over arbitrary byte messages.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cbc;
mod cipher;
mod error;
mod key;
mod padding;
mod round;
mod tables;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cbc::{decrypt_message, encrypt_message};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes256Key, Iv, RoundKeys, KEY_SIZE, ROUNDS};
pub use crate::padding::{pad, unpad};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
