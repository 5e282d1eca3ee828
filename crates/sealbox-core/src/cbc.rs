//! Cipher-block chaining over padded messages.
//!
//! The round schedule is expanded once per call and shared by every block of
//! that call; nothing is cached between calls.

use log::trace;

use crate::block::{from_chunk, xor_in_place, Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::{Error, Result};
use crate::key::{Aes256Key, Iv};
use crate::padding::{pad, unpad};

/// Pads and encrypts `message`, returning the concatenated ciphertext blocks.
///
/// The chaining value is XORed into each plaintext block before the block
/// cipher's own round-0 key addition.
pub fn encrypt_message(key: &Aes256Key, iv: &Iv, message: &[u8]) -> Vec<u8> {
    let round_keys = expand_key(key);
    let padded = pad(message);
    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut chain: Block = iv.0;

    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut input = from_chunk(chunk);
        xor_in_place(&mut input, &chain);
        chain = encrypt_block(&input, &round_keys);
        ciphertext.extend_from_slice(&chain);
    }

    trace!(
        "cbc encrypt: {} message bytes -> {} blocks",
        message.len(),
        ciphertext.len() / BLOCK_SIZE
    );
    ciphertext
}

/// Decrypts `ciphertext` and strips its padding.
///
/// Each output block depends only on its own ciphertext block and the one
/// before it, never on a previously decrypted block.
pub fn decrypt_message(key: &Aes256Key, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::BlockLength {
            got: ciphertext.len(),
        });
    }

    let round_keys = expand_key(key);
    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let chains = core::iter::once(&iv.0[..]).chain(ciphertext.chunks_exact(BLOCK_SIZE));

    for (chunk, chain) in ciphertext.chunks_exact(BLOCK_SIZE).zip(chains) {
        let mut block = decrypt_block(&from_chunk(chunk), &round_keys);
        xor_in_place(&mut block, &from_chunk(chain));
        plaintext.extend_from_slice(&block);
    }

    unpad(&mut plaintext)?;
    trace!(
        "cbc decrypt: {} blocks -> {} message bytes",
        ciphertext.len() / BLOCK_SIZE,
        plaintext.len()
    );
    Ok(plaintext)
}
