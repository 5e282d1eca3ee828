//! Block padding: every pad byte carries the pad length.

use crate::block::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Pads `data` to the next multiple of 16 bytes.
///
/// Always adds between 1 and 16 bytes, so block-aligned input gains a whole block.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - (data.len() % BLOCK_SIZE);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strips padding in place, returning an error instead of a truncated buffer.
///
/// Only the trailing pad-length byte is checked.
pub fn unpad(data: &mut Vec<u8>) -> Result<()> {
    let len = data.len();
    let pad_len = data.last().copied().unwrap_or(0);
    if pad_len == 0 || pad_len as usize > BLOCK_SIZE || pad_len as usize > len {
        return Err(Error::InvalidPadding { pad_len, len });
    }
    data.truncate(len - pad_len as usize);
    Ok(())
}
