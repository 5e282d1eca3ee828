//! Single-byte text boundary: one character per byte, code points 0..=255.

use crate::error::{Error, Result};

/// Maps each character to one byte, rejecting code points above 255.
pub fn to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| Error::NonLatin1Char { ch, index }))
        .collect()
}

/// Maps each byte back to the character with the same code point.
pub fn from_bytes(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_maps_directly() {
        assert_eq!(to_bytes("HELLO").unwrap(), b"HELLO");
        assert_eq!(from_bytes(b"HELLO"), "HELLO");
    }

    #[test]
    fn upper_half_is_one_byte_each() {
        let text = "caf\u{e9}\u{ff}";
        let bytes = to_bytes(text).unwrap();
        assert_eq!(bytes, [b'c', b'a', b'f', 0xe9, 0xff]);
        assert_eq!(from_bytes(&bytes), text);
    }

    #[test]
    fn rejects_wide_characters() {
        assert_eq!(
            to_bytes("ok\u{20ac}"),
            Err(Error::NonLatin1Char {
                ch: '\u{20ac}',
                index: 2
            })
        );
    }
}
