//! AES round transformations over the column-major state.

use crate::block::{xor_in_place, Block};
use crate::tables::{inv_sbox, sbox, MUL_11, MUL_13, MUL_14, MUL_2, MUL_3, MUL_9};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = src[((col + row) % 4) * 4 + row];
        }
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = src[((col + 4 - row) % 4) * 4 + row];
        }
    }
}

#[inline]
fn mul(table: &[u8; 256], byte: u8) -> u8 {
    table[byte as usize]
}

fn mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = mul(&MUL_2, a0) ^ mul(&MUL_3, a1) ^ a2 ^ a3;
    col[1] = a0 ^ mul(&MUL_2, a1) ^ mul(&MUL_3, a2) ^ a3;
    col[2] = a0 ^ a1 ^ mul(&MUL_2, a2) ^ mul(&MUL_3, a3);
    col[3] = mul(&MUL_3, a0) ^ a1 ^ a2 ^ mul(&MUL_2, a3);
}

fn inv_mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = mul(&MUL_14, a0) ^ mul(&MUL_11, a1) ^ mul(&MUL_13, a2) ^ mul(&MUL_9, a3);
    col[1] = mul(&MUL_9, a0) ^ mul(&MUL_14, a1) ^ mul(&MUL_11, a2) ^ mul(&MUL_13, a3);
    col[2] = mul(&MUL_13, a0) ^ mul(&MUL_9, a1) ^ mul(&MUL_14, a2) ^ mul(&MUL_11, a3);
    col[3] = mul(&MUL_11, a0) ^ mul(&MUL_13, a1) ^ mul(&MUL_9, a2) ^ mul(&MUL_14, a3);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        mix_single_column(column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        inv_mix_single_column(column);
    }
}

/// Adds (XORs) a round key into the state. Word `c` of the key lands on column `c`.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_block() -> Block {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn shift_rows_matches_fips_layout() {
        let mut state = counting_block();
        shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn inv_shift_rows_undoes_shift_rows() {
        let mut state = counting_block();
        shift_rows(&mut state);
        inv_shift_rows(&mut state);
        assert_eq!(state, counting_block());
    }

    #[test]
    fn mix_columns_known_column() {
        // Column example from the AES literature: db 13 53 45 -> 8e 4d a1 bc.
        let mut state = [
            0xdb, 0x13, 0x53, 0x45, 0xf2, 0x0a, 0x22, 0x5c, 0x01, 0x01, 0x01, 0x01, 0xc6, 0xc6,
            0xc6, 0xc6,
        ];
        mix_columns(&mut state);
        assert_eq!(
            state,
            [
                0x8e, 0x4d, 0xa1, 0xbc, 0x9f, 0xdc, 0x58, 0x9d, 0x01, 0x01, 0x01, 0x01, 0xc6, 0xc6,
                0xc6, 0xc6,
            ]
        );
    }

    #[test]
    fn inv_mix_columns_undoes_mix_columns() {
        let mut state = counting_block();
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        assert_eq!(state, counting_block());
    }

    #[test]
    fn sub_bytes_round_trip() {
        let mut state = counting_block();
        sub_bytes(&mut state);
        assert_eq!(state[0], 0x63);
        inv_sub_bytes(&mut state);
        assert_eq!(state, counting_block());
    }

    #[test]
    fn add_round_key_is_involution() {
        let key = [0x5au8; 16];
        let mut state = counting_block();
        add_round_key(&mut state, &key);
        assert_eq!(state[1], 0x5b);
        add_round_key(&mut state, &key);
        assert_eq!(state, counting_block());
    }
}
