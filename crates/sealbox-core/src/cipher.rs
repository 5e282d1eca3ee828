//! AES-256 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aes256Key, RoundKeys, KEY_SIZE, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::tables::sbox;

/// Words in the key (Nk).
const NK: usize = KEY_SIZE / 4;

/// Words in the expanded schedule: 4 * (Nr + 1).
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);

/// Round constants. `i / NK` only reaches 7 for a 60-word schedule.
const RCON: [u8; 7] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40];

type Word = [u8; 4];

fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(a: Word, b: Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expands the key into the raw 60-word schedule.
fn expand_words(key: &Aes256Key) -> [Word; SCHEDULE_WORDS] {
    let mut w = [[0u8; 4]; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in NK..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / NK - 1];
        } else if i % NK == 4 {
            temp = sub_word(temp);
        }
        w[i] = xor_word(temp, w[i - NK]);
    }
    w
}

/// Expands a 256-bit key into 15 round keys.
///
/// Round key `r` is words `4r..4r + 4`, word `c` filling column `c`.
pub fn expand_key(key: &Aes256Key) -> RoundKeys {
    let words = expand_words(key);
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round_key, round_words) in round_keys.iter_mut().zip(words.chunks_exact(4)) {
        for (column, word) in round_key.chunks_exact_mut(4).zip(round_words) {
            column.copy_from_slice(word);
        }
    }
    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
///
/// In CBC this yields the intermediate value that still has to be XORed with
/// the chaining value.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}
