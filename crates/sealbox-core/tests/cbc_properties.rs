//! Property-based tests for the CBC chain controller.

use proptest::prelude::*;
use sealbox_core::{
    decrypt_block, decrypt_message, encrypt_message, expand_key, pad, Aes256Key, Iv, BLOCK_SIZE,
};

/// Messages made of whole blocks, so the trailing padding block stays separate.
fn whole_blocks(min: usize, max: usize) -> impl Strategy<Value = Vec<u8>> {
    (min..=max).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * BLOCK_SIZE))
}

fn blocks(data: &[u8]) -> Vec<&[u8]> {
    data.chunks(BLOCK_SIZE).collect()
}

proptest! {
    #[test]
    fn round_trip(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..=300)
    ) {
        let key = Aes256Key::from(key);
        let iv = Iv::from(iv);
        let ciphertext = encrypt_message(&key, &iv, &data);
        prop_assert_eq!(ciphertext.len() % BLOCK_SIZE, 0);
        prop_assert!(ciphertext.len() > data.len());
        let plaintext = decrypt_message(&key, &iv, &ciphertext).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn padding_adds_one_to_sixteen_bytes(data in prop::collection::vec(any::<u8>(), 0..=100)) {
        let padded = pad(&data);
        let added = padded.len() - data.len();
        prop_assert_eq!(padded.len() % BLOCK_SIZE, 0);
        prop_assert!((1..=BLOCK_SIZE).contains(&added));
        prop_assert!(padded[data.len()..].iter().all(|&b| b as usize == added));
    }

    #[test]
    fn key_schedule_is_pure(key in any::<[u8; 32]>()) {
        let first = expand_key(&Aes256Key::from(key));
        let second = expand_key(&Aes256Key::from(key));
        prop_assert_eq!(first.get(14), second.get(14));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn plaintext_bit_flip_propagates_forward(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in whole_blocks(2, 6),
        pick in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let key = Aes256Key::from(key);
        let iv = Iv::from(iv);
        let index = pick.index(data.len());
        let mut flipped = data.clone();
        flipped[index] ^= 1 << bit;

        let original = encrypt_message(&key, &iv, &data);
        let altered = encrypt_message(&key, &iv, &flipped);
        let flipped_block = index / BLOCK_SIZE;
        for (i, (a, b)) in blocks(&original).iter().zip(blocks(&altered)).enumerate() {
            if i < flipped_block {
                prop_assert_eq!(*a, b);
            } else {
                prop_assert_ne!(*a, b);
            }
        }
    }

    #[test]
    fn ciphertext_bit_flip_is_contained(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in whole_blocks(3, 6),
        pick in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let key = Aes256Key::from(key);
        let iv = Iv::from(iv);
        let mut ciphertext = encrypt_message(&key, &iv, &data);

        // Stay clear of the last data block so the padding block decrypts cleanly.
        let index = pick.index(data.len() - BLOCK_SIZE);
        let corrupted_block = index / BLOCK_SIZE;
        ciphertext[index] ^= 1 << bit;

        let plaintext = decrypt_message(&key, &iv, &ciphertext).unwrap();
        prop_assert_eq!(plaintext.len(), data.len());
        for (i, (got, want)) in blocks(&plaintext).iter().zip(blocks(&data)).enumerate() {
            if i == corrupted_block {
                prop_assert_ne!(*got, want);
            } else if i == corrupted_block + 1 {
                let diff: Vec<u8> = got.iter().zip(want.iter()).map(|(g, w)| g ^ w).collect();
                let mut expected = vec![0u8; BLOCK_SIZE];
                expected[index % BLOCK_SIZE] = 1 << bit;
                prop_assert_eq!(diff, expected);
            } else {
                prop_assert_eq!(*got, want);
            }
        }
    }
}

#[test]
fn sp800_38a_cbc_aes256_vector() {
    let key = Aes256Key::from_slice(
        &hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4").unwrap(),
    )
    .unwrap();
    let iv = Iv::from_slice(&hex::decode("000102030405060708090a0b0c0d0e0f").unwrap()).unwrap();
    let plaintext = hex::decode(concat!(
        "6bc1bee22e409f96e93d7e117393172a",
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "30c81c46a35ce411e5fbc1191a0a52ef",
        "f69f2445df4f9b17ad2b417be66c3710",
    ))
    .unwrap();
    let expected = concat!(
        "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
        "9cfc4e967edb808d679f777bc6702c7d",
        "39f23369a9d9bacfa530e26304231461",
        "b2eb05e2c39be9fcda6c19078c6a9d1b",
    );

    let ciphertext = encrypt_message(&key, &iv, &plaintext);
    assert_eq!(ciphertext.len(), plaintext.len() + BLOCK_SIZE);
    assert_eq!(hex::encode(&ciphertext[..plaintext.len()]), expected);

    // Trailing block is the all-0x10 padding block chained off the last data block.
    let last = &ciphertext[plaintext.len()..];
    let mut intermediate = decrypt_block(&last.try_into().unwrap(), &expand_key(&key));
    for (byte, chain) in intermediate.iter_mut().zip(&ciphertext[48..64]) {
        *byte ^= chain;
    }
    assert_eq!(intermediate, [0x10; 16]);

    assert_eq!(decrypt_message(&key, &iv, &ciphertext).unwrap(), plaintext);
}
