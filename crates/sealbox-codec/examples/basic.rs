//! Demonstrates the sender/receiver flow with a deterministic key and IV.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sealbox_codec::{Codec, RandomKeySource};

fn main() {
    // Deterministic seeds for reproducibility in the example.
    let mut source = RandomKeySource::new(ChaCha20Rng::from_seed([1u8; 32]));
    let sender = Codec::with_key_source(&mut source, &mut ChaCha20Rng::from_seed([2u8; 32]));

    let ciphertext = sender.encrypt("first block here, second block").unwrap();
    let plaintext = Codec::decrypt(&sender.key_hex(), &sender.iv_hex(), &ciphertext).unwrap();
    assert_eq!(plaintext, "first block here, second block");

    println!("ciphertext: {ciphertext}");
    println!("example succeeded; receiver recovered the message");
}
