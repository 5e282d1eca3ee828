//! End-to-end sender/receiver flow through the public codec API.

use sealbox_codec::{
    decrypt_with, Codec, Error, HexField, RandomKeySource, TimestampKeySource,
};

#[test]
fn receiver_decrypts_with_transported_key_and_iv() {
    let sender = Codec::new();
    let ciphertext = sender.encrypt("quarterly-report.pdf contents").unwrap();
    assert_eq!(ciphertext.len() % 32, 0);

    // Key and IV travel next to the ciphertext; the wire format carries neither.
    let (key_hex, iv_hex) = (sender.key_hex(), sender.iv_hex());
    let plaintext = Codec::decrypt(&key_hex, &iv_hex, &ciphertext).unwrap();
    assert_eq!(plaintext, "quarterly-report.pdf contents");
}

#[test]
fn instances_do_not_share_ivs() {
    let mut source = RandomKeySource::os();
    let a = Codec::with_key_source(&mut source, &mut rand::rngs::OsRng);
    let b = Codec::with_key_source(&mut source, &mut rand::rngs::OsRng);
    assert_ne!(a.iv(), b.iv());
    assert_ne!(a.key(), b.key());
    assert_ne!(a.encrypt("same").unwrap(), b.encrypt("same").unwrap());
}

#[test]
fn wrong_iv_only_garbles_first_block() {
    let codec = Codec::with_key_source(&mut TimestampKeySource::new(), &mut rand::rngs::OsRng);
    let message: Vec<u8> = (0u8..48).collect();
    let ciphertext = hex::decode(codec.encrypt_bytes(&message)).unwrap();

    let mut iv = *codec.iv();
    iv.0[0] ^= 0x80;
    let plaintext = decrypt_with(codec.key(), &iv, &ciphertext).unwrap();
    assert_eq!(plaintext[0], message[0] ^ 0x80);
    assert_eq!(&plaintext[1..], &message[1..]);
}

#[test]
fn failures_leave_no_state_behind() {
    let codec = Codec::new();
    let ciphertext = codec.encrypt_bytes(b"payload");
    assert!(matches!(
        Codec::decrypt_bytes(&codec.key_hex(), &codec.iv_hex(), &ciphertext[..31]),
        Err(Error::MalformedHex { .. })
    ));
    assert_eq!(
        Codec::decrypt_bytes(&codec.key_hex(), &codec.iv_hex(), &ciphertext).unwrap(),
        b"payload"
    );
}

#[test]
fn accepts_uppercase_hex() {
    let codec = Codec::new();
    let ciphertext = codec.encrypt("shout").unwrap();
    let plaintext = Codec::decrypt(
        &codec.key_hex().to_uppercase(),
        &codec.iv_hex().to_uppercase(),
        &ciphertext.to_uppercase(),
    );
    assert_eq!(plaintext.unwrap(), "shout");
}

#[test]
fn whitespace_is_not_hex() {
    let codec = Codec::new();
    let ciphertext = codec.encrypt("HELLO").unwrap();
    let (key_hex, iv_hex) = (codec.key_hex(), codec.iv_hex());

    let cases = [
        (format!(" {key_hex}\t"), iv_hex.clone(), ciphertext.clone(), HexField::Key),
        (key_hex.clone(), format!("\n{iv_hex}"), ciphertext.clone(), HexField::Iv),
        (key_hex.clone(), iv_hex.clone(), format!("  {ciphertext}\r\n"), HexField::Ciphertext),
    ];
    for (key, iv, ct, expected) in cases {
        match Codec::decrypt(&key, &iv, &ct) {
            Err(Error::MalformedHex { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected malformed {expected} hex, got {other:?}"),
        }
    }
}
