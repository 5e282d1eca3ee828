//! Command-line interface for `sealbox`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sealbox_codec::{Codec, RandomKeySource, TimestampKeySource};
use sealbox_core::{
    decrypt_block, decrypt_message, encrypt_block, encrypt_message, expand_key, Aes256Key, Iv,
};

/// AES-256-CBC file sealing CLI.
#[derive(Parser)]
#[command(name = "sealbox", version, author, about = "AES-256-CBC file sealing")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh key and IV as hex.
    Keygen {
        /// How the key is produced.
        #[arg(long, value_enum, default_value_t = KeySourceKind::Timestamp)]
        key_source: KeySourceKind,
        /// Optional RNG seed for reproducible output (random key source and IV).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file with a fresh key and IV, writing hex ciphertext.
    Enc {
        /// Input file (any bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path for the hex ciphertext.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// How the key is produced.
        #[arg(long, value_enum, default_value_t = KeySourceKind::Timestamp)]
        key_source: KeySourceKind,
        /// Optional RNG seed for reproducible output (random key source and IV).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decrypt a hex ciphertext file with a supplied key and IV.
    Dec {
        /// AES-256 key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// IV as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        iv_hex: String,
        /// Input file (hex ciphertext).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Verify the cipher against published AES-256 vectors.
    Check,
    /// Encrypt and decrypt a message in memory, printing each stage.
    Demo {
        /// Message to encrypt (single-byte characters only).
        #[arg(long, default_value = "HELLO")]
        message: String,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Key generation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KeySourceKind {
    /// SHA-256 of the current time (weak; kept for compatibility).
    Timestamp,
    /// Bytes drawn from a cryptographic RNG.
    Random,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Keygen { key_source, seed } => {
            let codec = build_codec(key_source, seed);
            print_key_material(&codec);
            Ok(())
        }
        Commands::Enc {
            input,
            output,
            key_source,
            seed,
        } => {
            let codec = cmd_enc(&input, &output, key_source, seed)?;
            print_key_material(&codec);
            Ok(())
        }
        Commands::Dec {
            key_hex,
            iv_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &iv_hex, &input, &output),
        Commands::Check => cmd_check(),
        Commands::Demo { message, seed } => cmd_demo(&message, seed),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn cmd_enc(
    input_path: &Path,
    output_path: &Path,
    key_source: KeySourceKind,
    seed: Option<u64>,
) -> Result<Codec> {
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let codec = build_codec(key_source, seed);
    let ciphertext = codec.encrypt_bytes(&data);
    fs::write(output_path, &ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        "sealed {} bytes into {} hex characters",
        data.len(),
        ciphertext.len()
    );
    Ok(codec)
}

fn cmd_dec(key_hex: &str, iv_hex: &str, input_path: &Path, output_path: &Path) -> Result<()> {
    let ciphertext = fs::read_to_string(input_path)
        .with_context(|| format!("read {}", input_path.display()))?;
    // Files usually end with a newline; the hex itself must not contain whitespace.
    let plaintext = Codec::decrypt_bytes(key_hex, iv_hex, ciphertext.trim_end())
        .context("decrypt ciphertext")?;
    fs::write(output_path, &plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!("recovered {} bytes", plaintext.len());
    Ok(())
}

fn cmd_check() -> Result<()> {
    // FIPS-197 appendix C.3.
    let key = Aes256Key::from(decode_array::<32>(
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
    )?);
    let plain = decode_array::<16>("00112233445566778899aabbccddeeff")?;
    let expected = decode_array::<16>("8ea2b7ca516745bfeafc49904b496089")?;
    let round_keys = expand_key(&key);
    if encrypt_block(&plain, &round_keys) != expected {
        bail!("FIPS-197 AES-256 encryption mismatch");
    }
    if decrypt_block(&expected, &round_keys) != plain {
        bail!("FIPS-197 AES-256 decryption mismatch");
    }

    // SP 800-38A F.2.5, first block.
    let key = Aes256Key::from(decode_array::<32>(
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
    )?);
    let iv = Iv::from(decode_array::<16>("000102030405060708090a0b0c0d0e0f")?);
    let plain = decode_array::<16>("6bc1bee22e409f96e93d7e117393172a")?;
    let ciphertext = encrypt_message(&key, &iv, &plain);
    if hex::encode(&ciphertext[..16]) != "f58c4c04d6e5f1ba779eabfb5f7bfbd6" {
        bail!("SP 800-38A CBC-AES256 mismatch");
    }
    let recovered = decrypt_message(&key, &iv, &ciphertext).context("CBC round trip")?;
    if recovered != plain {
        bail!("CBC round trip mismatch");
    }

    println!("aes-256 known-answer tests passed");
    Ok(())
}

fn cmd_demo(message: &str, seed: Option<u64>) -> Result<()> {
    let codec = build_codec(KeySourceKind::Random, seed);
    let ciphertext = codec.encrypt(message).context("encrypt message")?;
    let decrypted =
        Codec::decrypt(&codec.key_hex(), &codec.iv_hex(), &ciphertext).context("decrypt")?;

    println!("key: {}", codec.key_hex());
    println!("iv: {}", codec.iv_hex());
    println!("plaintext: {}", message);
    println!("ciphertext: {}", ciphertext);
    println!("decrypted: {}", decrypted);
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn print_key_material(codec: &Codec) {
    println!("key: {}", codec.key_hex());
    println!("iv: {}", codec.iv_hex());
}

fn build_codec(kind: KeySourceKind, seed: Option<u64>) -> Codec {
    let mut rng = seeded_rng(seed);
    match kind {
        KeySourceKind::Timestamp => {
            Codec::with_key_source(&mut TimestampKeySource::new(), &mut rng)
        }
        KeySourceKind::Random => {
            let key_rng = ChaCha20Rng::from_seed(derive_seed(&mut rng));
            Codec::with_key_source(&mut RandomKeySource::new(key_rng), &mut rng)
        }
    }
}

fn decode_array<const N: usize>(hex_str: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(hex_str).context("decode hex")?;
    match bytes.try_into() {
        Ok(array) => Ok(array),
        Err(bytes) => bail!("expected {} bytes, got {}", N, bytes.len()),
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

fn derive_seed(rng: &mut impl RngCore) -> [u8; 32] {
    let mut seed_bytes = [0u8; 32];
    rng.fill_bytes(&mut seed_bytes);
    seed_bytes
}
