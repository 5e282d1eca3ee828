//! Pluggable key generation.
//!
//! [`TimestampKeySource`] keeps the historical behavior: the key is the SHA-256
//! digest of the current time. That seed has very little entropy. Use
//! [`RandomKeySource`] wherever compatibility with that behavior is not needed.

use std::sync::Once;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::warn;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sealbox_core::{Aes256Key, KEY_SIZE};
use sha2::{Digest, Sha256};

/// Produces a fresh AES-256 key for each new codec instance.
pub trait KeySource {
    /// Returns a new key.
    fn generate_key(&mut self) -> Aes256Key;
}

static WEAK_SOURCE_WARNING: Once = Once::new();

/// Derives the key by hashing a time-based seed string.
pub struct TimestampKeySource<F = fn() -> Duration> {
    clock: F,
}

impl TimestampKeySource {
    /// Uses the system clock.
    pub fn new() -> Self {
        Self {
            clock: since_epoch,
        }
    }
}

impl Default for TimestampKeySource {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FnMut() -> Duration> TimestampKeySource<F> {
    /// Uses `clock` as the time since the UNIX epoch.
    pub fn with_clock(clock: F) -> Self {
        Self { clock }
    }
}

impl<F: FnMut() -> Duration> KeySource for TimestampKeySource<F> {
    fn generate_key(&mut self) -> Aes256Key {
        WEAK_SOURCE_WARNING.call_once(|| {
            warn!("deriving AES key from a timestamp; prefer a random key source");
        });
        derive_key(&timestamp_seed((self.clock)()))
    }
}

/// Draws the key directly from a cryptographic RNG.
pub struct RandomKeySource<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RandomKeySource<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomKeySource<OsRng> {
    /// Uses the operating system RNG.
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl<R: RngCore + CryptoRng> KeySource for RandomKeySource<R> {
    fn generate_key(&mut self) -> Aes256Key {
        let mut key = [0u8; KEY_SIZE];
        self.rng.fill_bytes(&mut key);
        Aes256Key::from(key)
    }
}

/// Renders a time offset as `"<seconds>.<microseconds>"`.
pub fn timestamp_seed(elapsed: Duration) -> String {
    format!("{}.{:06}", elapsed.as_secs(), elapsed.subsec_micros())
}

/// SHA-256 of `seed`, used as the key.
pub fn derive_key(seed: &str) -> Aes256Key {
    let digest: [u8; KEY_SIZE] = Sha256::digest(seed.as_bytes()).into();
    Aes256Key::from(digest)
}

fn since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn seed_string_pads_microseconds() {
        assert_eq!(timestamp_seed(Duration::new(42, 7_000)), "42.000007");
        assert_eq!(
            timestamp_seed(Duration::new(1_700_000_000, 123_456_789)),
            "1700000000.123456"
        );
    }

    #[test]
    fn timestamp_key_is_digest_of_seed() {
        let mut source =
            TimestampKeySource::with_clock(|| Duration::new(1_700_000_000, 123_456_000));
        let key = source.generate_key();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "be249c040d6e4255db8a899487f222e03380beb06e09d5af3cfafce38b53f6b7"
        );
        assert_eq!(source.generate_key(), key);
    }

    #[test]
    fn timestamp_key_changes_with_clock() {
        let mut ticks = 0u64;
        let mut source = TimestampKeySource::with_clock(move || {
            ticks += 1;
            Duration::from_micros(ticks)
        });
        assert_ne!(source.generate_key(), source.generate_key());
    }

    #[test]
    fn system_clock_source_produces_key() {
        let key = TimestampKeySource::new().generate_key();
        assert_eq!(key.as_bytes().len(), KEY_SIZE);
    }

    #[test]
    fn random_source_follows_rng() {
        let mut a = RandomKeySource::new(ChaCha20Rng::from_seed([5u8; 32]));
        let mut b = RandomKeySource::new(ChaCha20Rng::from_seed([5u8; 32]));
        let first = a.generate_key();
        assert_eq!(first, b.generate_key());
        assert_ne!(first, a.generate_key());
    }
}
