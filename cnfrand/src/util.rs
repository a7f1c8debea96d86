//! Seeding of the random number generator that is threaded through every randomized step.

use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[cfg(not(feature = "deterministic"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// The generator used for every randomized operation.
pub type CnfRng = Pcg32;

/// The seed every default resolves to when built with the `deterministic` feature.
pub const DEFAULT_SEED: u64 = 42;

/// Creates the generator for a run.
///
/// An explicit seed is used as is. Otherwise `default_seed` decides, and the seed that
/// was drawn gets logged so the run can be reproduced.
pub fn rng(seed: Option<u64>, default_seed: fn() -> u64) -> CnfRng {
    let seed = seed.unwrap_or_else(|| {
        let seed = default_seed();
        info!("No seed supplied, using {seed}.");
        seed
    });

    Pcg32::seed_from_u64(seed)
}

/// Reinterprets a signed seed as the generator's `u64` seed.
///
/// Distinct integers stay distinct seeds, so negative seeds are as reproducible as positive ones.
pub fn seed_from_signed(seed: i64) -> u64 {
    seed as u64
}

/// A seed drawn from system entropy.
#[cfg(not(feature = "deterministic"))]
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Milliseconds since the Unix epoch.
#[cfg(not(feature = "deterministic"))]
pub fn timestamp_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(DEFAULT_SEED)
}

#[cfg(feature = "deterministic")]
pub fn entropy_seed() -> u64 {
    DEFAULT_SEED
}

#[cfg(feature = "deterministic")]
pub fn timestamp_seed() -> u64 {
    DEFAULT_SEED
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    #[test]
    fn explicit_seed_is_reproducible() {
        let first: Vec<u32> = rng(Some(7), entropy_seed)
            .sample_iter(rand::distributions::Standard)
            .take(8)
            .collect();
        let second: Vec<u32> = rng(Some(7), timestamp_seed)
            .sample_iter(rand::distributions::Standard)
            .take(8)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn signed_seeds() {
        assert_eq!(seed_from_signed(5), 5);
        assert_eq!(seed_from_signed(-1), u64::MAX);
        assert_ne!(seed_from_signed(-5), seed_from_signed(5));
    }

    #[test]
    fn default_seed_is_used_without_explicit_seed() {
        let mut drawn = rng(None, || 99);
        let mut expected = Pcg32::seed_from_u64(99);
        assert_eq!(drawn.gen::<u64>(), expected.gen::<u64>());
    }
}
