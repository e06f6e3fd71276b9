//! Seeded RNG construction and per-run stream derivation.
//!
//! Randomness is an injected dependency throughout the crate: every
//! stochastic operation takes `&mut impl Rng`, so runs are reproducible
//! and safely parallelizable with one independent stream per run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Derives an independent RNG stream from a base seed and a stream index.
///
/// Distinct indices produce decorrelated seeds even when the base seed and
/// indices are small consecutive integers, so the 27 comparison runs never
/// share or reuse a stream. Uses the SplitMix64 finalizer.
pub fn derive_stream(base_seed: u64, index: u64) -> StdRng {
    let mut z = base_seed.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    StdRng::seed_from_u64(z ^ (z >> 31))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_create_rng_is_reproducible() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..100 {
            assert_eq!(a.random_range(0..1_000_000u64), b.random_range(0..1_000_000u64));
        }
    }

    #[test]
    fn test_derived_streams_differ() {
        let mut a = derive_stream(42, 0);
        let mut b = derive_stream(42, 1);
        let seq_a: Vec<u64> = (0..20).map(|_| a.random_range(0..u64::MAX)).collect();
        let seq_b: Vec<u64> = (0..20).map(|_| b.random_range(0..u64::MAX)).collect();
        assert_ne!(seq_a, seq_b, "adjacent stream indices must not collide");
    }

    #[test]
    fn test_derived_stream_is_reproducible() {
        let mut a = derive_stream(7, 13);
        let mut b = derive_stream(7, 13);
        for _ in 0..50 {
            assert_eq!(a.random_range(0..u64::MAX), b.random_range(0..u64::MAX));
        }
    }
}
