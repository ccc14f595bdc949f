//! RNG module - seeded random source for a session
//!
//! Sessions own one ChaCha8 stream built from a `u64` seed, so a seed fully
//! determines the shape sequence. Nothing here is global.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The random source threaded through shape generation
pub type GameRng = ChaCha8Rng;

/// Create the random source for a seed
pub fn game_rng(seed: u64) -> GameRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Pick a fresh seed from the OS-backed thread RNG
pub fn random_seed() -> u64 {
    rand::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = game_rng(12345);
        let mut rng2 = game_rng(12345);

        for _ in 0..100 {
            assert_eq!(rng1.random::<u32>(), rng2.random::<u32>());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = game_rng(12345);
        let mut rng2 = game_rng(54321);

        let a: Vec<u32> = (0..8).map(|_| rng1.random()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.random()).collect();
        assert_ne!(a, b);
    }
}
