//! Seeded random number generation shared by both engines.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from `seed`, or a randomly seeded one when
/// `seed` is `None`.
///
/// Every run draws from exactly one generator, so a fixed seed reproduces
/// the whole search.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
