//! Seeded random-number sources.
//!
//! Every strategy receives its generator explicitly; nothing in the crate
//! reads process-wide random state except [`entropy_seed`].

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
///
/// Two generators built from the same seed produce identical streams,
/// which is what makes strategy runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a fresh seed from the thread-local generator.
///
/// Used when a config carries no seed.
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Builds the generator for an optional configured seed.
pub(crate) fn rng_for(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(entropy_seed))
}
