use rand::SeedableRng;
use rand_xoshiro::Xoshiro512PlusPlus;

/// Create a [`Xoshiro512PlusPlus`] instance seeded from the thread-local generator.
pub(crate) fn random_seeded_xoshiro512() -> Xoshiro512PlusPlus {
    Xoshiro512PlusPlus::from_rng(&mut rand::rng())
}

/// Create a [`Xoshiro512PlusPlus`] instance from a fixed seed, for reproducible output.
///
/// # Arguments
///
/// * `seed` - The seed value.
///
pub(crate) fn fixed_seeded_xoshiro512(seed: u64) -> Xoshiro512PlusPlus {
    Xoshiro512PlusPlus::seed_from_u64(seed)
}
