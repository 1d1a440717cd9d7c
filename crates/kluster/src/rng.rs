use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

// pi * 100_000
pub const DEFAULT_SEED: u64 = 314159;

pub fn new() -> impl Rng {
    with_seed(DEFAULT_SEED)
}

pub fn with_seed(seed: u64) -> impl Rng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
