use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates the root RNG for a run. A fixed seed makes a run reproducible; without one a seed is
/// drawn from entropy and logged so the run can be repeated.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

    info!("Using RNG seed: {}", seed);

    StdRng::seed_from_u64(seed)
}

/// Derives an independent RNG from a parent, one per game or per move source.
pub fn fork_rng<R: Rng>(parent: &mut R) -> StdRng {
    StdRng::seed_from_u64(parent.gen())
}
