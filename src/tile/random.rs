use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::utils::Size;

// ----------------------------------------------
// RandomGenerator
// ----------------------------------------------

pub type RandomGenerator = Pcg64;

// ----------------------------------------------
// RandomGrid
// ----------------------------------------------

// One fixed random byte per tile, regenerated only when the seed changes.
// Used to desynchronize per-building timers without consuming the
// simulation's random stream.
pub struct RandomGrid {
    seed: u64,
    values: Vec<u8>,
}

impl RandomGrid {
    pub fn generate(size: Size, seed: u64) -> Self {
        let mut rng = RandomGenerator::seed_from_u64(seed);
        let values = (0..size.area()).map(|_| rng.random::<u8>()).collect();
        Self { seed, values }
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn at(&self, grid_offset: usize) -> u8 {
        self.values.get(grid_offset).copied().unwrap_or(0)
    }
}
