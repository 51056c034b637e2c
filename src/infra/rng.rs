use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// RNG операционной системы (через `thread_rng`).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }

    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Независимый поток для `index`-го потребителя (например, бота на месте `index`).
    pub fn derive(seed: u64, index: u64) -> Self {
        Self::from_seed(seed ^ (index + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Случайный seed из системного RNG.
    pub fn random_seed() -> u64 {
        rand::thread_rng().gen()
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
