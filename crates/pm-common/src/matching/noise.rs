use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the engine's intentional randomness: the tie-breaking variance
/// term and the choice among interchangeable pathway phrasings.
///
/// Implementations:
/// - RandomNoise: backed by any `rand::Rng` (entropy or seeded)
/// - FixedNoise: constant values for reproducible tests
pub trait NoiseSource {
    /// Integer in `0..upper`; `upper == 0` yields 0.
    fn variance(&mut self, upper: u32) -> u32;

    /// Index in `0..len`; `len == 0` yields 0.
    fn pick(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct RandomNoise<R> {
    rng: R,
}

impl<R: Rng> RandomNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNoise<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Same seed, same variance and pathway sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RandomNoise<R> {
    fn variance(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always returns the same variance and label index (both clamped into range).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedNoise {
    pub variance: u32,
    pub label_index: usize,
}

impl FixedNoise {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl NoiseSource for FixedNoise {
    fn variance(&mut self, upper: u32) -> u32 {
        self.variance.min(upper.saturating_sub(1))
    }

    fn pick(&mut self, len: usize) -> usize {
        self.label_index.min(len.saturating_sub(1))
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn variance(&mut self, upper: u32) -> u32 {
        (**self).variance(upper)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}
