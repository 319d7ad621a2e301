use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of randomness for the weaker difficulty levels.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> i32;

    /// Returns a value in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one element uniformly, or `None` if the slice is empty.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// Thread-local OS-seeded generator from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// Deterministic linear congruential generator, for reproducible games and tests.
#[derive(Debug, Clone)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: u64) -> Self {
        // keeps `seed * MULTIPLIER_A` inside i64
        Self {
            seed: (seed % i32::MAX as u64) as i64,
        }
    }
}

/// Either generator, chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredGenerator {
    Standard(StandardRandomGenerator),
    Seeded(CustomNumberGenerator),
}

impl ConfiguredGenerator {
    /// Seeded when a seed is given, OS randomness otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => ConfiguredGenerator::Seeded(CustomNumberGenerator::new(seed)),
            None => ConfiguredGenerator::Standard(StandardRandomGenerator),
        }
    }
}

impl Default for ConfiguredGenerator {
    fn default() -> Self {
        ConfiguredGenerator::Standard(StandardRandomGenerator)
    }
}

impl RandomGenerator for ConfiguredGenerator {
    fn next(&mut self) -> i32 {
        match self {
            ConfiguredGenerator::Standard(rg) => rg.next(),
            ConfiguredGenerator::Seeded(rg) => rg.next(),
        }
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        match self {
            ConfiguredGenerator::Standard(rg) => rg.next_range(from, to),
            ConfiguredGenerator::Seeded(rg) => rg.next_range(from, to),
        }
    }
}
