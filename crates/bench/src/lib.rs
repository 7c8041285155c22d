use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes that stress run detection differently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    Random,
    /// Keys drawn from a handful of distinct values.
    FewUnique,
    Ascending,
    Descending,
    /// Sorted input with 1% of positions swapped at random.
    NearlySorted,
    /// Alternating ascending and descending blocks of `len / 16`.
    Sawtooth,
}

pub const ALL_PATTERNS: [Pattern; 6] = [
    Pattern::Random,
    Pattern::FewUnique,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::NearlySorted,
    Pattern::Sawtooth,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::FewUnique => "few_unique",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::NearlySorted => "nearly_sorted",
            Self::Sawtooth => "sawtooth",
        }
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, pattern: Pattern, len: usize) -> Vec<u64> {
    match pattern {
        Pattern::Random => (0..len).map(|_| rng.random::<u64>()).collect(),
        Pattern::FewUnique => (0..len).map(|_| rng.random_range(0..8_u64)).collect(),
        Pattern::Ascending => (0..len as u64).collect(),
        Pattern::Descending => (0..len as u64).rev().collect(),
        Pattern::NearlySorted => {
            let mut data: Vec<u64> = (0..len as u64).collect();
            if len > 0 {
                for _ in 0..(len / 100).max(1) {
                    let a = rng.random_range(0..len);
                    let b = rng.random_range(0..len);
                    data.swap(a, b);
                }
            }
            data
        }
        Pattern::Sawtooth => {
            let mut data: Vec<u64> = (0..len).map(|_| rng.random::<u64>()).collect();
            let block = (len / 16).max(1);
            for (i, chunk) in data.chunks_mut(block).enumerate() {
                chunk.sort_unstable();
                if i % 2 == 1 {
                    chunk.reverse();
                }
            }
            data
        }
    }
}
