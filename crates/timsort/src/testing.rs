use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Element, sealed};

/// Element whose order only looks at `key`; `tag` records the original
/// position so stability is observable.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Tagged {
    pub key: i32,
    pub tag: u32,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl sealed::Sealed for Tagged {}
impl Element for Tagged {}

pub(crate) fn tag_keys(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(i, &key)| Tagged { key, tag: i as u32 })
        .collect()
}

/// Checks that `data` is ordered by key and, within equal keys, by tag.
pub(crate) fn assert_stably_sorted(data: &[Tagged]) {
    for w in data.windows(2) {
        assert!(
            (w[0].key, w[0].tag) < (w[1].key, w[1].tag),
            "unstable or unsorted pair: {:?} then {:?}",
            w[0],
            w[1]
        );
    }
}

pub(crate) fn random_keys(seed: u64, len: usize, modulo: i32) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..modulo)).collect()
}
