use rand::Rng;

use crate::RunStack;

/// Decides, after each push, whether the two topmost runs must be merged
/// before the next run is pushed.
pub trait CollapsePolicy {
    fn should_collapse(&mut self, runs: &RunStack) -> bool;
}

/// Deterministic policy: with at least three runs pending, merge while the
/// top run is more than half the length of the one beneath it.
///
/// Keeps merges balanced, bounds total merge work to `O(n log n)` and keeps
/// the stack height logarithmic in the slice length.
#[derive(Clone, Copy, Debug, Default)]
pub struct SizeRatio;

impl CollapsePolicy for SizeRatio {
    #[inline]
    fn should_collapse(&mut self, runs: &RunStack) -> bool {
        if runs.len() < 3 {
            return false;
        }
        match (runs.top(), runs.second()) {
            // 2 * top > second, without the multiplication.
            (Some(top), Some(second)) => top.len > second.len / 2,
            _ => false,
        }
    }
}

/// Randomized policy: with at least three runs pending, merge when the stack
/// is full or a fair coin comes up heads.
///
/// The random source is supplied by the caller so a run of the sort can be
/// reproduced exactly.
#[derive(Clone, Debug)]
pub struct CoinFlip<R> {
    rng: R,
}

impl<R: Rng> CoinFlip<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CollapsePolicy for CoinFlip<R> {
    fn should_collapse(&mut self, runs: &RunStack) -> bool {
        if runs.len() < 3 {
            return false;
        }
        runs.is_full() || self.rng.random_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::{CoinFlip, CollapsePolicy, SizeRatio};
    use crate::RunStack;
    use crate::algorithms::run::Run;

    /// Yields the same word forever: `0` always flips heads, `u64::MAX`
    /// always flips tails.
    struct Constant(u64);

    impl RngCore for Constant {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(self.0 as u8);
        }
    }

    fn stack_of(lens: &[usize]) -> RunStack {
        let mut stack = RunStack::new();
        let mut start = 0;
        for &len in lens {
            stack.push(Run { start, len }).unwrap();
            start += len;
        }
        stack
    }

    #[test]
    fn size_ratio_needs_three_runs() {
        assert!(!SizeRatio.should_collapse(&stack_of(&[])));
        assert!(!SizeRatio.should_collapse(&stack_of(&[1, 100])));
    }

    #[test]
    fn size_ratio_threshold() {
        assert!(!SizeRatio.should_collapse(&stack_of(&[50, 8, 4])));
        assert!(SizeRatio.should_collapse(&stack_of(&[50, 8, 5])));
        assert!(!SizeRatio.should_collapse(&stack_of(&[50, 9, 4])));
        assert!(SizeRatio.should_collapse(&stack_of(&[50, 9, 5])));
        assert!(SizeRatio.should_collapse(&stack_of(&[1, 1, 1])));
    }

    #[test]
    fn coin_flip_follows_the_injected_source() {
        let mut heads = CoinFlip::new(Constant(0));
        let mut tails = CoinFlip::new(Constant(u64::MAX));

        assert!(!heads.should_collapse(&stack_of(&[4, 4])));
        assert!(heads.should_collapse(&stack_of(&[4, 4, 4])));
        assert!(!tails.should_collapse(&stack_of(&[4, 4, 4])));
    }

    #[test]
    fn coin_flip_always_collapses_a_full_stack() {
        let mut tails = CoinFlip::new(Constant(u64::MAX));
        let mut stack = RunStack::new();
        for i in 0..stack.capacity() {
            assert!(!tails.should_collapse(&stack));
            stack.push(Run { start: i, len: 1 }).unwrap();
        }
        assert!(tails.should_collapse(&stack));
    }
}
