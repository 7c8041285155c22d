//! Adaptive, stable, run-aware merge sort for fixed-width integers.
//!
//! The slice is split into natural runs (strictly descending stretches are
//! reversed), pending runs are kept on a bounded stack, and adjacent runs
//! are merged through a scratch buffer whenever the [`CollapsePolicy`] asks
//! for it. Short inputs go straight to insertion sort.

mod algorithms;
mod error;
mod policy;

#[cfg(test)]
mod testing;

use log::debug;

pub use algorithms::run::Run;
pub use algorithms::run_stack::{RUN_STACK_CAPACITY, RunStack};
pub use error::SortError;
pub use policy::{CoinFlip, CollapsePolicy, SizeRatio};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width integer types the engine sorts. Sealed.
pub trait Element: Copy + Ord + Default + sealed::Sealed {}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Element for $t {}
        )*
    };
}

impl_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Natural runs on a bounded stack, merged by a collapse policy.
    RunAdaptive,
    /// Recursive halving with insertion-sorted leaves. Ignores the policy.
    TopDown,
}

pub const ALL_STRATEGIES: [Strategy; 2] = [Strategy::RunAdaptive, Strategy::TopDown];

pub fn all_strategies() -> &'static [Strategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::RunAdaptive => "run_adaptive",
        Strategy::TopDown => "top_down",
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    /// Inputs of at most this many elements are insertion sorted outright.
    /// For [`Strategy::TopDown`] it is also the leaf size.
    pub insertion_threshold: usize,
    pub strategy: Strategy,
}

pub const DEFAULT_CONFIG: SortConfig = SortConfig {
    insertion_threshold: 7,
    strategy: Strategy::RunAdaptive,
};

impl Default for SortConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

/// What a sort call did. Inputs handled entirely by the small-input
/// insertion sort report no runs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub runs: usize,
    pub reversed_runs: usize,
    pub merges: usize,
    pub max_stack_height: usize,
}

/// Configuration plus a scratch buffer that survives across calls, so
/// repeated sorts do not reallocate.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    pub config: SortConfig,
    pub scratch: Vec<T>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self::with_config(DEFAULT_CONFIG)
    }
}

impl<T> SortContext<T> {
    pub fn with_config(config: SortConfig) -> Self {
        Self {
            config,
            scratch: Vec::new(),
        }
    }
}

impl<T: Element> SortContext<T> {
    /// Grows the scratch buffer to at least `len` elements and returns its
    /// first `len` slots.
    pub(crate) fn ensure_scratch(&mut self, len: usize) -> Result<&mut [T], SortError> {
        if self.scratch.len() < len {
            let additional = len - self.scratch.len();
            self.scratch
                .try_reserve_exact(additional)
                .map_err(|_| SortError::ScratchAllocation { requested: len })?;
            self.scratch.resize(len, T::default());
        }
        Ok(&mut self.scratch[..len])
    }
}

/// Sorts `data` in non-decreasing order, keeping equal elements in their
/// original order.
///
/// # Panics
///
/// Panics on any [`SortError`]: when scratch memory cannot be obtained or
/// the run stack overflows.
pub fn sort<T: Element>(data: &mut [T]) {
    if let Err(err) = try_sort(data) {
        panic!("sort failed: {err}");
    }
}

pub fn try_sort<T: Element>(data: &mut [T]) -> Result<SortStats, SortError> {
    let mut ctx = SortContext::default();
    sort_with_ctx(data, &mut ctx)
}

/// Sorts with the deterministic [`SizeRatio`] policy.
pub fn sort_with_ctx<T: Element>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
) -> Result<SortStats, SortError> {
    sort_with_policy(data, ctx, &mut SizeRatio)
}

/// Sorts with a caller-chosen collapse policy.
///
/// On error the slice holds a permutation of its input but is not
/// necessarily sorted.
pub fn sort_with_policy<T: Element, P: CollapsePolicy>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
    policy: &mut P,
) -> Result<SortStats, SortError> {
    let stats = match ctx.config.strategy {
        Strategy::RunAdaptive => algorithms::timsort::sort(data, ctx, policy)?,
        Strategy::TopDown => algorithms::merge_sort_top_down::sort(data, ctx)?,
    };
    debug!(
        "sorted len={} strategy={} runs={} reversed={} merges={} max_stack={}",
        data.len(),
        strategy_name(ctx.config.strategy),
        stats.runs,
        stats.reversed_runs,
        stats.merges,
        stats.max_stack_height,
    );
    Ok(stats)
}
