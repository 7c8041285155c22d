use log::trace;

use crate::{CollapsePolicy, Element, SortContext, SortError, SortStats};

use super::insertion_sort::insertion_sort;
use super::merge::merge_adjacent;
use super::run::{Run, next_run};
use super::run_stack::RunStack;

/// Run-adaptive merge sort: split the slice into natural runs, keep them on a
/// bounded stack, and merge adjacent runs as `policy` demands.
pub(crate) fn sort<T: Element, P: CollapsePolicy>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
    policy: &mut P,
) -> Result<SortStats, SortError> {
    let mut stats = SortStats::default();
    let n = data.len();
    if n < 2 {
        return Ok(stats);
    }
    if n <= ctx.config.insertion_threshold {
        insertion_sort(data);
        return Ok(stats);
    }

    let mut runs = RunStack::new();
    let mut cursor = 0usize;

    while cursor < n {
        let (run, reversed) = next_run(data, cursor);
        trace!(
            "run start={} len={} reversed={}",
            run.start, run.len, reversed
        );
        stats.runs += 1;
        stats.reversed_runs += usize::from(reversed);
        cursor = run.end();

        runs.push(run)?;
        stats.max_stack_height = stats.max_stack_height.max(runs.len());

        while runs.len() >= 2 && policy.should_collapse(&runs) {
            collapse(data, &mut runs, ctx, &mut stats)?;
        }
    }

    while runs.len() > 1 {
        collapse(data, &mut runs, ctx, &mut stats)?;
    }

    debug_assert_eq!(runs.as_slice(), [Run { start: 0, len: n }]);
    Ok(stats)
}

/// Merges the two topmost runs and pushes the combined run back in their place.
fn collapse<T: Element>(
    data: &mut [T],
    runs: &mut RunStack,
    ctx: &mut SortContext<T>,
    stats: &mut SortStats,
) -> Result<(), SortError> {
    let Some((left, right)) = runs.pop_pair() else {
        debug_assert!(false, "collapse needs two pending runs");
        return Ok(());
    };
    debug_assert_eq!(left.end(), right.start);

    let merged = Run {
        start: left.start,
        len: left.len + right.len,
    };
    trace!(
        "merge start={} left={} right={}",
        left.start, left.len, right.len
    );

    let scratch = ctx.ensure_scratch(merged.len)?;
    merge_adjacent(&mut data[merged.start..merged.end()], left.len, scratch);
    stats.merges += 1;

    runs.push(merged)
}
