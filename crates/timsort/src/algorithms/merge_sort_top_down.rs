use log::trace;

use crate::{Element, SortContext, SortError, SortStats};

use super::insertion_sort::insertion_sort;
use super::merge::merge_adjacent;

/// Classic recursive merge sort: halve down to the insertion threshold,
/// insertion-sort each leaf, then merge siblings on the way back up.
pub(crate) fn sort<T: Element>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
) -> Result<SortStats, SortError> {
    let mut stats = SortStats::default();
    let len = data.len();
    if len < 2 {
        return Ok(stats);
    }

    let leaf = ctx.config.insertion_threshold.max(1);
    if len <= leaf {
        insertion_sort(data);
        return Ok(stats);
    }

    let scratch = ctx.ensure_scratch(len)?;
    sort_recursive(data, scratch, leaf, &mut stats);
    Ok(stats)
}

fn sort_recursive<T: Element>(
    data: &mut [T],
    scratch: &mut [T],
    leaf: usize,
    stats: &mut SortStats,
) {
    let len = data.len();
    if len <= leaf {
        insertion_sort(data);
        stats.runs += 1;
        return;
    }

    let mid = len >> 1;
    {
        let (left, right) = data.split_at_mut(mid);
        sort_recursive(left, scratch, leaf, stats);
        sort_recursive(right, scratch, leaf, stats);
    }

    if data[mid - 1] <= data[mid] {
        return;
    }

    trace!("merge len={} mid={}", len, mid);
    merge_adjacent(data, mid, scratch);
    stats.merges += 1;
}
