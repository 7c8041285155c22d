use crate::Element;

/// A non-decreasing stretch `[start, start + len)` of the slice being sorted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Finds the maximal run beginning at `start` and makes it ascending.
///
/// A run is either non-decreasing or strictly decreasing; a strictly
/// decreasing run is reversed in place. Only strict descent is reversed, as
/// reversing equal neighbours would swap them. The returned flag reports
/// whether a reversal took place.
pub(crate) fn next_run<T: Element>(data: &mut [T], start: usize) -> (Run, bool) {
    let n = data.len();
    debug_assert!(start < n);

    let mut end = start + 1;
    if end >= n {
        return (Run { start, len: 1 }, false);
    }

    let descending = data[end] < data[start];
    if descending {
        while end < n && data[end] < data[end - 1] {
            end += 1;
        }
        data[start..end].reverse();
    } else {
        while end < n && data[end] >= data[end - 1] {
            end += 1;
        }
    }

    (
        Run {
            start,
            len: end - start,
        },
        descending,
    )
}
