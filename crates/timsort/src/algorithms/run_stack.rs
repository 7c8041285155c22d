use crate::SortError;

use super::run::Run;

/// Maximum number of pending runs.
///
/// Under [`SizeRatio`](crate::SizeRatio), once collapsing stops every run
/// above the bottom one is at most half as long as the run below it. A
/// settled stack of height `h` therefore spans at least `2^(h - 2)` elements,
/// and since a slice holds fewer than `2^usize::BITS` elements, `h` never
/// exceeds `usize::BITS + 1`. One more slot holds the run pushed before the
/// next collapse check, and one is spare.
///
/// [`CoinFlip`](crate::CoinFlip) is bounded by collapsing whenever the stack
/// is full.
pub const RUN_STACK_CAPACITY: usize = usize::BITS as usize + 3;

/// Pending runs, oldest at the bottom. Entries are adjacent and appear in
/// increasing `start` order.
#[derive(Clone, Debug)]
pub struct RunStack {
    runs: [Run; RUN_STACK_CAPACITY],
    len: usize,
}

impl Default for RunStack {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStack {
    pub fn new() -> Self {
        Self {
            runs: [Run::default(); RUN_STACK_CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == RUN_STACK_CAPACITY
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        RUN_STACK_CAPACITY
    }

    #[inline]
    pub fn as_slice(&self) -> &[Run] {
        &self.runs[..self.len]
    }

    /// The most recently pushed run.
    #[inline]
    pub fn top(&self) -> Option<Run> {
        self.as_slice().last().copied()
    }

    /// The run directly beneath the top one.
    #[inline]
    pub fn second(&self) -> Option<Run> {
        self.len.checked_sub(2).map(|i| self.runs[i])
    }

    pub(crate) fn push(&mut self, run: Run) -> Result<(), SortError> {
        if self.is_full() {
            return Err(SortError::RunStackOverflow {
                capacity: RUN_STACK_CAPACITY,
            });
        }
        debug_assert!(self.top().is_none_or(|top| top.end() == run.start));

        self.runs[self.len] = run;
        self.len += 1;
        Ok(())
    }

    /// Removes the two topmost runs, returned as `(older, newer)`.
    pub(crate) fn pop_pair(&mut self) -> Option<(Run, Run)> {
        if self.len < 2 {
            return None;
        }
        let newer = self.runs[self.len - 1];
        let older = self.runs[self.len - 2];
        self.len -= 2;
        Some((older, newer))
    }
}

#[cfg(test)]
mod tests {
    use super::{RUN_STACK_CAPACITY, RunStack};
    use crate::SortError;
    use crate::algorithms::run::Run;

    #[test]
    fn push_and_pop_pair() {
        let mut stack = RunStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop_pair(), None);

        stack.push(Run { start: 0, len: 4 }).unwrap();
        assert_eq!(stack.second(), None);
        assert_eq!(stack.pop_pair(), None);

        stack.push(Run { start: 4, len: 2 }).unwrap();
        stack.push(Run { start: 6, len: 1 }).unwrap();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top(), Some(Run { start: 6, len: 1 }));
        assert_eq!(stack.second(), Some(Run { start: 4, len: 2 }));

        assert_eq!(
            stack.pop_pair(),
            Some((Run { start: 4, len: 2 }, Run { start: 6, len: 1 }))
        );
        assert_eq!(stack.as_slice(), [Run { start: 0, len: 4 }]);
    }

    #[test]
    fn fills_to_capacity_then_overflows() {
        let mut stack = RunStack::default();
        assert_eq!(stack.capacity(), RUN_STACK_CAPACITY);
        for i in 0..RUN_STACK_CAPACITY {
            stack.push(Run { start: i, len: 1 }).unwrap();
        }
        assert!(stack.is_full());
        assert_eq!(stack.len(), stack.capacity());

        let err = stack
            .push(Run {
                start: RUN_STACK_CAPACITY,
                len: 1,
            })
            .unwrap_err();
        assert_eq!(
            err,
            SortError::RunStackOverflow {
                capacity: RUN_STACK_CAPACITY
            }
        );
        assert_eq!(stack.len(), RUN_STACK_CAPACITY);
    }
}
