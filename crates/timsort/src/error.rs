//! Error types for the sorting engine.

use std::fmt;

/// Fatal conditions that stop a sort before the slice is fully ordered.
///
/// Both indicate a configuration or environment problem rather than bad
/// input: comparisons on a total order never fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortError {
    /// The collapse policy let more runs pile up than the run stack holds.
    RunStackOverflow { capacity: usize },

    /// The scratch buffer for a merge could not be reserved.
    ScratchAllocation { requested: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::RunStackOverflow { capacity } => {
                write!(f, "run stack overflow: more than {} pending runs", capacity)
            }
            SortError::ScratchAllocation { requested } => {
                write!(
                    f,
                    "scratch allocation failed: could not reserve {} elements",
                    requested
                )
            }
        }
    }
}

impl std::error::Error for SortError {}
