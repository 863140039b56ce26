//! Step generators for every supported algorithm
//!
//! A step generator is an [`Iterator`] that yields one [`Snapshot`] per
//! observable event of the algorithm (each comparison, swap, write, descent and
//! visit) and ends with a single terminal [`Action::Done`] snapshot. Generators
//! are lazy, finite and fused: once they return `None` they stay exhausted, and
//! replaying means building a new one.
//!
//! Recursive algorithms (quick sort, merge sort, heap sift-down, the tree
//! traversals) keep an explicit stack of pending work instead of recursing, so
//! each call to `next` does a bounded amount of work and never nests.
//!
//! - [`sorting`]: bubble, insertion, selection, quick, merge and heap sort
//! - [`traversal`]: in-order, pre-order and post-order tree traversals
//!
//! [`Action::Done`]: crate::snapshot::Action::Done

pub mod sorting;
pub mod traversal;

use crate::errors::GeneratorFault;
use crate::snapshot::Snapshot;
use std::fmt;

/// What a generator yields on each pull
pub type StepResult = Result<Snapshot, GeneratorFault>;

/// A live, owned step generator
pub type StepGenerator = Box<dyn Iterator<Item = StepResult>>;

/// Target order for the sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Non-decreasing
    #[default]
    Ascending,
    /// Non-increasing
    Descending,
}

impl SortOrder {
    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Drain a generator, stopping at the first fault.
pub fn collect_steps(
    generator: impl Iterator<Item = StepResult>,
) -> Result<Vec<Snapshot>, GeneratorFault> {
    generator.collect()
}
