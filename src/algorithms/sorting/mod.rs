//! Array sorting step generators
//!
//! Every generator works on its own copy of the input and snapshots the whole
//! array at each event. The direction flag is applied by comparing the result of
//! a single `<`/`>`/`<=` test against `ascending`, the same way for every run, so
//! equal keys in a descending sort are moved where a mirrored comparator would
//! leave them. Snapshot sequences depend on that exact predicate.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::{BubbleSort, BUBBLE_CODE};
pub use heap::{HeapSort, HEAP_CODE};
pub use insertion::{InsertionSort, INSERTION_CODE};
pub use merge::{MergeSort, MERGE_CODE};
pub use quick::{QuickSort, QUICK_CODE};
pub use selection::{SelectionSort, SELECTION_CODE};

use super::SortOrder;
use crate::snapshot::{Action, Snapshot, SnapshotState};

/// The array being sorted together with its target order
#[derive(Debug, Clone)]
pub(crate) struct Workspace {
    values: Vec<i32>,
    order: SortOrder,
}

impl Workspace {
    pub(crate) fn new(values: &[i32], order: SortOrder) -> Self {
        Workspace {
            values: values.to_vec(),
            order,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn ascending(&self) -> bool {
        self.order.is_ascending()
    }

    pub(crate) fn get(&self, index: usize) -> i32 {
        self.values[index]
    }

    pub(crate) fn set(&mut self, index: usize, value: i32) {
        self.values[index] = value;
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    /// Capture the current array with the given event
    pub(crate) fn snapshot(&self, action: Action, line: usize, message: String) -> Snapshot {
        Snapshot::new(
            SnapshotState::Array(self.values.clone()),
            action,
            message,
            Some(line),
        )
    }

    pub(crate) fn done(&self) -> Snapshot {
        Snapshot::new(
            SnapshotState::Array(self.values.clone()),
            Action::Done,
            format!("Sorted in {} order", self.order.label().to_lowercase()),
            None,
        )
    }
}
