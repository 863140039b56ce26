use super::Workspace;
use crate::algorithms::{SortOrder, StepResult};
use crate::snapshot::{Action, MarkRole, Snapshot};
use std::iter::FusedIterator;

pub const QUICK_CODE: &[&str] = &[
    "function quickSort(a, lo, hi):",
    "  if lo >= hi: return",
    "  pivot = a[hi]",
    "  store = lo",
    "  for i in lo .. hi-1:",
    "    if before(a[i], pivot):",
    "      swap(a[store], a[i])",
    "      store = store + 1",
    "  swap(a[store], a[hi])",
    "  quickSort(a, lo, store-1)",
    "  quickSort(a, store+1, hi)",
];

const LINE_PIVOT: usize = 2;
const LINE_COMPARE: usize = 5;
const LINE_SWAP: usize = 6;
const LINE_PLACE_PIVOT: usize = 8;

/// A Lomuto partition of `lo..=hi` in progress
#[derive(Debug, Clone, Copy)]
struct Partition {
    lo: usize,
    hi: usize,
    pivot: i32,
    i: usize,
    store: usize,
    /// The compare for `i` has been shown; the predicate is applied next
    compared: bool,
}

/// Quick sort over the Lomuto scheme with the last element as pivot.
/// Pending sub-ranges sit on an explicit stack, left range on top.
#[derive(Debug, Clone)]
pub struct QuickSort {
    work: Workspace,
    ranges: Vec<(usize, usize)>,
    active: Option<Partition>,
    finished: bool,
}

impl QuickSort {
    pub fn new(values: &[i32], order: SortOrder) -> Self {
        let mut ranges = Vec::new();
        if values.len() > 1 {
            ranges.push((0, values.len() - 1));
        }
        QuickSort {
            work: Workspace::new(values, order),
            ranges,
            active: None,
            finished: false,
        }
    }

    fn advance(&mut self) -> Option<Snapshot> {
        if self.finished {
            return None;
        }
        loop {
            let Some(mut part) = self.active else {
                let Some((lo, hi)) = self.ranges.pop() else {
                    self.finished = true;
                    return Some(self.work.done());
                };
                let pivot = self.work.get(hi);
                self.active = Some(Partition {
                    lo,
                    hi,
                    pivot,
                    i: lo,
                    store: lo,
                    compared: false,
                });
                return Some(self.work.snapshot(
                    Action::Mark {
                        index: hi,
                        role: MarkRole::Pivot,
                    },
                    LINE_PIVOT,
                    format!("Pivot {} at index {}", pivot, hi),
                ));
            };

            if part.i >= part.hi {
                self.active = None;
                return Some(self.place_pivot(part));
            }

            let emitted = self.scan_step(&mut part);
            self.active = Some(part);
            if let Some(snapshot) = emitted {
                return Some(snapshot);
            }
        }
    }

    /// One scan position: show the compare, then apply the predicate on the
    /// following call. Returns `None` when the element stays put.
    fn scan_step(&mut self, part: &mut Partition) -> Option<Snapshot> {
        let i = part.i;
        if !part.compared {
            part.compared = true;
            return Some(self.work.snapshot(
                Action::Compare {
                    left: i,
                    right: part.hi,
                },
                LINE_COMPARE,
                format!("Comparing {} with pivot {}", self.work.get(i), part.pivot),
            ));
        }
        part.compared = false;
        part.i += 1;
        if (self.work.get(i) < part.pivot) == self.work.ascending() {
            let store = part.store;
            let (x, y) = (self.work.get(store), self.work.get(i));
            self.work.swap(store, i);
            part.store += 1;
            return Some(self.work.snapshot(
                Action::Swap {
                    left: store,
                    right: i,
                },
                LINE_SWAP,
                format!("Swapped {} and {}", x, y),
            ));
        }
        None
    }

    fn place_pivot(&mut self, part: Partition) -> Snapshot {
        let (lo, hi, store) = (part.lo, part.hi, part.store);
        self.work.swap(store, hi);

        // Right range first so the left one is popped first.
        if store + 1 < hi {
            self.ranges.push((store + 1, hi));
        }
        if store > lo + 1 {
            self.ranges.push((lo, store - 1));
        }

        self.work.snapshot(
            Action::Swap {
                left: store,
                right: hi,
            },
            LINE_PLACE_PIVOT,
            format!("Placed pivot {} at index {}", part.pivot, store),
        )
    }
}

impl Iterator for QuickSort {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        self.advance().map(Ok)
    }
}

impl FusedIterator for QuickSort {}
