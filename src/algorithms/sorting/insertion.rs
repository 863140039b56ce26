use super::Workspace;
use crate::algorithms::{SortOrder, StepResult};
use crate::snapshot::{Action, MarkRole, Snapshot};
use std::iter::FusedIterator;

pub const INSERTION_CODE: &[&str] = &[
    "function insertionSort(a):",
    "  for i in 1 .. n-1:",
    "    key = a[i]",
    "    j = i - 1",
    "    while j >= 0 and outOfOrder(a[j], key):",
    "      a[j+1] = a[j]",
    "      j = j - 1",
    "    a[j+1] = key",
];

const LINE_KEY: usize = 2;
const LINE_SHIFT: usize = 5;
const LINE_PLACE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pick up `a[i]` as the key
    Lift,
    /// Open a gap at `hole` by shifting larger (or smaller) elements right
    Shift,
    Finish,
    Exhausted,
}

/// Insertion sort that shows every shift while the gap moves left
#[derive(Debug, Clone)]
pub struct InsertionSort {
    work: Workspace,
    i: usize,
    hole: usize,
    key: i32,
    phase: Phase,
}

impl InsertionSort {
    pub fn new(values: &[i32], order: SortOrder) -> Self {
        InsertionSort {
            work: Workspace::new(values, order),
            i: 1,
            hole: 0,
            key: 0,
            phase: Phase::Lift,
        }
    }

    fn advance(&mut self) -> Option<Snapshot> {
        loop {
            match self.phase {
                Phase::Lift => {
                    if self.i >= self.work.len() {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.key = self.work.get(self.i);
                    self.hole = self.i;
                    self.phase = Phase::Shift;
                    return Some(self.work.snapshot(
                        Action::Mark {
                            index: self.i,
                            role: MarkRole::Key,
                        },
                        LINE_KEY,
                        format!("Inserting {}", self.key),
                    ));
                }
                Phase::Shift => {
                    let hole = self.hole;
                    if hole > 0 && (self.work.get(hole - 1) > self.key) == self.work.ascending() {
                        let moved = self.work.get(hole - 1);
                        self.work.set(hole, moved);
                        self.hole -= 1;
                        return Some(self.work.snapshot(
                            Action::Shift {
                                from: hole - 1,
                                to: hole,
                            },
                            LINE_SHIFT,
                            format!("Shifted {} right", moved),
                        ));
                    }
                    self.work.set(hole, self.key);
                    self.i += 1;
                    self.phase = Phase::Lift;
                    return Some(self.work.snapshot(
                        Action::Assign { index: hole },
                        LINE_PLACE,
                        format!("Placed {} at index {}", self.key, hole),
                    ));
                }
                Phase::Finish => {
                    self.phase = Phase::Exhausted;
                    return Some(self.work.done());
                }
                Phase::Exhausted => return None,
            }
        }
    }
}

impl Iterator for InsertionSort {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        self.advance().map(Ok)
    }
}

impl FusedIterator for InsertionSort {}
