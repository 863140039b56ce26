use super::Workspace;
use crate::algorithms::{SortOrder, StepResult};
use crate::snapshot::{Action, MarkRole, Snapshot};
use std::iter::FusedIterator;

pub const SELECTION_CODE: &[&str] = &[
    "function selectionSort(a):",
    "  for i in 0 .. n-1:",
    "    best = i",
    "    for j in i+1 .. n-1:",
    "      if better(a[j], a[best]):",
    "        best = j",
    "    if best != i:",
    "      swap(a[i], a[best])",
];

const LINE_CANDIDATE: usize = 2;
const LINE_COMPARE: usize = 4;
const LINE_SWAP: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Scan,
    Place,
    Finish,
    Exhausted,
}

/// Selection sort; swaps only when the scan found a better candidate.
/// Every outer index gets a candidate mark, the last one included, and the
/// scan compares are shown against that outer index.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    work: Workspace,
    i: usize,
    j: usize,
    best: usize,
    phase: Phase,
}

impl SelectionSort {
    pub fn new(values: &[i32], order: SortOrder) -> Self {
        SelectionSort {
            work: Workspace::new(values, order),
            i: 0,
            j: 0,
            best: 0,
            phase: Phase::Start,
        }
    }

    fn advance(&mut self) -> Option<Snapshot> {
        let n = self.work.len();
        loop {
            match self.phase {
                Phase::Start => {
                    // Past the last index, or fewer than two values to order
                    if n < 2 || self.i >= n {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.best = self.i;
                    self.j = self.i + 1;
                    self.phase = Phase::Scan;
                    return Some(self.work.snapshot(
                        Action::Mark {
                            index: self.i,
                            role: MarkRole::Candidate,
                        },
                        LINE_CANDIDATE,
                        format!("Candidate {} at index {}", self.work.get(self.i), self.i),
                    ));
                }
                Phase::Scan => {
                    if self.j >= n {
                        self.phase = Phase::Place;
                        continue;
                    }
                    let (i, j, best) = (self.i, self.j, self.best);
                    let snapshot = self.work.snapshot(
                        Action::Compare { left: i, right: j },
                        LINE_COMPARE,
                        format!(
                            "Comparing {} with candidate {}",
                            self.work.get(j),
                            self.work.get(best)
                        ),
                    );
                    if (self.work.get(j) < self.work.get(best)) == self.work.ascending() {
                        self.best = j;
                    }
                    self.j += 1;
                    return Some(snapshot);
                }
                Phase::Place => {
                    let (i, best) = (self.i, self.best);
                    self.i += 1;
                    self.phase = Phase::Start;
                    if best != i {
                        let (x, y) = (self.work.get(i), self.work.get(best));
                        self.work.swap(i, best);
                        return Some(self.work.snapshot(
                            Action::Swap {
                                left: i,
                                right: best,
                            },
                            LINE_SWAP,
                            format!("Swapped {} and {}", x, y),
                        ));
                    }
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

impl Iterator for SelectionSort {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        self.advance().map(Ok)
    }
}

impl FusedIterator for SelectionSort {}
