use super::Workspace;
use crate::algorithms::{SortOrder, StepResult};
use crate::snapshot::{Action, Snapshot};
use std::iter::FusedIterator;

pub const BUBBLE_CODE: &[&str] = &[
    "function bubbleSort(a):",
    "  for i in 0 .. n-1:",
    "    swapped = false",
    "    for j in 0 .. n-i-2:",
    "      if outOfOrder(a[j], a[j+1]):",
    "        swap(a[j], a[j+1])",
    "        swapped = true",
    "    if not swapped: break",
];

const LINE_COMPARE: usize = 4;
const LINE_SWAP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Compare,
    Exchange,
    Finish,
    Exhausted,
}

/// Bubble sort with the early exit after a pass without swaps
#[derive(Debug, Clone)]
pub struct BubbleSort {
    work: Workspace,
    pass: usize,
    j: usize,
    swapped: bool,
    phase: Phase,
}

impl BubbleSort {
    pub fn new(values: &[i32], order: SortOrder) -> Self {
        BubbleSort {
            work: Workspace::new(values, order),
            pass: 0,
            j: 0,
            swapped: false,
            phase: Phase::Compare,
        }
    }

    fn advance(&mut self) -> Option<Snapshot> {
        let n = self.work.len();
        loop {
            match self.phase {
                Phase::Compare => {
                    if self.pass >= n {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    if self.j + 1 >= n - self.pass {
                        if !self.swapped {
                            self.phase = Phase::Finish;
                        } else {
                            self.pass += 1;
                            self.j = 0;
                            self.swapped = false;
                        }
                        continue;
                    }
                    let j = self.j;
                    self.phase = Phase::Exchange;
                    return Some(self.work.snapshot(
                        Action::Compare {
                            left: j,
                            right: j + 1,
                        },
                        LINE_COMPARE,
                        format!("Comparing {} and {}", self.work.get(j), self.work.get(j + 1)),
                    ));
                }
                Phase::Exchange => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Compare;
                    let (x, y) = (self.work.get(j), self.work.get(j + 1));
                    if (x > y) == self.work.ascending() {
                        self.work.swap(j, j + 1);
                        self.swapped = true;
                        return Some(self.work.snapshot(
                            Action::Swap {
                                left: j,
                                right: j + 1,
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

impl Iterator for BubbleSort {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        self.advance().map(Ok)
    }
}

impl FusedIterator for BubbleSort {}
