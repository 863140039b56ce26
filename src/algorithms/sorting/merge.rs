use super::Workspace;
use crate::algorithms::{SortOrder, StepResult};
use crate::snapshot::{Action, Snapshot};
use std::iter::FusedIterator;

pub const MERGE_CODE: &[&str] = &[
    "function mergeSort(a, lo, hi):",
    "  if lo >= hi: return",
    "  mid = (lo + hi) / 2",
    "  mergeSort(a, lo, mid)",
    "  mergeSort(a, mid+1, hi)",
    "  merge(a, lo, mid, hi)",
    "function merge(a, lo, mid, hi):",
    "  while both runs have elements:",
    "    if takeLeft(L[i], R[j]):",
    "      a[k++] = L[i++]",
    "    else: a[k++] = R[j++]",
    "  copy rest of L, then rest of R",
];

const LINE_COMPARE: usize = 8;
const LINE_TAKE_LEFT: usize = 9;
const LINE_TAKE_RIGHT: usize = 10;
const LINE_TAIL: usize = 11;

#[derive(Debug, Clone, Copy)]
enum Task {
    Sort { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

/// Two sorted runs being merged back into `a[lo..=hi]`
#[derive(Debug, Clone)]
struct Merge {
    lo: usize,
    mid: usize,
    left: Vec<i32>,
    right: Vec<i32>,
    i: usize,
    j: usize,
    k: usize,
    /// The compare for `(i, j)` has been shown; the write comes next
    compared: bool,
}

/// Top-down merge sort driven by an explicit task stack
#[derive(Debug, Clone)]
pub struct MergeSort {
    work: Workspace,
    tasks: Vec<Task>,
    merge: Option<Merge>,
    finished: bool,
}

impl MergeSort {
    pub fn new(values: &[i32], order: SortOrder) -> Self {
        let mut tasks = Vec::new();
        if values.len() > 1 {
            tasks.push(Task::Sort {
                lo: 0,
                hi: values.len() - 1,
            });
        }
        MergeSort {
            work: Workspace::new(values, order),
            tasks,
            merge: None,
            finished: false,
        }
    }

    fn advance(&mut self) -> Option<Snapshot> {
        if self.finished {
            return None;
        }
        loop {
            if let Some(mut merge) = self.merge.take() {
                if let Some(snapshot) = self.merge_step(&mut merge) {
                    self.merge = Some(merge);
                    return Some(snapshot);
                }
                continue;
            }

            match self.tasks.pop() {
                Some(Task::Sort { lo, hi }) => {
                    if lo < hi {
                        let mid = (lo + hi) / 2;
                        self.tasks.push(Task::Merge { lo, mid, hi });
                        self.tasks.push(Task::Sort { lo: mid + 1, hi });
                        self.tasks.push(Task::Sort { lo, hi: mid });
                    }
                }
                Some(Task::Merge { lo, mid, hi }) => {
                    let left = (lo..=mid).map(|idx| self.work.get(idx)).collect();
                    let right = (mid + 1..=hi).map(|idx| self.work.get(idx)).collect();
                    self.merge = Some(Merge {
                        lo,
                        mid,
                        left,
                        right,
                        i: 0,
                        j: 0,
                        k: lo,
                        compared: false,
                    });
                }
                None => {
                    self.finished = true;
                    return Some(self.work.done());
                }
            }
        }
    }

    /// Next event of a merge, or `None` once both runs are written back
    fn merge_step(&mut self, m: &mut Merge) -> Option<Snapshot> {
        if m.i < m.left.len() && m.j < m.right.len() {
            let (l, r) = (m.left[m.i], m.right[m.j]);
            if !m.compared {
                m.compared = true;
                return Some(self.work.snapshot(
                    Action::Compare {
                        left: m.lo + m.i,
                        right: m.mid + 1 + m.j,
                    },
                    LINE_COMPARE,
                    format!("Comparing {} and {}", l, r),
                ));
            }
            m.compared = false;
            let k = m.k;
            m.k += 1;
            let (value, line) = if (l <= r) == self.work.ascending() {
                m.i += 1;
                (l, LINE_TAKE_LEFT)
            } else {
                m.j += 1;
                (r, LINE_TAKE_RIGHT)
            };
            self.work.set(k, value);
            return Some(self.work.snapshot(
                Action::Assign { index: k },
                line,
                format!("Wrote {} to index {}", value, k),
            ));
        }

        let value = if m.i < m.left.len() {
            m.i += 1;
            m.left[m.i - 1]
        } else if m.j < m.right.len() {
            m.j += 1;
            m.right[m.j - 1]
        } else {
            return None;
        };
        let k = m.k;
        m.k += 1;
        self.work.set(k, value);
        Some(self.work.snapshot(
            Action::Assign { index: k },
            LINE_TAIL,
            format!("Copied {} to index {}", value, k),
        ))
    }
}

impl Iterator for MergeSort {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        self.advance().map(Ok)
    }
}

impl FusedIterator for MergeSort {}
