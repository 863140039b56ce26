use super::Workspace;
use crate::algorithms::{SortOrder, StepResult};
use crate::snapshot::{Action, Snapshot};
use std::iter::FusedIterator;

pub const HEAP_CODE: &[&str] = &[
    "function heapSort(a):",
    "  for i in n/2-1 down to 0:",
    "    siftDown(a, n, i)",
    "  for end in n-1 down to 1:",
    "    swap(a[0], a[end])",
    "    siftDown(a, end, 0)",
    "function siftDown(a, size, i):",
    "  top = i; l = 2i+1; r = 2i+2",
    "  if l < size and above(a[l], a[top]): top = l",
    "  if r < size and above(a[r], a[top]): top = r",
    "  if top != i:",
    "    swap(a[i], a[top]); siftDown(a, size, top)",
];

const LINE_EXTRACT: usize = 4;
const LINE_LEFT: usize = 8;
const LINE_RIGHT: usize = 9;
const LINE_SIFT_SWAP: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Left,
    Right,
    Exchange,
}

/// A sift-down of `root` within the first `size` elements
#[derive(Debug, Clone, Copy)]
struct Sift {
    size: usize,
    root: usize,
    top: usize,
    stage: Stage,
}

impl Sift {
    fn new(size: usize, root: usize) -> Self {
        Sift {
            size,
            root,
            top: root,
            stage: Stage::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Heapifying parents; `remaining` of them are still to sift, highest index first
    Build { remaining: usize },
    /// Moving the root behind the heap; `end` is the last unsorted slot
    Extract { end: usize },
    Finish,
    Exhausted,
}

/// Heap sort: a max-heap for ascending order, a min-heap for descending
#[derive(Debug, Clone)]
pub struct HeapSort {
    work: Workspace,
    phase: Phase,
    sift: Option<Sift>,
}

impl HeapSort {
    pub fn new(values: &[i32], order: SortOrder) -> Self {
        HeapSort {
            work: Workspace::new(values, order),
            phase: Phase::Build {
                remaining: values.len() / 2,
            },
            sift: None,
        }
    }

    fn advance(&mut self) -> Option<Snapshot> {
        loop {
            if let Some(mut sift) = self.sift.take() {
                if let Some(snapshot) = self.sift_step(&mut sift) {
                    self.sift = Some(sift);
                    return Some(snapshot);
                }
                continue;
            }

            match self.phase {
                Phase::Build { remaining } => {
                    if remaining == 0 {
                        self.phase = Phase::Extract {
                            end: self.work.len().saturating_sub(1),
                        };
                        continue;
                    }
                    self.phase = Phase::Build {
                        remaining: remaining - 1,
                    };
                    self.sift = Some(Sift::new(self.work.len(), remaining - 1));
                }
                Phase::Extract { end } => {
                    if end == 0 {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    let (x, y) = (self.work.get(0), self.work.get(end));
                    self.work.swap(0, end);
                    self.phase = Phase::Extract { end: end - 1 };
                    self.sift = Some(Sift::new(end, 0));
                    return Some(self.work.snapshot(
                        Action::Swap {
                            left: 0,
                            right: end,
                        },
                        LINE_EXTRACT,
                        format!("Moved root {} behind the heap, {} to the root", x, y),
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

    /// Next event of a sift-down, or `None` once the subtree is a heap again
    fn sift_step(&mut self, sift: &mut Sift) -> Option<Snapshot> {
        let ascending = self.work.ascending();
        loop {
            match sift.stage {
                Stage::Left => {
                    sift.stage = Stage::Right;
                    let child = 2 * sift.root + 1;
                    if child < sift.size {
                        let snapshot = self.work.snapshot(
                            Action::Compare {
                                left: sift.root,
                                right: child,
                            },
                            LINE_LEFT,
                            format!(
                                "Comparing {} with left child {}",
                                self.work.get(sift.root),
                                self.work.get(child)
                            ),
                        );
                        if (self.work.get(child) > self.work.get(sift.top)) == ascending {
                            sift.top = child;
                        }
                        return Some(snapshot);
                    }
                }
                Stage::Right => {
                    sift.stage = Stage::Exchange;
                    let child = 2 * sift.root + 2;
                    if child < sift.size {
                        let top = sift.top;
                        let snapshot = self.work.snapshot(
                            Action::Compare {
                                left: sift.root,
                                right: child,
                            },
                            LINE_RIGHT,
                            format!(
                                "Comparing {} with right child {}",
                                self.work.get(top),
                                self.work.get(child)
                            ),
                        );
                        if (self.work.get(child) > self.work.get(top)) == ascending {
                            sift.top = child;
                        }
                        return Some(snapshot);
                    }
                }
                Stage::Exchange => {
                    if sift.top == sift.root {
                        return None;
                    }
                    let (root, top) = (sift.root, sift.top);
                    let (x, y) = (self.work.get(root), self.work.get(top));
                    self.work.swap(root, top);
                    *sift = Sift::new(sift.size, top);
                    return Some(self.work.snapshot(
                        Action::Swap {
                            left: root,
                            right: top,
                        },
                        LINE_SIFT_SWAP,
                        format!("Sifted {} down past {}", x, y),
                    ));
                }
            }
        }
    }
}

impl Iterator for HeapSort {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        self.advance().map(Ok)
    }
}

impl FusedIterator for HeapSort {}
