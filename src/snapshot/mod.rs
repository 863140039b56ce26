// Snapshots of algorithm state, one per observable event

mod trace;

pub use trace::TraceLog;

use crate::tree::NodeId;

/// What an element marked by [`Action::Mark`] is being singled out as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkRole {
    /// Element lifted out for insertion
    Key,
    /// Current best minimum/maximum in a selection scan
    Candidate,
    /// Partition pivot
    Pivot,
}

/// The event a snapshot records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Compare { left: usize, right: usize },
    Swap { left: usize, right: usize },
    /// A value was written into `index` (merge output, insertion slot)
    Assign { index: usize },
    /// `from` was copied one slot over into `to` while opening a gap
    Shift { from: usize, to: usize },
    Mark { index: usize, role: MarkRole },
    Visit { node: NodeId },
    DescendLeft { parent: NodeId, child: NodeId },
    DescendRight { parent: NodeId, child: NodeId },
    /// Terminal snapshot; nothing is highlighted
    Done,
}

impl Action {
    /// The elements a renderer should emphasize for this action
    pub fn highlight(&self) -> Highlight {
        match *self {
            Action::Compare { left, right } | Action::Swap { left, right } => {
                Highlight::Two(left, right)
            }
            Action::Shift { from, to } => Highlight::Two(from, to),
            Action::Assign { index } | Action::Mark { index, .. } => Highlight::One(index),
            Action::Visit { node } => Highlight::Node(node),
            Action::DescendLeft { parent, .. } | Action::DescendRight { parent, .. } => {
                Highlight::Node(parent)
            }
            Action::Done => Highlight::None,
        }
    }

    /// Short lowercase tag, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Compare { .. } => "compare",
            Action::Swap { .. } => "swap",
            Action::Assign { .. } => "assign",
            Action::Shift { .. } => "shift",
            Action::Mark { .. } => "mark",
            Action::Visit { .. } => "visit",
            Action::DescendLeft { .. } => "descend_left",
            Action::DescendRight { .. } => "descend_right",
            Action::Done => "done",
        }
    }

    /// The edge being walked, for descend actions
    pub fn edge(&self) -> Option<(NodeId, NodeId)> {
        match *self {
            Action::DescendLeft { parent, child } | Action::DescendRight { parent, child } => {
                Some((parent, child))
            }
            _ => None,
        }
    }
}

/// Zero, one or two array indices, or a single tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    None,
    One(usize),
    Two(usize, usize),
    Node(NodeId),
}

impl Highlight {
    pub fn is_empty(&self) -> bool {
        matches!(self, Highlight::None)
    }

    /// Whether array position `index` is highlighted
    pub fn contains_index(&self, index: usize) -> bool {
        match *self {
            Highlight::One(i) => i == index,
            Highlight::Two(i, j) => i == index || j == index,
            Highlight::None | Highlight::Node(_) => false,
        }
    }

    pub fn node(&self) -> Option<NodeId> {
        match *self {
            Highlight::Node(id) => Some(id),
            _ => None,
        }
    }
}

/// Data captured at the instant of the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotState {
    /// Full copy of the array being sorted
    Array(Vec<i32>),
    /// The tree shape never changes, so only traversal progress is kept:
    /// nodes visited so far (in order) and every edge walked so far
    Tree {
        visited: Vec<NodeId>,
        path: Vec<(NodeId, NodeId)>,
    },
}

impl SnapshotState {
    pub fn as_array(&self) -> Option<&[i32]> {
        match self {
            SnapshotState::Array(values) => Some(values),
            SnapshotState::Tree { .. } => None,
        }
    }

    pub fn visited(&self) -> &[NodeId] {
        match self {
            SnapshotState::Tree { visited, .. } => visited,
            SnapshotState::Array(_) => &[],
        }
    }

    pub fn path(&self) -> &[(NodeId, NodeId)] {
        match self {
            SnapshotState::Tree { path, .. } => path,
            SnapshotState::Array(_) => &[],
        }
    }
}

/// One self-contained inspection point in an algorithm's execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: SnapshotState,
    pub highlight: Highlight,
    pub action: Action,
    pub trace_message: String,
    /// Line of the algorithm's pseudo-code listing; `None` for the terminal snapshot
    pub code_line: Option<usize>,
}

impl Snapshot {
    pub fn new(
        state: SnapshotState,
        action: Action,
        trace_message: impl Into<String>,
        code_line: Option<usize>,
    ) -> Self {
        Snapshot {
            state,
            highlight: action.highlight(),
            action,
            trace_message: trace_message.into(),
            code_line,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.action == Action::Done
    }
}
