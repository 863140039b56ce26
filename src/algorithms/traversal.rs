//! Depth-first tree traversal step generators
//!
//! The classical recursive definitions are flattened onto a task stack: entering
//! a node pushes its visit and its descents (each followed by entering the child)
//! in the reverse of the order the traversal performs them. A missing child
//! produces no task at all, so null sides emit nothing. A node reached a second
//! time means the arena links are not a tree; that faults instead of looping.

use super::StepResult;
use crate::errors::GeneratorFault;
use crate::snapshot::{Action, Snapshot, SnapshotState};
use crate::tree::{BinaryTree, NodeId};
use std::iter::FusedIterator;
use std::rc::Rc;

pub const INORDER_CODE: &[&str] = &[
    "function inorder(node):",
    "  if node == null:",
    "    return",
    "  inorder(node.left)",
    "  visit(node)",
    "  inorder(node.right)",
];

pub const PREORDER_CODE: &[&str] = &[
    "function preorder(node):",
    "  if node == null:",
    "    return",
    "  visit(node)",
    "  preorder(node.left)",
    "  preorder(node.right)",
];

pub const POSTORDER_CODE: &[&str] = &[
    "function postorder(node):",
    "  if node == null:",
    "    return",
    "  postorder(node.left)",
    "  postorder(node.right)",
    "  visit(node)",
];

/// Which of the three depth-first orders to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    InOrder,
    PreOrder,
    PostOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Left,
    Visit,
    Right,
}

impl TraversalOrder {
    /// The order of the three steps taken at each node
    fn steps(self) -> [Step; 3] {
        match self {
            TraversalOrder::InOrder => [Step::Left, Step::Visit, Step::Right],
            TraversalOrder::PreOrder => [Step::Visit, Step::Left, Step::Right],
            TraversalOrder::PostOrder => [Step::Left, Step::Right, Step::Visit],
        }
    }

    /// Pseudo-code line of `step`; lines 3..=5 hold the three steps in order
    fn line_of(self, step: Step) -> usize {
        let position = self.steps().iter().position(|s| *s == step).unwrap_or(0);
        3 + position
    }

    pub fn pseudo_code(self) -> &'static [&'static str] {
        match self {
            TraversalOrder::InOrder => INORDER_CODE,
            TraversalOrder::PreOrder => PREORDER_CODE,
            TraversalOrder::PostOrder => POSTORDER_CODE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "In-order",
            TraversalOrder::PreOrder => "Pre-order",
            TraversalOrder::PostOrder => "Post-order",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Task {
    Enter(NodeId),
    Visit(NodeId),
    Descend { step: Step, parent: NodeId, child: NodeId },
}

/// A depth-first traversal of a shared, fixed-shape tree
#[derive(Debug, Clone)]
pub struct Traversal {
    tree: Rc<BinaryTree>,
    order: TraversalOrder,
    tasks: Vec<Task>,
    visited: Vec<NodeId>,
    path: Vec<(NodeId, NodeId)>,
    /// Indexed by `NodeId`; set once a node has been entered
    entered: Vec<bool>,
    finished: bool,
}

impl Traversal {
    pub fn new(tree: Rc<BinaryTree>, order: TraversalOrder) -> Self {
        let tasks = tree.root().map(Task::Enter).into_iter().collect();
        let entered = vec![false; tree.len()];
        Traversal {
            entered,
            tree,
            order,
            tasks,
            visited: Vec::new(),
            path: Vec::new(),
            finished: false,
        }
    }

    fn snapshot(&self, action: Action, line: Option<usize>, message: String) -> Snapshot {
        Snapshot::new(
            SnapshotState::Tree {
                visited: self.visited.clone(),
                path: self.path.clone(),
            },
            action,
            message,
            line,
        )
    }

    fn value_of(&self, id: NodeId) -> Result<i32, GeneratorFault> {
        self.tree
            .value(id)
            .ok_or(GeneratorFault::MissingNode { node: id })
    }

    /// Schedule the work for `id` in reverse so it pops in traversal order
    fn enter(&mut self, id: NodeId) -> Result<(), GeneratorFault> {
        let node = self
            .tree
            .node(id)
            .ok_or(GeneratorFault::MissingNode { node: id })?;
        let (left, right) = (node.left, node.right);
        match self.entered.get_mut(id.0) {
            Some(seen) if !*seen => *seen = true,
            _ => return Err(GeneratorFault::RevisitedNode { node: id }),
        }

        for step in self.order.steps().into_iter().rev() {
            let child = match step {
                Step::Visit => {
                    self.tasks.push(Task::Visit(id));
                    continue;
                }
                Step::Left => left,
                Step::Right => right,
            };
            if let Some(child) = child {
                self.tasks.push(Task::Enter(child));
                self.tasks.push(Task::Descend {
                    step,
                    parent: id,
                    child,
                });
            }
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<Option<Snapshot>, GeneratorFault> {
        while let Some(task) = self.tasks.pop() {
            match task {
                Task::Enter(id) => self.enter(id)?,
                Task::Visit(id) => {
                    let value = self.value_of(id)?;
                    self.visited.push(id);
                    return Ok(Some(self.snapshot(
                        Action::Visit { node: id },
                        Some(self.order.line_of(Step::Visit)),
                        format!("Visiting {}", value),
                    )));
                }
                Task::Descend {
                    step,
                    parent,
                    child,
                } => {
                    let value = self.value_of(parent)?;
                    self.path.push((parent, child));
                    let (action, side) = if step == Step::Left {
                        (Action::DescendLeft { parent, child }, "left")
                    } else {
                        (Action::DescendRight { parent, child }, "right")
                    };
                    return Ok(Some(self.snapshot(
                        action,
                        Some(self.order.line_of(step)),
                        format!("Going {} from {}", side, value),
                    )));
                }
            }
        }

        if self.finished {
            return Ok(None);
        }
        self.finished = true;
        let values: Vec<String> = self
            .visited
            .iter()
            .filter_map(|id| self.tree.value(*id))
            .map(|v| v.to_string())
            .collect();
        Ok(Some(self.snapshot(
            Action::Done,
            None,
            format!("{} traversal: {}", self.order.label(), values.join(", ")),
        )))
    }
}

impl Iterator for Traversal {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        match self.advance() {
            Ok(snapshot) => snapshot.map(Ok),
            Err(fault) => {
                self.tasks.clear();
                self.finished = true;
                Some(Err(fault))
            }
        }
    }
}

impl FusedIterator for Traversal {}
