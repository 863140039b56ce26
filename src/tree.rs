//! Binary tree model used by the traversal visualizations
//!
//! Nodes live in an arena owned by [`BinaryTree`] and refer to their children by
//! [`NodeId`]. There are no parent links: edges are re-derived from the child
//! references whenever the tree is laid out or drawn.

use std::fmt;

/// Position of a node in the tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i32,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl TreeNode {
    pub fn leaf(value: i32) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary tree whose shape stays fixed for the whole traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl BinaryTree {
    /// Build a tree from raw parts. Child references are not checked here;
    /// a dangling reference surfaces as a fault when a traversal reaches it.
    pub fn from_parts(nodes: Vec<TreeNode>, root: Option<NodeId>) -> Self {
        BinaryTree { nodes, root }
    }

    /// The sample tree shown by default:
    ///
    /// ```text
    ///         50
    ///       /    \
    ///     30      70
    ///    /  \    /  \
    ///   20  40  60  90
    /// ```
    pub fn sample() -> Self {
        Self::from_bst_values(&[50, 30, 70, 20, 40, 60, 90])
    }

    /// Build a binary search tree by inserting the values in order.
    /// Duplicates go to the right subtree.
    pub fn from_bst_values(values: &[i32]) -> Self {
        let mut tree = BinaryTree::default();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    fn insert(&mut self, value: i32) {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::leaf(value));

        let Some(mut current) = self.root else {
            self.root = Some(id);
            return;
        };

        loop {
            let node = &mut self.nodes[current.0];
            let slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(id);
                    return;
                }
            }
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Value stored at `id`, if the node exists
    pub fn value(&self, id: NodeId) -> Option<i32> {
        self.node(id).map(|n| n.value)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every parent/child edge reachable from the root, parents before children.
    /// Dangling child references and back-references are skipped.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::new();
        let mut seen = vec![false; self.nodes.len()];
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = pending.pop() {
            let Some(node) = self.node(id) else { continue };
            seen[id.0] = true;
            for child in [node.right, node.left].into_iter().flatten() {
                if self.node(child).is_some() && !seen[child.0] {
                    edges.push((id, child));
                    pending.push(child);
                }
            }
        }
        edges
    }
}
