//! Tree pane: the traversal tree drawn on a canvas
//!
//! Nodes are placed by in-order position horizontally and by depth vertically,
//! which keeps every left subtree strictly left of its parent.

use crate::snapshot::Highlight;
use crate::tree::{BinaryTree, NodeId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// Canvas coordinates run from 0 to this in both directions
const EXTENT: f64 = 100.0;

/// Canvas position of every node reachable from the root
pub fn layout_tree(tree: &BinaryTree) -> FxHashMap<NodeId, (f64, f64)> {
    let mut order: Vec<(NodeId, usize)> = Vec::with_capacity(tree.len());
    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut stack: Vec<(NodeId, usize)> = Vec::new();
    let mut current = tree.root().map(|id| (id, 0));

    loop {
        while let Some((id, depth)) = current.take() {
            let Some(node) = tree.node(id) else { break };
            if !seen.insert(id) {
                break;
            }
            stack.push((id, depth));
            current = node.left.map(|left| (left, depth + 1));
        }
        let Some((id, depth)) = stack.pop() else { break };
        order.push((id, depth));
        current = tree
            .node(id)
            .and_then(|node| node.right)
            .map(|right| (right, depth + 1));
    }

    let columns = (order.len() + 1) as f64;
    let rows = (order.iter().map(|&(_, depth)| depth).max().unwrap_or(0) + 2) as f64;
    order
        .into_iter()
        .enumerate()
        .map(|(column, (id, depth))| {
            let x = (column + 1) as f64 / columns * EXTENT;
            let y = EXTENT - (depth + 1) as f64 / rows * EXTENT;
            (id, (x, y))
        })
        .collect()
}

/// Render the tree with traversal progress: `visited` nodes so far, `path`
/// edges walked so far, and the edge being walked right now, if any.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: &BinaryTree,
    visited: &[NodeId],
    path: &[(NodeId, NodeId)],
    highlight: Highlight,
    current_edge: Option<(NodeId, NodeId)>,
) {
    let block = Block::default()
        .title(format!(" Tree ({} nodes) ", tree.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if tree.is_empty() {
        let paragraph = Paragraph::new("(empty tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let positions = layout_tree(tree);
    let edges = tree.edges();
    let visited: FxHashSet<NodeId> = visited.iter().copied().collect();
    let walked: FxHashSet<(NodeId, NodeId)> = path.iter().copied().collect();
    let current_node = highlight.node();
    // Width of one character cell in canvas units, for centering labels
    let cell = EXTENT / f64::from(area.width.saturating_sub(2).max(1));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, EXTENT])
        .y_bounds([0.0, EXTENT])
        .paint(|ctx| {
            for &(parent, child) in &edges {
                let (Some(&(x1, y1)), Some(&(x2, y2))) =
                    (positions.get(&parent), positions.get(&child))
                else {
                    continue;
                };
                let color: Color = if current_edge == Some((parent, child)) {
                    DEFAULT_THEME.secondary
                } else if walked.contains(&(parent, child)) {
                    DEFAULT_THEME.path
                } else {
                    DEFAULT_THEME.border_normal
                };
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                });
            }

            for (&id, &(x, y)) in &positions {
                let Some(value) = tree.value(id) else { continue };
                let label = format!(" {} ", value);
                let style = if current_node == Some(id) {
                    Style::default()
                        .bg(DEFAULT_THEME.secondary)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else if visited.contains(&id) {
                    Style::default()
                        .bg(DEFAULT_THEME.visited)
                        .fg(Color::Black)
                } else {
                    Style::default().fg(DEFAULT_THEME.bar)
                };
                let x = (x - label.len() as f64 * cell / 2.0).max(0.0);
                ctx.print(x, y, Span::styled(label, style));
            }
        });

    frame.render_widget(canvas, area);
}
