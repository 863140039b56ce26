//! Trace pane rendering

use crate::snapshot::TraceLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the newest `visible` trace entries, oldest first
pub fn render_trace_pane(frame: &mut Frame, area: Rect, trace: &TraceLog, visible: usize) {
    let block = Block::default()
        .title(" Trace ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if trace.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    let shown: Vec<&str> = trace.recent(visible.min(visible_height)).collect();
    let newest = shown.len().saturating_sub(1);

    let items: Vec<ListItem> = shown
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let style = if entry.starts_with("Fault:") {
                Style::default().fg(DEFAULT_THEME.error)
            } else if idx == newest {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            ListItem::new(*entry).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
