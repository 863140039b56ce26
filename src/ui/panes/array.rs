//! Array pane: one bar per element, colored by the action of the latest snapshot

use crate::snapshot::{Action, Highlight};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Color of the bar at `index`
fn bar_color(index: usize, highlight: Highlight, action: Option<Action>) -> Color {
    match action {
        Some(Action::Done) => return DEFAULT_THEME.success,
        None => return DEFAULT_THEME.bar,
        Some(_) if !highlight.contains_index(index) => return DEFAULT_THEME.bar,
        _ => {}
    }
    match action {
        Some(Action::Compare { .. }) => DEFAULT_THEME.compare,
        Some(Action::Swap { .. }) => DEFAULT_THEME.swap,
        Some(Action::Shift { .. }) | Some(Action::Assign { .. }) => DEFAULT_THEME.write,
        Some(Action::Mark { .. }) => DEFAULT_THEME.mark,
        _ => DEFAULT_THEME.bar,
    }
}

/// Widest bars that fit `count` bars with one-cell gaps into `width`
fn bar_width(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let count = count as u16;
    let gaps = count.saturating_sub(1);
    (width.saturating_sub(gaps) / count).max(1)
}

/// Render the array as a bar chart. `action` is `None` before a run starts.
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[i32],
    highlight: Highlight,
    action: Option<Action>,
) {
    let block = Block::default()
        .title(format!(" Array ({} values) ", values.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if values.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let max_value = values.iter().copied().max().unwrap_or(1).max(1) as u64;
    let width = bar_width(area.width.saturating_sub(2), values.len());

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let color = bar_color(idx, highlight, action);
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .bg(color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(width)
        .bar_gap(1)
        .max(max_value)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MarkRole;

    #[test]
    fn only_highlighted_bars_take_the_action_color() {
        let action = Action::Swap { left: 1, right: 3 };
        let highlight = action.highlight();
        assert_eq!(bar_color(1, highlight, Some(action)), DEFAULT_THEME.swap);
        assert_eq!(bar_color(3, highlight, Some(action)), DEFAULT_THEME.swap);
        assert_eq!(bar_color(2, highlight, Some(action)), DEFAULT_THEME.bar);
    }

    #[test]
    fn finished_array_is_all_success() {
        assert_eq!(
            bar_color(0, Highlight::None, Some(Action::Done)),
            DEFAULT_THEME.success
        );
        let mark = Action::Mark {
            index: 0,
            role: MarkRole::Pivot,
        };
        assert_eq!(bar_color(0, mark.highlight(), Some(mark)), DEFAULT_THEME.mark);
    }

    #[test]
    fn bars_shrink_to_fit() {
        assert_eq!(bar_width(100, 10), 9);
        assert_eq!(bar_width(10, 25), 1);
        assert_eq!(bar_width(10, 0), 1);
    }
}
