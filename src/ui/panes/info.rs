//! Info pane: what is running and how far it got

use crate::algorithms::SortOrder;
use crate::playback::PlaybackState;
use crate::registry::{AlgorithmEntry, Family};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

pub struct InfoRenderData<'a> {
    pub entry: Option<&'a AlgorithmEntry>,
    pub order: SortOrder,
    pub state: PlaybackState,
    pub steps: usize,
    /// Wall-clock time of the current or last run
    pub elapsed: Option<Duration>,
    pub data_summary: String,
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{}.{:01}s", elapsed.as_secs(), elapsed.subsec_millis() / 100)
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{:<11}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, data: &InfoRenderData) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let name = match data.entry {
        Some(entry) => Span::styled(
            entry.name,
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("No algorithm selected", Style::default().fg(DEFAULT_THEME.comment)),
    };

    let mut lines = vec![Line::from(name)];
    if let Some(entry) = data.entry {
        if entry.family == Family::Sort {
            lines.push(field("Direction", data.order.label().to_string()));
        }
        lines.push(field("Complexity", entry.complexity.to_string()));
    } else {
        lines.push(field("Direction", data.order.label().to_string()));
    }
    lines.push(field("Data", data.data_summary.clone()));
    lines.push(field("State", data.state.label().to_string()));
    lines.push(field("Steps", data.steps.to_string()));
    if let Some(elapsed) = data.elapsed {
        lines.push(field("Elapsed", format_elapsed(elapsed)));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
