//! Command-line options and the runtime configuration derived from them

use crate::algorithms::SortOrder;
use crate::input::InputLimits;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Playback tuning shared by the controller and the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Wall-clock time between autoplay advances
    pub autoplay_interval: Duration,
    /// Oldest trace entries are dropped past this many
    pub trace_capacity: usize,
    /// How many trace entries the trace pane shows
    pub trace_visible: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            autoplay_interval: Duration::from_millis(600),
            trace_capacity: 200,
            trace_visible: 8,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "algotty",
    version,
    about = "Step through sorting algorithms and tree traversals in the terminal"
)]
pub struct Cli {
    /// Numbers to sort, separated by spaces or commas (random when omitted)
    #[arg(short, long)]
    pub numbers: Option<String>,

    /// Build the traversal tree by inserting these values into a search tree
    /// (the sample tree is used when omitted)
    #[arg(short, long)]
    pub tree_values: Option<String>,

    /// Algorithm to preselect: bubble, insertion, selection, quick, merge,
    /// heap, inorder, preorder or postorder
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub descending: bool,

    /// Start playing as soon as a run starts
    #[arg(long)]
    pub autoplay: bool,

    /// Milliseconds between autoplay steps
    #[arg(long, default_value_t = 600)]
    pub interval_ms: u64,

    /// Maximum number of trace entries kept
    #[arg(long, default_value_t = 200)]
    pub trace_capacity: usize,

    /// Number of trace entries shown
    #[arg(long, default_value_t = 8)]
    pub trace_visible: usize,

    /// Write diagnostics to this file (RUST_LOG filters them)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            autoplay_interval: Duration::from_millis(self.interval_ms),
            trace_capacity: self.trace_capacity.max(1),
            trace_visible: self.trace_visible.max(1),
        }
    }

    pub fn input_limits(&self) -> InputLimits {
        InputLimits::default()
    }

    pub fn sort_order(&self) -> SortOrder {
        if self.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_playback_config() {
        let cli = Cli::parse_from(["algotty"]);
        assert_eq!(cli.playback_config(), PlaybackConfig::default());
        assert_eq!(cli.sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn flags_are_applied() {
        let cli = Cli::parse_from([
            "algotty",
            "--numbers",
            "5 3 8",
            "--algorithm",
            "heap",
            "--descending",
            "--interval-ms",
            "100",
        ]);
        assert_eq!(cli.numbers.as_deref(), Some("5 3 8"));
        assert_eq!(cli.algorithm.as_deref(), Some("heap"));
        assert_eq!(cli.sort_order(), SortOrder::Descending);
        assert_eq!(
            cli.playback_config().autoplay_interval,
            Duration::from_millis(100)
        );
    }
}
