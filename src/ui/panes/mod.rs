//! TUI pane rendering modules
//!
//! Every pane draws from the latest snapshot (or the loaded data set before a
//! run starts) and keeps no state of its own between frames.
//!
//! # Pane Modules
//!
//! - [`array`]: bar chart of the array, colored by the current action
//! - [`tree`]: tree canvas with visited nodes and walked edges
//! - [`code`]: pseudo-code listing with the current line highlighted
//! - [`trace`]: the most recent trace messages
//! - [`info`]: algorithm name, direction, complexity and timing
//! - [`status`]: status bar with keybindings and playback state

pub mod array;
pub mod code;
pub mod info;
pub mod status;
pub mod trace;
pub mod tree;

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use code::render_code_pane;
pub use info::{render_info_pane, InfoRenderData};
pub use status::render_status_bar;
pub use trace::render_trace_pane;
pub use tree::{layout_tree, render_tree_pane};
