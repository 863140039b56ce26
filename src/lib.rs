//! # Introduction
//!
//! algotty steps through classic sorting algorithms and binary tree traversals
//! one observable event at a time. Every comparison, swap, write, descent and
//! visit becomes a self-contained [`snapshot::Snapshot`], and a terminal UI built
//! with [ratatui](https://docs.rs/ratatui) replays them by hand or on a timer.
//!
//! ## Playback pipeline
//!
//! ```text
//! Input → Dataset → Registry → Step generator → Controller → Snapshots → TUI
//! ```
//!
//! 1. [`input`] parses and range-checks user numbers, or draws random ones, and
//!    builds the traversal tree.
//! 2. [`registry`] maps an algorithm key to its generator factory, pseudo-code
//!    and complexity label.
//! 3. [`algorithms`] holds the lazy step generators, one per algorithm.
//! 4. [`playback`] owns the live generator and drives it through the
//!    `Idle → Ready → Stepping ⇄ Autoplaying → Finished` state machine.
//! 5. [`snapshot`] defines the snapshot data model and the bounded trace log.
//! 6. [`ui`] renders the latest snapshot; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting (ascending or descending): bubble, insertion, selection, quick,
//! merge, heap. Traversals: in-order, pre-order, post-order.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod input;
pub mod playback;
pub mod registry;
pub mod snapshot;
pub mod tree;
pub mod ui;
