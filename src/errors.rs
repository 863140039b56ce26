//! Error types for selection, stepping and input handling
//!
//! None of these are fatal to the render loop. [`SelectionError`] and
//! [`PlaybackError::InvalidOperation`] are reported back to the caller and leave
//! the controller untouched; a [`GeneratorFault`] ends the current run the same
//! way exhaustion does, with the fault text written to the trace log.

use crate::tree::NodeId;
use thiserror::Error;

/// Failure to resolve an algorithm selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No registry entry exists for the key
    #[error("unknown algorithm '{key}'")]
    UnknownAlgorithm { key: String },

    /// The algorithm cannot run over the loaded data (e.g. a sort over a tree)
    #[error("{algorithm} needs {expected} input, but {found} was loaded")]
    DatasetMismatch {
        algorithm: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Internal inconsistency hit while producing a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorFault {
    /// A child reference does not resolve to a node in the tree arena
    #[error("node #{node} is referenced but does not exist in the tree")]
    MissingNode { node: NodeId },

    /// A node is reachable along more than one path, so the links form a cycle
    /// or a shared subtree rather than a tree
    #[error("node #{node} is reached twice; the tree links loop back")]
    RevisitedNode { node: NodeId },
}

/// Errors returned by [`crate::playback::PlaybackController`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The operation is not allowed in the controller's current state
    #[error("cannot {operation} while {state}")]
    InvalidOperation {
        operation: &'static str,
        state: &'static str,
    },
}

/// Rejected user input for the data set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("please enter at least one number")]
    Empty,

    /// Every token that failed to parse or fell outside the allowed range
    #[error("invalid numbers: {}", .problems.join(", "))]
    Invalid { problems: Vec<String> },
}
