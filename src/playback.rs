//! Playback state machine
//!
//! [`PlaybackController`] is the single owner of the live step generator. It
//! decides when the next snapshot is produced, either on an explicit
//! [`step`](PlaybackController::step) or from [`tick`](PlaybackController::tick)
//! while autoplaying, and turns generator exhaustion (or a fault) into the
//! `Finished` state.
//!
//! ```text
//! Idle --select--> Ready --start--> Stepping <--toggle_autoplay--> Autoplaying
//!                    ^                  |                              |
//!                    |                  +--------- exhausted ----------+--> Finished
//!                    +-------------------------- select ---------------------+
//! any state --reset--> Idle
//! ```

use crate::algorithms::{SortOrder, StepGenerator};
use crate::config::PlaybackConfig;
use crate::errors::{GeneratorFault, PlaybackError};
use crate::input::Dataset;
use crate::registry::{self, AlgorithmEntry, AlgorithmKey, Family};
use crate::snapshot::{Snapshot, TraceLog};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// No algorithm chosen
    Idle,
    /// Algorithm and direction chosen, no generator yet
    Ready,
    /// Generator live, advanced by hand
    Stepping,
    /// Generator live, advanced on a timer
    Autoplaying,
    /// Generator exhausted or faulted
    Finished,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Ready => "ready",
            PlaybackState::Stepping => "stepping",
            PlaybackState::Autoplaying => "autoplaying",
            PlaybackState::Finished => "finished",
        }
    }

    /// Whether a generator is live in this state
    pub fn is_live(self) -> bool {
        matches!(self, PlaybackState::Stepping | PlaybackState::Autoplaying)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The chosen algorithm and sort direction
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub entry: &'static AlgorithmEntry,
    pub order: SortOrder,
}

/// Result of pulling one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new snapshot is available
    Advanced,
    /// The generator ran out; the controller is now `Finished`
    Finished,
    /// The generator failed; the controller is now `Finished`
    Faulted(GeneratorFault),
}

pub struct PlaybackController {
    config: PlaybackConfig,
    dataset: Dataset,
    selection: Option<Selection>,
    generator: Option<StepGenerator>,
    state: PlaybackState,
    last_snapshot: Option<Snapshot>,
    trace: TraceLog,
    /// When autoplay last advanced; `None` makes the next tick advance at once
    last_advance: Option<Instant>,
    steps_taken: usize,
}

impl PlaybackController {
    pub fn new(dataset: Dataset, config: PlaybackConfig) -> Self {
        let trace = TraceLog::new(config.trace_capacity);
        PlaybackController {
            config,
            dataset,
            selection: None,
            generator: None,
            state: PlaybackState::Idle,
            last_snapshot: None,
            trace,
            last_advance: None,
            steps_taken: 0,
        }
    }

    /// Choose an algorithm by its textual key
    pub fn select(&mut self, key: &str, order: SortOrder) -> Result<(), PlaybackError> {
        self.ensure_selectable()?;
        let entry = registry::lookup(key)?;
        self.apply_selection(entry, order);
        Ok(())
    }

    /// Choose an algorithm by key. Valid from `Idle`, `Ready` and `Finished`.
    pub fn select_key(&mut self, key: AlgorithmKey, order: SortOrder) -> Result<(), PlaybackError> {
        self.ensure_selectable()?;
        self.apply_selection(registry::entry(key), order);
        Ok(())
    }

    fn ensure_selectable(&self) -> Result<(), PlaybackError> {
        match self.state {
            PlaybackState::Idle | PlaybackState::Ready | PlaybackState::Finished => Ok(()),
            _ => Err(self.invalid("select an algorithm")),
        }
    }

    fn apply_selection(&mut self, entry: &'static AlgorithmEntry, order: SortOrder) {
        debug!(algorithm = entry.name, %order, "selected");
        self.selection = Some(Selection { entry, order });
        self.transition(PlaybackState::Ready);
    }

    /// Bind a fresh generator to the loaded data and begin stepping
    pub fn start(&mut self) -> Result<(), PlaybackError> {
        let selection = match (self.state, self.selection) {
            (PlaybackState::Ready, Some(selection)) => selection,
            _ => return Err(self.invalid("start")),
        };

        let generator = selection
            .entry
            .generator(&self.dataset, selection.order)?;

        self.generator = Some(generator);
        self.trace.clear();
        self.last_snapshot = None;
        self.last_advance = None;
        self.steps_taken = 0;
        info!(
            algorithm = selection.entry.name,
            order = %selection.order,
            data = self.dataset.kind(),
            "run started"
        );
        self.transition(PlaybackState::Stepping);
        Ok(())
    }

    /// Pull exactly one snapshot from the live generator
    pub fn step(&mut self) -> Result<StepOutcome, PlaybackError> {
        if !self.state.is_live() {
            return Err(self.invalid("step"));
        }
        let Some(generator) = self.generator.as_mut() else {
            return Err(self.invalid("step"));
        };

        match generator.next() {
            Some(Ok(snapshot)) => {
                self.steps_taken += 1;
                self.trace.push(snapshot.trace_message.clone());
                self.last_snapshot = Some(snapshot);
                Ok(StepOutcome::Advanced)
            }
            Some(Err(fault)) => {
                warn!(%fault, step = self.steps_taken, "generator fault");
                self.finish(format!("Fault: {}", fault));
                Ok(StepOutcome::Faulted(fault))
            }
            None => {
                let message = match self.selection.map(|s| s.entry.family) {
                    Some(Family::Traversal) => "Traversal finished",
                    _ => "Sorting complete!",
                };
                self.finish(message.to_string());
                Ok(StepOutcome::Finished)
            }
        }
    }

    fn finish(&mut self, message: String) {
        self.generator = None;
        self.trace.push(message);
        info!(steps = self.steps_taken, "run finished");
        self.transition(PlaybackState::Finished);
    }

    /// Flip between manual stepping and autoplay. Returns the new state.
    pub fn toggle_autoplay(&mut self) -> Result<PlaybackState, PlaybackError> {
        let next = match self.state {
            PlaybackState::Stepping if self.generator.is_some() => {
                // The first tick after enabling autoplay advances right away.
                self.last_advance = None;
                PlaybackState::Autoplaying
            }
            PlaybackState::Autoplaying => PlaybackState::Stepping,
            _ => return Err(self.invalid("toggle autoplay")),
        };
        self.transition(next);
        Ok(next)
    }

    /// Autoplay clock, called once per render-loop iteration with a monotonic
    /// reading. Advances at most one step, and only once the interval has
    /// elapsed since the previous autoplay advance.
    pub fn tick(&mut self, now: Instant) -> Option<StepOutcome> {
        if self.state != PlaybackState::Autoplaying {
            return None;
        }
        let due = self.last_advance.map_or(true, |last| {
            now.saturating_duration_since(last) >= self.config.autoplay_interval
        });
        if !due {
            return None;
        }
        self.last_advance = Some(now);
        self.step().ok()
    }

    /// Drain the live generator. Returns how many snapshots were pulled.
    pub fn run_to_end(&mut self) -> Result<usize, PlaybackError> {
        if !self.state.is_live() {
            return Err(self.invalid("jump to the end"));
        }
        let mut pulled = 0;
        while self.state.is_live() {
            if self.step()? == StepOutcome::Advanced {
                pulled += 1;
            }
        }
        Ok(pulled)
    }

    /// Drop the live generator and all progress, back to `Idle`. Always succeeds.
    pub fn reset(&mut self) {
        if self.generator.take().is_some() {
            debug!(steps = self.steps_taken, "discarding live generator");
        }
        self.selection = None;
        self.last_snapshot = None;
        self.last_advance = None;
        self.steps_taken = 0;
        self.trace.clear();
        self.transition(PlaybackState::Idle);
    }

    /// Replace the input data. Any live generator is discarded; the current
    /// selection, if any, is kept and the controller returns to `Ready`.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        self.generator = None;
        self.dataset = dataset;
        self.last_snapshot = None;
        self.last_advance = None;
        self.steps_taken = 0;
        self.trace.clear();
        let next = if self.selection.is_some() {
            PlaybackState::Ready
        } else {
            PlaybackState::Idle
        };
        self.transition(next);
    }

    fn transition(&mut self, to: PlaybackState) {
        if self.state != to {
            debug!(from = %self.state, %to, "playback transition");
            self.state = to;
        }
    }

    fn invalid(&self, operation: &'static str) -> PlaybackError {
        debug!(operation, state = %self.state, "rejected operation");
        PlaybackError::InvalidOperation {
            operation,
            state: self.state.label(),
        }
    }

    // ========== Getter methods for UI ==========

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn entry(&self) -> Option<&'static AlgorithmEntry> {
        self.selection.map(|s| s.entry)
    }

    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn is_autoplaying(&self) -> bool {
        self.state == PlaybackState::Autoplaying
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("selection", &self.selection)
            .field("steps_taken", &self.steps_taken)
            .field("has_generator", &self.generator.is_some())
            .finish_non_exhaustive()
    }
}
