//! Main TUI application state and logic

use crate::algorithms::SortOrder;
use crate::errors::PlaybackError;
use crate::input::{self, Dataset, InputLimits};
use crate::playback::{PlaybackController, PlaybackState, StepOutcome};
use crate::registry::{self, AlgorithmKey, Family};
use crate::snapshot::{Highlight, SnapshotState};
use crate::tree::BinaryTree;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::panes::{self, InfoRenderData};

/// Algorithm picked by a single key press
fn algorithm_for_key(c: char) -> Option<AlgorithmKey> {
    match c {
        'b' => Some(AlgorithmKey::Bubble),
        'i' => Some(AlgorithmKey::Insertion),
        's' => Some(AlgorithmKey::Selection),
        'k' => Some(AlgorithmKey::Quick),
        'm' => Some(AlgorithmKey::Merge),
        'h' => Some(AlgorithmKey::Heap),
        '1' => Some(AlgorithmKey::InOrder),
        '2' => Some(AlgorithmKey::PreOrder),
        '3' => Some(AlgorithmKey::PostOrder),
        _ => None,
    }
}

/// The main application state
pub struct App {
    controller: PlaybackController,

    /// Array data for the sorts, kept while a tree is loaded
    numbers: Vec<i32>,

    /// Tree data for the traversals, kept while an array is loaded
    tree: Rc<BinaryTree>,

    limits: InputLimits,

    /// Direction used for the next sort selection
    order: SortOrder,

    /// Switch to autoplay as soon as a run starts
    autoplay_on_start: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a rejected operation or fault
    pub status_is_error: bool,

    /// When the current run started, and how long it took once it finished
    run_started: Option<Instant>,
    run_elapsed: Option<Duration>,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app around a controller holding the array data
    pub fn new(
        controller: PlaybackController,
        tree: Rc<BinaryTree>,
        limits: InputLimits,
        order: SortOrder,
    ) -> Self {
        let numbers = controller
            .dataset()
            .as_array()
            .map(<[i32]>::to_vec)
            .unwrap_or_default();
        App {
            controller,
            numbers,
            tree,
            limits,
            order,
            autoplay_on_start: false,
            should_quit: false,
            status_message: String::from("Choose an algorithm"),
            status_is_error: false,
            run_started: None,
            run_elapsed: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Select an algorithm by name before the UI starts
    pub fn preselect(&mut self, key: &str) -> Result<(), PlaybackError> {
        let key: AlgorithmKey = key.parse()?;
        self.select_algorithm(key)?;
        self.set_status(format!(
            "{} selected. Press Enter to start",
            registry::entry(key).name
        ));
        Ok(())
    }

    pub fn set_autoplay_on_start(&mut self, enabled: bool) {
        self.autoplay_on_start = enabled;
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn numbers(&self) -> &[i32] {
        &self.numbers
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Autoplay advances on the controller's own clock
            self.on_tick(Instant::now());

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Feed the autoplay clock
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(outcome) = self.controller.tick(now) {
            self.report(outcome);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => self.set_order(SortOrder::Ascending),
            KeyCode::Char('d') => self.set_order(SortOrder::Descending),
            KeyCode::Enter => self.start(),
            KeyCode::Right | KeyCode::Char('n') => self.step(),
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_autoplay();
                }
            }
            KeyCode::Char('e') => self.jump_to_end(),
            KeyCode::Char('g') => self.regenerate(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char(c) => {
                if let Some(algorithm) = algorithm_for_key(c) {
                    self.choose(algorithm);
                }
            }
            _ => {}
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Make sure the controller holds data the given family can run on
    fn load_family(&mut self, family: Family) {
        let dataset = match (family, self.controller.dataset()) {
            (Family::Sort, Dataset::Array(_)) | (Family::Traversal, Dataset::Tree(_)) => return,
            (Family::Sort, Dataset::Tree(_)) => Dataset::Array(self.numbers.clone()),
            (Family::Traversal, Dataset::Array(_)) => Dataset::Tree(self.tree.clone()),
        };
        debug!(data = dataset.kind(), "switching data set");
        self.controller.load_dataset(dataset);
    }

    fn select_algorithm(&mut self, key: AlgorithmKey) -> Result<(), PlaybackError> {
        let entry = registry::entry(key);
        if !self.controller.state().is_live() {
            self.load_family(entry.family);
        }
        self.controller.select_key(key, self.order)
    }

    fn choose(&mut self, key: AlgorithmKey) {
        match self.select_algorithm(key) {
            Ok(()) => {
                self.run_started = None;
                self.run_elapsed = None;
                self.set_status(format!(
                    "{} selected. Press Enter to start",
                    registry::entry(key).name
                ));
            }
            Err(e) => self.set_error(format!("Cannot choose: {} (press r to reset)", e)),
        }
    }

    fn set_order(&mut self, order: SortOrder) {
        self.order = order;
        let reselect = self
            .controller
            .selection()
            .filter(|s| s.entry.family == Family::Sort && !self.controller.state().is_live());

        match reselect {
            Some(selection) => match self.controller.select_key(selection.entry.key, order) {
                Ok(()) => self.set_status(format!("{} order. Press Enter to start", order)),
                Err(e) => self.set_error(e.to_string()),
            },
            None if self.controller.state().is_live() => {
                self.set_status(format!("{} order applies to the next run", order))
            }
            None => self.set_status(format!("{} order", order)),
        }
    }

    fn start(&mut self) {
        // A finished run restarts with the same choice
        if self.controller.state() == PlaybackState::Finished {
            if let Some(selection) = self.controller.selection() {
                let order = match selection.entry.family {
                    Family::Sort => self.order,
                    Family::Traversal => selection.order,
                };
                if let Err(e) = self.controller.select_key(selection.entry.key, order) {
                    self.set_error(e.to_string());
                    return;
                }
            }
        }

        if let Err(e) = self.controller.start() {
            let hint = match self.controller.state() {
                PlaybackState::Idle => " (choose an algorithm first)",
                _ => "",
            };
            self.set_error(format!("Cannot start: {}{}", e, hint));
            return;
        }

        self.run_started = Some(Instant::now());
        self.run_elapsed = None;
        let name = self.controller.entry().map_or("run", |entry| entry.name);
        self.set_status(format!("{} started", name));

        if self.autoplay_on_start {
            self.toggle_autoplay();
        }
    }

    fn step(&mut self) {
        match self.controller.step() {
            Ok(outcome) => self.report(outcome),
            Err(e) => self.set_error(format!("Cannot step: {}", e)),
        }
    }

    fn toggle_autoplay(&mut self) {
        match self.controller.toggle_autoplay() {
            Ok(PlaybackState::Autoplaying) => self.set_status("Playing..."),
            Ok(_) => self.set_status("Paused"),
            Err(e) => self.set_error(format!("Cannot play: {}", e)),
        }
    }

    fn jump_to_end(&mut self) {
        match self.controller.run_to_end() {
            Ok(pulled) => {
                self.freeze_elapsed();
                let last = self.controller.trace().last().unwrap_or("").to_string();
                if last.starts_with("Fault:") {
                    self.set_error(last);
                } else {
                    self.set_status(format!("Jumped to end ({} steps). {}", pulled, last));
                }
            }
            Err(e) => self.set_error(format!("Cannot jump: {}", e)),
        }
    }

    fn regenerate(&mut self) {
        self.numbers = input::random_numbers(&self.limits);
        info!(count = self.numbers.len(), "generated new random numbers");
        if self.controller.dataset().as_array().is_some() {
            self.controller
                .load_dataset(Dataset::Array(self.numbers.clone()));
            self.run_started = None;
            self.run_elapsed = None;
            self.set_status("New random numbers loaded");
        } else {
            self.set_status("New random numbers ready for the sorts");
        }
    }

    fn reset(&mut self) {
        self.controller.reset();
        self.run_started = None;
        self.run_elapsed = None;
        self.set_status("Reset. Choose an algorithm");
    }

    /// Update the status line from one pulled snapshot
    fn report(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Advanced => {
                let message = self
                    .controller
                    .last_snapshot()
                    .map(|s| s.trace_message.clone())
                    .unwrap_or_default();
                self.set_status(message);
            }
            StepOutcome::Finished => {
                self.freeze_elapsed();
                let message = self.controller.trace().last().unwrap_or("Done").to_string();
                self.set_status(message);
            }
            StepOutcome::Faulted(fault) => {
                self.freeze_elapsed();
                warn!(%fault, "run stopped by a fault");
                self.set_error(format!("Fault: {}", fault));
            }
        }
    }

    fn freeze_elapsed(&mut self) {
        self.run_elapsed = self.run_started.map(|started| started.elapsed());
    }

    fn elapsed(&self) -> Option<Duration> {
        if self.controller.state().is_live() {
            self.run_started.map(|started| started.elapsed())
        } else {
            self.run_elapsed
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        // Left column: visualization (top) | trace (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: info (top) | pseudo-code (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[1]);

        self.render_visualization(frame, left_rows[0]);

        panes::render_trace_pane(
            frame,
            left_rows[1],
            self.controller.trace(),
            self.controller.config().trace_visible,
        );

        let entry = self.controller.entry();
        let data_summary = match self.controller.dataset() {
            Dataset::Array(values) => format!("{} numbers", values.len()),
            Dataset::Tree(tree) => format!("tree of {} nodes", tree.len()),
        };
        panes::render_info_pane(
            frame,
            right_rows[0],
            &InfoRenderData {
                entry,
                order: self.order,
                state: self.controller.state(),
                steps: self.controller.steps_taken(),
                elapsed: self.elapsed(),
                data_summary,
            },
        );

        panes::render_code_pane(
            frame,
            right_rows[1],
            entry.map_or("Pseudo-code", |e| e.name),
            entry.map(|e| e.pseudo_code).unwrap_or_default(),
            self.controller.last_snapshot().and_then(|s| s.code_line),
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.controller.steps_taken(),
            self.controller.state(),
            self.status_is_error,
        );
    }

    /// Array bars or tree canvas, drawn from the latest snapshot when there is one
    fn render_visualization(&self, frame: &mut Frame, area: Rect) {
        let snapshot = self.controller.last_snapshot();
        match self.controller.dataset() {
            Dataset::Array(values) => match snapshot {
                Some(snapshot) => {
                    let current = match &snapshot.state {
                        SnapshotState::Array(current) => current.as_slice(),
                        SnapshotState::Tree { .. } => values.as_slice(),
                    };
                    panes::render_array_pane(
                        frame,
                        area,
                        current,
                        snapshot.highlight,
                        Some(snapshot.action),
                    );
                }
                None => panes::render_array_pane(frame, area, values, Highlight::None, None),
            },
            Dataset::Tree(tree) => match snapshot {
                Some(snapshot) => panes::render_tree_pane(
                    frame,
                    area,
                    tree,
                    snapshot.state.visited(),
                    snapshot.state.path(),
                    snapshot.highlight,
                    snapshot.action.edge(),
                ),
                None => panes::render_tree_pane(frame, area, tree, &[], &[], Highlight::None, None),
            },
        }
    }
}
