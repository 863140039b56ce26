// Playback controller state machine

use std::rc::Rc;
use std::time::{Duration, Instant};

use algotty::algorithms::SortOrder;
use algotty::config::PlaybackConfig;
use algotty::errors::{PlaybackError, SelectionError};
use algotty::input::Dataset;
use algotty::playback::{PlaybackController, PlaybackState, StepOutcome};
use algotty::snapshot::Action;
use algotty::tree::{BinaryTree, NodeId, TreeNode};

fn controller(values: &[i32]) -> PlaybackController {
    PlaybackController::new(Dataset::Array(values.to_vec()), PlaybackConfig::default())
}

fn tree_controller(tree: BinaryTree) -> PlaybackController {
    PlaybackController::new(Dataset::Tree(Rc::new(tree)), PlaybackConfig::default())
}

fn invalid(operation: &'static str, state: &'static str) -> PlaybackError {
    PlaybackError::InvalidOperation { operation, state }
}

#[test]
fn test_step_without_generator_is_rejected() {
    let mut c = controller(&[5, 3, 8]);
    assert_eq!(c.state(), PlaybackState::Idle);
    assert_eq!(c.step(), Err(invalid("step", "idle")));
    assert!(c.last_snapshot().is_none());

    c.select("bubble", SortOrder::Ascending).unwrap();
    assert_eq!(c.state(), PlaybackState::Ready);
    assert_eq!(c.step(), Err(invalid("step", "ready")));
    assert!(c.last_snapshot().is_none());
    assert!(c.trace().is_empty());
}

#[test]
fn test_unknown_algorithm_leaves_state_alone() {
    let mut c = controller(&[1, 2]);
    let err = c.select("bogosort", SortOrder::Ascending).unwrap_err();
    assert_eq!(
        err,
        PlaybackError::Selection(SelectionError::UnknownAlgorithm {
            key: "bogosort".to_string()
        })
    );
    assert_eq!(c.state(), PlaybackState::Idle);
    assert!(c.selection().is_none());
}

#[test]
fn test_start_only_from_ready() {
    let mut c = controller(&[2, 1]);
    assert_eq!(c.start(), Err(invalid("start", "idle")));

    c.select("insertion", SortOrder::Ascending).unwrap();
    c.start().unwrap();
    assert_eq!(c.state(), PlaybackState::Stepping);
    assert!(c.has_generator());
    assert_eq!(c.start(), Err(invalid("start", "stepping")));
}

#[test]
fn test_stepping_to_completion() {
    let mut c = controller(&[5, 3, 8, 4, 2]);
    c.select("bubble", SortOrder::Ascending).unwrap();
    c.start().unwrap();

    assert_eq!(c.step(), Ok(StepOutcome::Advanced));
    let first = c.last_snapshot().unwrap();
    assert_eq!(first.action, Action::Compare { left: 0, right: 1 });
    assert_eq!(c.trace().last(), Some("Comparing 5 and 3"));
    assert_eq!(c.steps_taken(), 1);

    let mut guard = 0;
    loop {
        match c.step().unwrap() {
            StepOutcome::Advanced => {}
            StepOutcome::Finished => break,
            StepOutcome::Faulted(fault) => panic!("unexpected fault: {}", fault),
        }
        guard += 1;
        assert!(guard < 1_000, "bubble sort never finished");
    }

    assert_eq!(c.state(), PlaybackState::Finished);
    assert!(!c.has_generator());
    assert_eq!(c.trace().last(), Some("Sorting complete!"));
    let last = c.last_snapshot().unwrap();
    assert!(last.is_terminal());
    assert_eq!(last.state.as_array(), Some(&[2, 3, 4, 5, 8][..]));

    assert_eq!(c.step(), Err(invalid("step", "finished")));
}

#[test]
fn test_run_to_end_counts_snapshots() {
    let mut c = controller(&[2, 1]);
    assert_eq!(c.run_to_end(), Err(invalid("jump to the end", "idle")));

    c.select("bubble", SortOrder::Ascending).unwrap();
    c.start().unwrap();
    // compare, swap, done
    assert_eq!(c.run_to_end(), Ok(3));
    assert_eq!(c.state(), PlaybackState::Finished);
    assert_eq!(c.steps_taken(), 3);
}

#[test]
fn test_traversal_completion_entry() {
    let mut c = tree_controller(BinaryTree::sample());
    c.select("PreOrder", SortOrder::Ascending).unwrap();
    c.start().unwrap();
    c.run_to_end().unwrap();
    let entries: Vec<&str> = c.trace().recent(2).collect();
    assert_eq!(
        entries,
        vec![
            "Pre-order traversal: 50, 30, 20, 40, 70, 60, 90",
            "Traversal finished"
        ]
    );
}

#[test]
fn test_reset_is_idempotent() {
    let mut c = controller(&[3, 2, 1]);
    c.select("heap", SortOrder::Descending).unwrap();
    c.start().unwrap();
    c.step().unwrap();

    c.reset();
    assert_eq!(c.state(), PlaybackState::Idle);
    assert!(c.selection().is_none());
    assert!(c.last_snapshot().is_none());
    assert!(c.trace().is_empty());
    assert!(!c.has_generator());

    c.reset();
    assert_eq!(c.state(), PlaybackState::Idle);
}

#[test]
fn test_select_rejected_while_running() {
    let mut c = controller(&[3, 2, 1]);
    c.select("quick", SortOrder::Ascending).unwrap();
    c.start().unwrap();
    assert_eq!(
        c.select("merge", SortOrder::Ascending),
        Err(invalid("select an algorithm", "stepping"))
    );
    assert_eq!(c.entry().map(|e| e.name), Some("Quick Sort"));

    c.run_to_end().unwrap();
    c.select("merge", SortOrder::Descending).unwrap();
    assert_eq!(c.state(), PlaybackState::Ready);
}

#[test]
fn test_wrong_dataset_fails_at_start() {
    let mut c = controller(&[3, 2, 1]);
    c.select("inorder", SortOrder::Ascending).unwrap();
    let err = c.start().unwrap_err();
    assert!(matches!(
        err,
        PlaybackError::Selection(SelectionError::DatasetMismatch {
            expected: "tree",
            found: "array",
            ..
        })
    ));
    assert_eq!(c.state(), PlaybackState::Ready);
    assert!(!c.has_generator());
}

#[test]
fn test_toggle_autoplay() {
    let mut c = controller(&[3, 2, 1]);
    assert_eq!(c.toggle_autoplay(), Err(invalid("toggle autoplay", "idle")));

    c.select("selection", SortOrder::Ascending).unwrap();
    assert_eq!(c.toggle_autoplay(), Err(invalid("toggle autoplay", "ready")));

    c.start().unwrap();
    assert_eq!(c.toggle_autoplay(), Ok(PlaybackState::Autoplaying));
    assert!(c.is_autoplaying());
    assert_eq!(c.toggle_autoplay(), Ok(PlaybackState::Stepping));

    c.run_to_end().unwrap();
    assert_eq!(
        c.toggle_autoplay(),
        Err(invalid("toggle autoplay", "finished"))
    );
}

#[test]
fn test_autoplay_cadence() {
    let mut c = controller(&[9, 8, 7, 6, 5, 4, 3, 2, 1]);
    c.select("bubble", SortOrder::Ascending).unwrap();
    c.start().unwrap();

    let t0 = Instant::now();
    // Not autoplaying yet
    assert_eq!(c.tick(t0), None);

    c.toggle_autoplay().unwrap();
    assert_eq!(c.tick(t0), Some(StepOutcome::Advanced));
    assert_eq!(c.steps_taken(), 1);

    assert_eq!(c.tick(t0 + Duration::from_millis(100)), None);
    assert_eq!(c.tick(t0 + Duration::from_millis(599)), None);
    assert_eq!(c.tick(t0 + Duration::from_millis(600)), Some(StepOutcome::Advanced));
    assert_eq!(c.steps_taken(), 2);

    // A long gap still advances only once
    assert_eq!(c.tick(t0 + Duration::from_secs(10)), Some(StepOutcome::Advanced));
    assert_eq!(c.steps_taken(), 3);
    assert_eq!(c.tick(t0 + Duration::from_secs(10)), None);
}

#[test]
fn test_autoplay_ends_in_finished() {
    let mut c = controller(&[2, 1]);
    c.select("bubble", SortOrder::Ascending).unwrap();
    c.start().unwrap();
    c.toggle_autoplay().unwrap();

    let t0 = Instant::now();
    let interval = c.config().autoplay_interval;
    let mut outcomes = Vec::new();
    for i in 0..10 {
        if let Some(outcome) = c.tick(t0 + interval * i) {
            outcomes.push(outcome);
        }
    }
    assert_eq!(
        outcomes,
        vec![
            StepOutcome::Advanced,
            StepOutcome::Advanced,
            StepOutcome::Advanced,
            StepOutcome::Finished
        ]
    );
    assert_eq!(c.state(), PlaybackState::Finished);
    assert!(!c.is_autoplaying());
}

#[test]
fn test_fault_finishes_run_with_trace_entry() {
    let nodes = vec![TreeNode {
        value: 4,
        left: None,
        right: Some(NodeId(3)),
    }];
    let mut c = tree_controller(BinaryTree::from_parts(nodes, Some(NodeId(0))));
    c.select("inorder", SortOrder::Ascending).unwrap();
    c.start().unwrap();

    // visit, descend right, then the fault
    assert_eq!(c.run_to_end(), Ok(2));
    assert_eq!(c.state(), PlaybackState::Finished);
    let last = c.trace().last().unwrap();
    assert!(last.starts_with("Fault:"), "{}", last);
    assert!(last.contains("#3"), "{}", last);
    assert!(!c.has_generator());
}

#[test]
fn test_fault_outcome_from_step() {
    let nodes = vec![TreeNode {
        value: 4,
        left: Some(NodeId(7)),
        right: None,
    }];
    let mut c = tree_controller(BinaryTree::from_parts(nodes, Some(NodeId(0))));
    c.select("postorder", SortOrder::Ascending).unwrap();
    c.start().unwrap();

    assert_eq!(c.step(), Ok(StepOutcome::Advanced));
    assert!(matches!(c.step(), Ok(StepOutcome::Faulted(_))));
    assert_eq!(c.state(), PlaybackState::Finished);
}

#[test]
fn test_load_dataset_discards_run() {
    let mut c = controller(&[3, 1, 2]);
    c.load_dataset(Dataset::Array(vec![9, 9]));
    assert_eq!(c.state(), PlaybackState::Idle);

    c.select("merge", SortOrder::Ascending).unwrap();
    c.start().unwrap();
    c.step().unwrap();

    c.load_dataset(Dataset::Tree(Rc::new(BinaryTree::sample())));
    assert_eq!(c.state(), PlaybackState::Ready);
    assert!(!c.has_generator());
    assert!(c.last_snapshot().is_none());
    assert_eq!(c.steps_taken(), 0);
    assert_eq!(c.dataset().kind(), "tree");
}

#[test]
fn test_trace_is_capped() {
    let config = PlaybackConfig {
        trace_capacity: 3,
        ..PlaybackConfig::default()
    };
    let mut c = PlaybackController::new(Dataset::Array(vec![5, 4, 3, 2, 1]), config);
    c.select("bubble", SortOrder::Ascending).unwrap();
    c.start().unwrap();
    c.run_to_end().unwrap();
    assert_eq!(c.trace().len(), 3);
    assert_eq!(c.trace().last(), Some("Sorting complete!"));
}

#[test]
fn test_start_after_reselect_replays_identically() {
    let mut c = controller(&[4, 1, 3, 2]);
    c.select("quick", SortOrder::Ascending).unwrap();
    c.start().unwrap();
    c.run_to_end().unwrap();
    let first: Vec<String> = c.trace().iter().map(str::to_string).collect();

    c.select("quick", SortOrder::Ascending).unwrap();
    c.start().unwrap();
    assert!(c.trace().is_empty());
    c.run_to_end().unwrap();
    let second: Vec<String> = c.trace().iter().map(str::to_string).collect();
    assert_eq!(first, second);
}

#[test]
fn test_run_to_end_stops_on_looping_tree() {
    let nodes = vec![TreeNode {
        value: 8,
        left: Some(NodeId(0)),
        right: None,
    }];
    let mut c = tree_controller(BinaryTree::from_parts(nodes, Some(NodeId(0))));
    c.select("preorder", SortOrder::Ascending).unwrap();
    c.start().unwrap();

    // visit, descend left back onto itself, then the fault
    assert_eq!(c.run_to_end(), Ok(2));
    assert_eq!(c.state(), PlaybackState::Finished);
    let last = c.trace().last().unwrap();
    assert!(last.starts_with("Fault:"), "{}", last);
    assert!(last.contains("reached twice"), "{}", last);
}
