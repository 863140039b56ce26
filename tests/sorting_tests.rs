// Snapshot sequences of the sorting step generators

use algotty::algorithms::sorting::{
    BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
};
use algotty::algorithms::{collect_steps, SortOrder, StepResult};
use algotty::input::Dataset;
use algotty::registry::{self, Family};
use algotty::snapshot::{Action, Highlight, MarkRole, Snapshot};

fn run(generator: impl Iterator<Item = StepResult>) -> Vec<Snapshot> {
    collect_steps(generator).expect("sorting generators never fault")
}

fn actions(steps: &[Snapshot]) -> Vec<Action> {
    steps.iter().map(|s| s.action).collect()
}

fn cmp(left: usize, right: usize) -> Action {
    Action::Compare { left, right }
}

fn swap(left: usize, right: usize) -> Action {
    Action::Swap { left, right }
}

fn mark(index: usize, role: MarkRole) -> Action {
    Action::Mark { index, role }
}

fn final_state(steps: &[Snapshot]) -> Vec<i32> {
    steps
        .last()
        .and_then(|s| s.state.as_array())
        .expect("array snapshot")
        .to_vec()
}

#[test]
fn test_bubble_first_three_snapshots() {
    let steps = run(BubbleSort::new(&[5, 3, 8, 4, 2], SortOrder::Ascending));

    assert_eq!(steps[0].action, Action::Compare { left: 0, right: 1 });
    assert_eq!(steps[0].highlight, Highlight::Two(0, 1));
    assert_eq!(steps[0].trace_message, "Comparing 5 and 3");
    assert_eq!(steps[0].state.as_array(), Some(&[5, 3, 8, 4, 2][..]));

    assert_eq!(steps[1].action, Action::Swap { left: 0, right: 1 });
    assert_eq!(steps[1].state.as_array(), Some(&[3, 5, 8, 4, 2][..]));

    assert_eq!(steps[2].action, Action::Compare { left: 1, right: 2 });
    assert_eq!(steps[2].trace_message, "Comparing 5 and 8");
    assert_eq!(steps[3].action, Action::Compare { left: 2, right: 3 });

    assert_eq!(final_state(&steps), vec![2, 3, 4, 5, 8]);
}

#[test]
fn test_bubble_stops_after_clean_pass() {
    let steps = run(BubbleSort::new(&[1, 2, 3, 4], SortOrder::Ascending));
    assert_eq!(
        actions(&steps),
        vec![
            Action::Compare { left: 0, right: 1 },
            Action::Compare { left: 1, right: 2 },
            Action::Compare { left: 2, right: 3 },
            Action::Done,
        ]
    );
}

#[test]
fn test_bubble_descending() {
    let steps = run(BubbleSort::new(&[1, 3, 2], SortOrder::Descending));
    assert_eq!(final_state(&steps), vec![3, 2, 1]);
}

#[test]
fn test_insertion_marks_shifts_and_places() {
    let steps = run(InsertionSort::new(&[3, 1, 2], SortOrder::Ascending));
    assert_eq!(
        actions(&steps),
        vec![
            Action::Mark {
                index: 1,
                role: MarkRole::Key
            },
            Action::Shift { from: 0, to: 1 },
            Action::Assign { index: 0 },
            Action::Mark {
                index: 2,
                role: MarkRole::Key
            },
            Action::Shift { from: 1, to: 2 },
            Action::Assign { index: 1 },
            Action::Done,
        ]
    );
    assert_eq!(steps[1].state.as_array(), Some(&[3, 3, 2][..]));
    assert_eq!(steps[2].state.as_array(), Some(&[1, 3, 2][..]));
    assert_eq!(steps[0].trace_message, "Inserting 1");
    assert_eq!(final_state(&steps), vec![1, 2, 3]);
}

#[test]
fn test_selection_scans_then_swaps() {
    let steps = run(SelectionSort::new(&[3, 1, 2], SortOrder::Ascending));
    assert_eq!(
        actions(&steps),
        vec![
            mark(0, MarkRole::Candidate),
            cmp(0, 1),
            cmp(0, 2),
            swap(0, 1),
            mark(1, MarkRole::Candidate),
            cmp(1, 2),
            swap(1, 2),
            mark(2, MarkRole::Candidate),
            Action::Done,
        ]
    );
    // Scan compares highlight the outer index, not the running best
    assert_eq!(steps[2].highlight, Highlight::Two(0, 2));
    assert_eq!(steps[2].trace_message, "Comparing 2 with candidate 1");
    assert_eq!(steps[7].highlight, Highlight::One(2));
    assert_eq!(final_state(&steps), vec![1, 2, 3]);
}

#[test]
fn test_selection_skips_swap_when_in_place() {
    let steps = run(SelectionSort::new(&[1, 2], SortOrder::Ascending));
    assert_eq!(
        actions(&steps),
        vec![
            mark(0, MarkRole::Candidate),
            cmp(0, 1),
            mark(1, MarkRole::Candidate),
            Action::Done,
        ]
    );
}

#[test]
fn test_quick_partition_sequence() {
    let steps = run(QuickSort::new(&[3, 1, 2], SortOrder::Ascending));
    assert_eq!(
        actions(&steps),
        vec![
            Action::Mark {
                index: 2,
                role: MarkRole::Pivot
            },
            Action::Compare { left: 0, right: 2 },
            Action::Compare { left: 1, right: 2 },
            Action::Swap { left: 0, right: 1 },
            Action::Swap { left: 1, right: 2 },
            Action::Done,
        ]
    );
    assert_eq!(steps[3].state.as_array(), Some(&[1, 3, 2][..]));
    assert_eq!(final_state(&steps), vec![1, 2, 3]);
}

#[test]
fn test_quick_descending_with_equal_keys() {
    let steps = run(QuickSort::new(&[4, 9, 1, 7, 7, 3], SortOrder::Descending));
    assert_eq!(
        actions(&steps),
        vec![
            mark(5, MarkRole::Pivot),
            cmp(0, 5),
            swap(0, 0),
            cmp(1, 5),
            swap(1, 1),
            cmp(2, 5),
            cmp(3, 5),
            swap(2, 3),
            cmp(4, 5),
            swap(3, 4),
            swap(4, 5),
            mark(3, MarkRole::Pivot),
            cmp(0, 3),
            cmp(1, 3),
            swap(0, 1),
            // 7 against pivot 7 still moves when descending
            cmp(2, 3),
            swap(1, 2),
            swap(2, 3),
            mark(1, MarkRole::Pivot),
            cmp(0, 1),
            swap(0, 0),
            swap(1, 1),
            Action::Done,
        ]
    );
    assert_eq!(steps[10].state.as_array(), Some(&[4, 9, 7, 7, 3, 1][..]));
    assert_eq!(steps[17].state.as_array(), Some(&[9, 7, 7, 4, 3, 1][..]));
    assert_eq!(final_state(&steps), vec![9, 7, 7, 4, 3, 1]);
}

#[test]
fn test_merge_compares_then_writes() {
    let steps = run(MergeSort::new(&[2, 1], SortOrder::Ascending));
    assert_eq!(
        actions(&steps),
        vec![
            Action::Compare { left: 0, right: 1 },
            Action::Assign { index: 0 },
            Action::Assign { index: 1 },
            Action::Done,
        ]
    );
    assert_eq!(steps[1].state.as_array(), Some(&[1, 1][..]));
    assert_eq!(steps[2].trace_message, "Copied 2 to index 1");
    assert_eq!(final_state(&steps), vec![1, 2]);
}

#[test]
fn test_merge_three_elements() {
    let steps = run(MergeSort::new(&[3, 1, 2], SortOrder::Ascending));
    assert_eq!(
        actions(&steps),
        vec![
            cmp(0, 1),
            Action::Assign { index: 0 },
            Action::Assign { index: 1 },
            cmp(0, 2),
            Action::Assign { index: 0 },
            cmp(1, 2),
            Action::Assign { index: 1 },
            Action::Assign { index: 2 },
            Action::Done,
        ]
    );
    let states: Vec<&[i32]> = steps.iter().filter_map(|s| s.state.as_array()).collect();
    assert_eq!(
        states,
        vec![
            &[3, 1, 2][..],
            &[1, 1, 2][..],
            &[1, 3, 2][..],
            &[1, 3, 2][..],
            &[1, 3, 2][..],
            &[1, 3, 2][..],
            &[1, 2, 2][..],
            &[1, 2, 3][..],
            &[1, 2, 3][..],
        ]
    );
}

#[test]
fn test_merge_single_element() {
    let steps = run(MergeSort::new(&[1], SortOrder::Ascending));
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].state.as_array(), Some(&[1][..]));
    assert_eq!(steps[0].highlight, Highlight::None);
    assert!(steps[0].is_terminal());
}

#[test]
fn test_heap_build_then_extract() {
    let steps = run(HeapSort::new(&[1, 3, 2], SortOrder::Ascending));
    assert_eq!(
        actions(&steps),
        vec![
            // build: sift root 0
            cmp(0, 1),
            cmp(0, 2),
            swap(0, 1),
            // extract into slot 2, then slot 1
            swap(0, 2),
            cmp(0, 1),
            swap(0, 1),
            Action::Done,
        ]
    );
    // The right-child compare highlights the sift root
    assert_eq!(steps[1].highlight, Highlight::Two(0, 2));
    assert_eq!(steps[2].state.as_array(), Some(&[3, 1, 2][..]));
    assert_eq!(steps[3].state.as_array(), Some(&[2, 1, 3][..]));
    assert_eq!(final_state(&steps), vec![1, 2, 3]);
}

#[test]
fn test_heap_descending_with_equal_keys() {
    let steps = run(HeapSort::new(&[4, 9, 1, 7, 7, 3], SortOrder::Descending));
    assert_eq!(
        actions(&steps),
        vec![
            cmp(2, 5),
            cmp(1, 3),
            cmp(1, 4),
            swap(1, 4),
            cmp(0, 1),
            cmp(0, 2),
            swap(0, 2),
            cmp(2, 5),
            swap(2, 5),
            swap(0, 5),
            cmp(0, 1),
            cmp(0, 2),
            swap(0, 2),
            swap(0, 4),
            cmp(0, 1),
            cmp(0, 2),
            swap(0, 2),
            swap(0, 3),
            cmp(0, 1),
            cmp(0, 2),
            swap(0, 1),
            swap(0, 2),
            cmp(0, 1),
            swap(0, 1),
            swap(0, 1),
            Action::Done,
        ]
    );
    // Heap built: a min-heap for descending order
    assert_eq!(steps[8].state.as_array(), Some(&[1, 7, 3, 7, 9, 4][..]));
    // Equal children: the right one still wins
    assert_eq!(steps[3].state.as_array(), Some(&[4, 7, 1, 7, 9, 3][..]));
    // Index 1 is the running best here; the right compare still shows the root
    assert_eq!(steps[15].highlight, Highlight::Two(0, 2));
    assert_eq!(final_state(&steps), vec![9, 7, 7, 4, 3, 1]);
}

#[test]
fn test_heap_sort_both_directions() {
    let input = [12, 11, 13, 5, 6, 7, 5];
    let up = run(HeapSort::new(&input, SortOrder::Ascending));
    assert_eq!(final_state(&up), vec![5, 5, 6, 7, 11, 12, 13]);
    let down = run(HeapSort::new(&input, SortOrder::Descending));
    assert_eq!(final_state(&down), vec![13, 12, 11, 7, 6, 5, 5]);

    // Every exchange is preceded by at least one comparison
    assert!(matches!(up[0].action, Action::Compare { .. }));
}

#[test]
fn test_short_inputs_yield_one_terminal_snapshot() {
    for entry in registry::entries().iter().filter(|e| e.family == Family::Sort) {
        for input in [vec![], vec![7]] {
            let data: Dataset = input.clone().into();
            let mut generator = entry
                .generator(&data, SortOrder::Ascending)
                .expect("array data");
            let first = generator
                .next()
                .expect("one snapshot")
                .expect("no fault");
            assert!(first.is_terminal(), "{} on {:?}", entry.name, input);
            assert_eq!(first.state.as_array(), Some(input.as_slice()));
            assert_eq!(first.code_line, None);
            assert!(generator.next().is_none(), "{} not exhausted", entry.name);
            assert!(generator.next().is_none(), "{} not fused", entry.name);
        }
    }
}

#[test]
fn test_code_lines_point_into_listing() {
    let data: Dataset = vec![9, 4, 7, 1, 8, 2, 2, 6].into();
    for entry in registry::entries().iter().filter(|e| e.family == Family::Sort) {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let steps = run(entry.generator(&data, order).expect("array data"));
            let (last, body) = steps.split_last().expect("non-empty");
            assert!(last.is_terminal());
            for step in body {
                assert!(!step.is_terminal(), "{}: Done before the end", entry.name);
                let line = step.code_line.expect("code line on every event");
                assert!(line < entry.pseudo_code.len(), "{}: line {}", entry.name, line);
            }
        }
    }
}
