//! Static table of every algorithm the visualizer can run
//!
//! A lookup is pure: it hands out `&'static` entries that can be shared by any
//! number of sessions. Each entry knows how to bind a fresh generator to a data
//! set, its pseudo-code listing, and its time-complexity label.

use crate::algorithms::sorting::{
    BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort, BUBBLE_CODE,
    HEAP_CODE, INSERTION_CODE, MERGE_CODE, QUICK_CODE, SELECTION_CODE,
};
use crate::algorithms::traversal::{
    Traversal, TraversalOrder, INORDER_CODE, POSTORDER_CODE, PREORDER_CODE,
};
use crate::algorithms::{SortOrder, StepGenerator};
use crate::errors::SelectionError;
use crate::input::Dataset;
use std::fmt;
use std::str::FromStr;

/// Selection key for an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKey {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
    InOrder,
    PreOrder,
    PostOrder,
}

impl AlgorithmKey {
    pub const ALL: [AlgorithmKey; 9] = [
        AlgorithmKey::Bubble,
        AlgorithmKey::Insertion,
        AlgorithmKey::Selection,
        AlgorithmKey::Quick,
        AlgorithmKey::Merge,
        AlgorithmKey::Heap,
        AlgorithmKey::InOrder,
        AlgorithmKey::PreOrder,
        AlgorithmKey::PostOrder,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKey::Bubble => "bubble",
            AlgorithmKey::Insertion => "insertion",
            AlgorithmKey::Selection => "selection",
            AlgorithmKey::Quick => "quick",
            AlgorithmKey::Merge => "merge",
            AlgorithmKey::Heap => "heap",
            AlgorithmKey::InOrder => "inorder",
            AlgorithmKey::PreOrder => "preorder",
            AlgorithmKey::PostOrder => "postorder",
        }
    }
}

impl fmt::Display for AlgorithmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKey {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AlgorithmKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| SelectionError::UnknownAlgorithm { key: s.to_string() })
    }
}

/// What kind of data an algorithm runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Sort,
    Traversal,
}

impl Family {
    fn data_kind(self) -> &'static str {
        match self {
            Family::Sort => "array",
            Family::Traversal => "tree",
        }
    }
}

/// Binds a new generator to a data set
pub type GeneratorFactory = fn(&Dataset, SortOrder) -> Result<StepGenerator, SelectionError>;

/// Everything the visualizer needs to know about one algorithm
pub struct AlgorithmEntry {
    pub key: AlgorithmKey,
    pub name: &'static str,
    pub family: Family,
    pub pseudo_code: &'static [&'static str],
    pub complexity: &'static str,
    pub factory: GeneratorFactory,
}

impl AlgorithmEntry {
    /// Create a fresh generator over `data`
    pub fn generator(
        &self,
        data: &Dataset,
        order: SortOrder,
    ) -> Result<StepGenerator, SelectionError> {
        (self.factory)(data, order)
    }

    fn mismatch(&self, data: &Dataset) -> SelectionError {
        SelectionError::DatasetMismatch {
            algorithm: self.name,
            expected: self.family.data_kind(),
            found: data.kind(),
        }
    }
}

impl fmt::Debug for AlgorithmEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmEntry")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

macro_rules! sort_factory {
    ($generator:ident, $key:expr) => {
        |data: &Dataset, order: SortOrder| -> Result<StepGenerator, SelectionError> {
            match data.as_array() {
                Some(values) => {
                    let generator: StepGenerator = Box::new($generator::new(values, order));
                    Ok(generator)
                }
                None => Err(entry($key).mismatch(data)),
            }
        }
    };
}

macro_rules! traversal_factory {
    ($order:expr, $key:expr) => {
        |data: &Dataset, _order: SortOrder| -> Result<StepGenerator, SelectionError> {
            match data.as_tree() {
                Some(tree) => {
                    let generator: StepGenerator = Box::new(Traversal::new(tree.clone(), $order));
                    Ok(generator)
                }
                None => Err(entry($key).mismatch(data)),
            }
        }
    };
}

static ENTRIES: [AlgorithmEntry; 9] = [
    AlgorithmEntry {
        key: AlgorithmKey::Bubble,
        name: "Bubble Sort",
        family: Family::Sort,
        pseudo_code: BUBBLE_CODE,
        complexity: "O(n²) - Worst/Average, O(n) - Best",
        factory: sort_factory!(BubbleSort, AlgorithmKey::Bubble),
    },
    AlgorithmEntry {
        key: AlgorithmKey::Insertion,
        name: "Insertion Sort",
        family: Family::Sort,
        pseudo_code: INSERTION_CODE,
        complexity: "O(n²) - Worst/Average, O(n) - Best",
        factory: sort_factory!(InsertionSort, AlgorithmKey::Insertion),
    },
    AlgorithmEntry {
        key: AlgorithmKey::Selection,
        name: "Selection Sort",
        family: Family::Sort,
        pseudo_code: SELECTION_CODE,
        complexity: "O(n²) - All cases",
        factory: sort_factory!(SelectionSort, AlgorithmKey::Selection),
    },
    AlgorithmEntry {
        key: AlgorithmKey::Quick,
        name: "Quick Sort",
        family: Family::Sort,
        pseudo_code: QUICK_CODE,
        complexity: "O(n log n) - Average, O(n²) - Worst",
        factory: sort_factory!(QuickSort, AlgorithmKey::Quick),
    },
    AlgorithmEntry {
        key: AlgorithmKey::Merge,
        name: "Merge Sort",
        family: Family::Sort,
        pseudo_code: MERGE_CODE,
        complexity: "O(n log n) - All cases",
        factory: sort_factory!(MergeSort, AlgorithmKey::Merge),
    },
    AlgorithmEntry {
        key: AlgorithmKey::Heap,
        name: "Heap Sort",
        family: Family::Sort,
        pseudo_code: HEAP_CODE,
        complexity: "O(n log n) - All cases",
        factory: sort_factory!(HeapSort, AlgorithmKey::Heap),
    },
    AlgorithmEntry {
        key: AlgorithmKey::InOrder,
        name: "In-order Traversal",
        family: Family::Traversal,
        pseudo_code: INORDER_CODE,
        complexity: "O(n) - All cases",
        factory: traversal_factory!(TraversalOrder::InOrder, AlgorithmKey::InOrder),
    },
    AlgorithmEntry {
        key: AlgorithmKey::PreOrder,
        name: "Pre-order Traversal",
        family: Family::Traversal,
        pseudo_code: PREORDER_CODE,
        complexity: "O(n) - All cases",
        factory: traversal_factory!(TraversalOrder::PreOrder, AlgorithmKey::PreOrder),
    },
    AlgorithmEntry {
        key: AlgorithmKey::PostOrder,
        name: "Post-order Traversal",
        family: Family::Traversal,
        pseudo_code: POSTORDER_CODE,
        complexity: "O(n) - All cases",
        factory: traversal_factory!(TraversalOrder::PostOrder, AlgorithmKey::PostOrder),
    },
];

/// The registry entry for `key`
pub fn entry(key: AlgorithmKey) -> &'static AlgorithmEntry {
    // ENTRIES is laid out in the same order as AlgorithmKey::ALL
    &ENTRIES[key as usize]
}

/// Resolve a textual key such as `"bubble"` or `"preorder"`
pub fn lookup(key: &str) -> Result<&'static AlgorithmEntry, SelectionError> {
    key.parse::<AlgorithmKey>().map(entry)
}

/// All entries, in menu order
pub fn entries() -> &'static [AlgorithmEntry] {
    &ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_line_up_with_keys() {
        for key in AlgorithmKey::ALL {
            assert_eq!(entry(key).key, key);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("Bubble").unwrap().key, AlgorithmKey::Bubble);
        assert_eq!(lookup(" preorder ").unwrap().key, AlgorithmKey::PreOrder);
    }

    #[test]
    fn unknown_key_is_selection_error() {
        let err = lookup("bogo").unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownAlgorithm {
                key: "bogo".to_string()
            }
        );
    }

    #[test]
    fn factory_rejects_wrong_data() {
        let data = Dataset::Array(vec![3, 1, 2]);
        let err = entry(AlgorithmKey::InOrder)
            .generator(&data, SortOrder::Ascending)
            .err()
            .unwrap();
        assert!(matches!(err, SelectionError::DatasetMismatch { found: "array", .. }));
    }
}
