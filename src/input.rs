//! Initial data for a playback session
//!
//! The generators trust their input completely, so everything is checked here:
//! number lists are parsed from free text (spaces and/or commas), each value is
//! range-checked, and over-long lists are truncated. An empty list means "give me
//! random numbers".

use crate::errors::InputError;
use crate::tree::BinaryTree;
use rand::Rng;
use std::ops::RangeInclusive;
use std::rc::Rc;
use tracing::{debug, warn};

/// Bounds enforced on user-supplied arrays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLimits {
    pub max_count: usize,
    pub allowed: RangeInclusive<i32>,
    /// How many values a random data set has
    pub random_count: usize,
    pub random_range: RangeInclusive<i32>,
}

impl Default for InputLimits {
    fn default() -> Self {
        InputLimits {
            max_count: 25,
            allowed: 1..=1000,
            random_count: 25,
            random_range: 5..=100,
        }
    }
}

/// The data a generator is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    Array(Vec<i32>),
    Tree(Rc<BinaryTree>),
}

impl Dataset {
    pub fn kind(&self) -> &'static str {
        match self {
            Dataset::Array(_) => "array",
            Dataset::Tree(_) => "tree",
        }
    }

    pub fn as_array(&self) -> Option<&[i32]> {
        match self {
            Dataset::Array(values) => Some(values),
            Dataset::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Rc<BinaryTree>> {
        match self {
            Dataset::Tree(tree) => Some(tree),
            Dataset::Array(_) => None,
        }
    }
}

impl From<Vec<i32>> for Dataset {
    fn from(values: Vec<i32>) -> Self {
        Dataset::Array(values)
    }
}

impl From<BinaryTree> for Dataset {
    fn from(tree: BinaryTree) -> Self {
        Dataset::Tree(Rc::new(tree))
    }
}

/// Parse a list of integers separated by whitespace and/or commas.
///
/// All bad tokens are reported together. A list longer than
/// `limits.max_count` is cut down to its first `max_count` values.
pub fn parse_numbers(text: &str, limits: &InputLimits) -> Result<Vec<i32>, InputError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(InputError::Empty);
    }

    let mut numbers = Vec::with_capacity(tokens.len());
    let mut problems = Vec::new();
    for token in tokens {
        match token.parse::<i32>() {
            Ok(n) if limits.allowed.contains(&n) => numbers.push(n),
            Ok(n) => problems.push(format!(
                "{} (out of range {}-{})",
                n,
                limits.allowed.start(),
                limits.allowed.end()
            )),
            Err(_) => problems.push(format!("'{}' (not a number)", token)),
        }
    }

    if !problems.is_empty() {
        return Err(InputError::Invalid { problems });
    }

    if numbers.len() > limits.max_count {
        warn!(
            entered = numbers.len(),
            kept = limits.max_count,
            "too many numbers, keeping the first ones"
        );
        numbers.truncate(limits.max_count);
    }
    Ok(numbers)
}

/// `limits.random_count` values drawn uniformly from `limits.random_range`
pub fn random_numbers(limits: &InputLimits) -> Vec<i32> {
    random_numbers_with(&mut rand::thread_rng(), limits.random_count, limits)
}

/// Like [`random_numbers`], but with an explicit generator and count
pub fn random_numbers_with<R: Rng>(
    rng: &mut R,
    count: usize,
    limits: &InputLimits,
) -> Vec<i32> {
    (0..count)
        .map(|_| rng.gen_range(limits.random_range.clone()))
        .collect()
}

/// Array data from optional user text; no text (or blank text) means random
pub fn array_input(text: Option<&str>, limits: &InputLimits) -> Result<Vec<i32>, InputError> {
    match text.map(str::trim) {
        Some(text) if !text.is_empty() => {
            let numbers = parse_numbers(text, limits)?;
            debug!(count = numbers.len(), "using entered numbers");
            Ok(numbers)
        }
        _ => {
            let numbers = random_numbers(limits);
            debug!(count = numbers.len(), "using random numbers");
            Ok(numbers)
        }
    }
}

/// Tree data: the sample tree, or a search tree built from the given values
pub fn tree_input(text: Option<&str>, limits: &InputLimits) -> Result<BinaryTree, InputError> {
    match text.map(str::trim) {
        Some(text) if !text.is_empty() => {
            let values = parse_numbers(text, limits)?;
            Ok(BinaryTree::from_bst_values(&values))
        }
        _ => Ok(BinaryTree::sample()),
    }
}
