use crate::conf::{ClassWeight, Criterion, DEFAULT_CUTOFF, INITIAL_MIN_CRITERION};
use crate::criterion::{CriterionError, SplitEvaluator};
use crate::node::Node;
use core::fmt;
use itertools::Itertools;
use ndarray::{ArrayView1, ArrayView2};

/// Best threshold found on a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitCandidate {
    pub criterion_value: f64,
    pub cutoff: f64,
}

/// Best threshold across all columns of a partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitResult {
    pub feature_index: usize,
    pub cutoff: f64,
    pub criterion_value: f64,
}

impl SplitResult {
    /// A perfect split leaves nothing to improve and stops the column scan.
    pub fn is_perfect(&self) -> bool {
        self.criterion_value == 0.0
    }
}

impl fmt::Display for SplitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SplitResult(feature: {}, cutoff: {:.6}, criterion: {:.6})",
            self.feature_index, self.cutoff, self.criterion_value
        )
    }
}

/// Scores `column < v` for every distinct value `v` of the column.
///
/// Distinct values are visited in ascending order and only a strictly lower
/// score replaces the incumbent, so among tied thresholds the smallest wins.
/// NaN scores never win.
pub fn search_split_column(
    column: &[f64],
    evaluator: &SplitEvaluator,
) -> Result<SplitCandidate, CriterionError> {
    let mut best = SplitCandidate {
        criterion_value: INITIAL_MIN_CRITERION,
        cutoff: DEFAULT_CUTOFF,
    };

    let distinct = column.iter().copied().sorted_by(f64::total_cmp).dedup();
    for value in distinct {
        let split: Vec<bool> = column.iter().map(|&x| x < value).collect();
        let criterion_value = evaluator.evaluate(&split)?;
        if criterion_value < best.criterion_value {
            best = SplitCandidate {
                criterion_value,
                cutoff: value,
            };
        }
    }
    Ok(best)
}

/// Finds the best column and cutoff for the rows of `node`.
///
/// Columns are scanned left to right. A perfect split returns at once;
/// otherwise a later column with an equal score replaces an earlier one.
/// Returns `None` only when `x` has no columns.
pub fn find_best_split_column(
    node: &Node,
    x: ArrayView2<f64>,
    evaluator: &SplitEvaluator,
) -> Result<Option<SplitResult>, CriterionError> {
    let mut best: Option<SplitResult> = None;
    let mut min_criterion_value = INITIAL_MIN_CRITERION;

    for feature_index in 0..x.ncols() {
        let column = node.column(x, feature_index);
        let candidate = search_split_column(&column, evaluator)?;
        let result = SplitResult {
            feature_index,
            cutoff: candidate.cutoff,
            criterion_value: candidate.criterion_value,
        };

        if result.is_perfect() {
            return Ok(Some(result));
        } else if result.criterion_value <= min_criterion_value {
            min_criterion_value = result.criterion_value;
            best = Some(result);
        }
    }
    Ok(best)
}

/// Best split over every row of `x`.
pub fn find_best_split(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    criterion: Criterion,
    class_weight: Option<&ClassWeight>,
) -> Result<Option<SplitResult>, CriterionError> {
    let node = Node::root(x.nrows());
    let labels = node.labels(y);
    let evaluator = SplitEvaluator::new(criterion, &labels, class_weight);
    find_best_split_column(&node, x, &evaluator)
}
