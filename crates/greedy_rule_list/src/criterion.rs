//! Impurity measures used to score candidate binary splits.
//!
//! Every score is "lower is better": `0.0` means both sides of the split are
//! pure (Gini, entropy) or that there is nothing left to separate (negative
//! correlation on a single-class partition).

use crate::conf::{ClassWeight, Criterion};
use itertools::izip;
use ordered_float::OrderedFloat;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CriterionError {
    #[error("split mask has {split} entries but there are {labels} labels")]
    LengthMismatch { split: usize, labels: usize },
    #[error("neg_corr criterion requires binary labels, found {0} distinct values")]
    NonBinaryLabels(usize),
}

// Ascending label order keeps every sum below reproducible run to run
fn class_counts(y: &[f64]) -> BTreeMap<OrderedFloat<f64>, usize> {
    let mut counts = BTreeMap::new();
    for &label in y {
        *counts.entry(OrderedFloat(label)).or_insert(0) += 1;
    }
    counts
}

pub fn distinct_labels(y: &[f64]) -> usize {
    class_counts(y).len()
}

fn check_lengths(split: &[bool], y: &[f64]) -> Result<(), CriterionError> {
    if split.len() != y.len() {
        return Err(CriterionError::LengthMismatch {
            split: split.len(),
            labels: y.len(),
        });
    }
    Ok(())
}

/// Gini index of one partition, `sum(p_c * (1 - p_c))`.
pub fn gini(y: &[f64]) -> f64 {
    let n = y.len() as f64;
    let mut s = 0.0;
    for &n_c in class_counts(y).values() {
        let p_c = n_c as f64 / n;
        s += p_c * (1.0 - p_c);
    }
    s
}

/// One-vs-rest entropy of one partition, in bits.
pub fn entropy(y: &[f64]) -> f64 {
    let n = y.len();
    let mut s = 0.0;
    for &n_c in class_counts(y).values() {
        let weight = n_c as f64 / n as f64;
        s += weight * entropy_from_counts(n_c, n - n_c);
    }
    s
}

/// Binary entropy of a group holding `c1` and `c2` members of two classes.
pub fn entropy_from_counts(c1: usize, c2: usize) -> f64 {
    if c1 == 0 || c2 == 0 {
        return 0.0;
    }
    let total = (c1 + c2) as f64;
    let entropy_term = |p: f64| -p * p.log2();
    entropy_term(c1 as f64 / total) + entropy_term(c2 as f64 / total)
}

/// Negative Pearson correlation between the split indicator and `y`.
///
/// `y` is oriented so that `1` is the majority label before correlating,
/// so the score rewards masks that isolate the majority class on the
/// `true` side. Masks that are all `true` or all `false` have no variance
/// and score NaN.
pub fn neg_corr(split: &[bool], y: &[f64]) -> Result<f64, CriterionError> {
    check_lengths(split, y)?;
    match distinct_labels(y) {
        0 | 1 => return Ok(0.0),
        2 => {}
        k => return Err(CriterionError::NonBinaryLabels(k)),
    }

    let n = y.len() as f64;
    let positives: f64 = y.iter().sum();
    let oriented: Vec<f64> = if positives < n / 2.0 {
        y.iter().map(|label| 1.0 - label).collect()
    } else {
        y.to_vec()
    };
    let indicator: Vec<f64> = split
        .iter()
        .map(|&goes_left| if goes_left { 1.0 } else { 0.0 })
        .collect();

    Ok(-pearson(&indicator, &oriented))
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let covariance = a.covariance(b);
    covariance / (a.std_dev() * b.std_dev())
}

/// Scores split masks over one fixed partition.
///
/// Sample weights are resolved once from the class weights, so scanning
/// every threshold of every column reuses them.
#[derive(Debug, Clone)]
pub struct SplitEvaluator<'a> {
    criterion: Criterion,
    labels: &'a [f64],
    sample_weights: Vec<f64>,
    total_weight: f64,
}

impl<'a> SplitEvaluator<'a> {
    pub fn new(criterion: Criterion, labels: &'a [f64], class_weight: Option<&ClassWeight>) -> Self {
        let sample_weights = match class_weight {
            Some(weights) if criterion.uses_class_weight() => weights.sample_weights(labels),
            _ => vec![1.0; labels.len()],
        };
        let total_weight = sample_weights.iter().sum();
        Self {
            criterion,
            labels,
            sample_weights,
            total_weight,
        }
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn labels(&self) -> &'a [f64] {
        self.labels
    }

    /// Weighted criterion of the split where `true` marks the left side.
    pub fn evaluate(&self, split: &[bool]) -> Result<f64, CriterionError> {
        check_lengths(split, self.labels)?;

        let node_impurity: fn(&[f64]) -> f64 = match self.criterion {
            Criterion::Gini => gini,
            Criterion::Entropy => entropy,
            Criterion::NegCorr => return neg_corr(split, self.labels),
        };

        let mut y_left = Vec::new();
        let mut y_right = Vec::new();
        let mut weight_left = 0.0;
        let mut weight_right = 0.0;
        for (&goes_left, &label, &weight) in izip!(split, self.labels, &self.sample_weights) {
            if goes_left {
                y_left.push(label);
                weight_left += weight;
            } else {
                y_right.push(label);
                weight_right += weight;
            }
        }

        let s_left = node_impurity(&y_left);
        let s_right = node_impurity(&y_right);
        Ok(weight_left / self.total_weight * s_left + weight_right / self.total_weight * s_right)
    }
}

pub fn weighted_criterion(
    criterion: Criterion,
    split: &[bool],
    y: &[f64],
    class_weight: Option<&ClassWeight>,
) -> Result<f64, CriterionError> {
    SplitEvaluator::new(criterion, y, class_weight).evaluate(split)
}
