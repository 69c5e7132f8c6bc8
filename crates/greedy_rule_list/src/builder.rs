use crate::conf::{ClassWeight, Criterion};
use crate::criterion::{CriterionError, SplitEvaluator};
use crate::node::{Node, all_same, mean};
use crate::rules::{LeafRule, RuleList, RuleNode, SplitRule};
use crate::split::find_best_split_column;
use core::fmt;
use ndarray::{ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// Why the recursion stopped growing the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The remaining partition had no rows.
    Exhausted,
    /// The remaining partition had a single label; a leaf closes the list.
    Pure,
    /// `max_depth` was reached; remaining rows fall through to the last rule.
    MaxDepth(usize),
    /// No threshold separated the remaining rows; they fall through to the
    /// last rule.
    Unsplittable,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Exhausted => write!(f, "empty partition"),
            StopReason::Pure => write!(f, "pure partition"),
            StopReason::MaxDepth(depth) => write!(f, "max depth ({}) reached", depth),
            StopReason::Unsplittable => write!(f, "no separating threshold"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutcome {
    pub rules: RuleList,
    pub stop_reason: StopReason,
}

/// Grows a rule list by always descending into the lower-risk side.
pub struct RuleListBuilder<'a> {
    max_depth: usize,
    criterion: Criterion,
    class_weight: Option<&'a ClassWeight>,
    feature_names: &'a [String],
}

impl<'a> RuleListBuilder<'a> {
    pub fn new(
        max_depth: usize,
        criterion: Criterion,
        class_weight: Option<&'a ClassWeight>,
        feature_names: &'a [String],
    ) -> Self {
        Self {
            max_depth,
            criterion,
            class_weight,
            feature_names,
        }
    }

    pub fn build(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<BuildOutcome, CriterionError> {
        let (rules, stop_reason) = self.grow(x, y, Node::root(x.nrows()))?;
        tracing::debug!(stop_reason = %stop_reason, rules = rules.len(), "rule list complete");
        Ok(BuildOutcome {
            rules: RuleList::new(rules),
            stop_reason,
        })
    }

    fn grow(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        node: Node,
    ) -> Result<(Vec<RuleNode>, StopReason), CriterionError> {
        let labels = node.labels(y);

        if labels.is_empty() {
            return Ok((Vec::new(), StopReason::Exhausted));
        }
        if all_same(&labels) {
            let leaf = RuleNode::Leaf(LeafRule {
                val: labels[0],
                num_pts: labels.len(),
            });
            return Ok((vec![leaf], StopReason::Pure));
        }
        if node.depth >= self.max_depth {
            return Ok((Vec::new(), StopReason::MaxDepth(self.max_depth)));
        }

        let evaluator = SplitEvaluator::new(self.criterion, &labels, self.class_weight);
        let best = match find_best_split_column(&node, x, &evaluator)? {
            Some(best) => best,
            // Unreachable for a validated matrix, which has at least one column
            None => return Ok((Vec::new(), StopReason::Exhausted)),
        };

        let (mut left, mut right) = node.split(x, best.feature_index, best.cutoff);
        if left.is_empty() || right.is_empty() {
            tracing::debug!(
                feature_index = best.feature_index,
                cutoff = best.cutoff,
                rows = node.len(),
                "best threshold leaves one side empty"
            );
            return Ok((Vec::new(), StopReason::Unsplittable));
        }
        let mut y_left = left.labels(y);
        let mut y_right = right.labels(y);
        let flip = mean(&y_left) > mean(&y_right);
        if flip {
            std::mem::swap(&mut left, &mut right);
            std::mem::swap(&mut y_left, &mut y_right);
        }

        let feature = self.feature_name(best.feature_index);
        tracing::debug!(
            "{:.2} -> {} -> {:.2} ({}) {:.2} ({})",
            100.0 * mean(&labels),
            feature,
            100.0 * mean(&y_left),
            y_left.len(),
            100.0 * mean(&y_right),
            y_right.len()
        );

        let split = RuleNode::Split(SplitRule {
            feature,
            feature_index: best.feature_index,
            cutoff: best.cutoff,
            val: mean(&labels),
            flip,
            val_right: mean(&y_right),
            num_pts: labels.len(),
            num_pts_right: y_right.len(),
        });

        let (rest, stop_reason) = self.grow(x, y, left)?;
        let mut rules = Vec::with_capacity(rest.len() + 1);
        rules.push(split);
        rules.extend(rest);
        Ok((rules, stop_reason))
    }

    fn feature_name(&self, feature_index: usize) -> String {
        self.feature_names
            .get(feature_index)
            .cloned()
            .unwrap_or_else(|| format!("{}{}", crate::conf::FEATURE_NAME_PREFIX, feature_index))
    }
}
