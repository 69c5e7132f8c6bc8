use core::fmt;
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// A threshold test with the summary of the rows it captures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRule {
    pub feature: String,
    pub feature_index: usize,
    pub cutoff: f64,
    /// Mean label of the partition before the split.
    pub val: f64,
    /// `true` when the sides were swapped at fit time because the rows below
    /// the cutoff had the higher mean label.
    pub flip: bool,
    /// Mean label of the captured (higher-risk) side.
    pub val_right: f64,
    pub num_pts: usize,
    pub num_pts_right: usize,
}

impl SplitRule {
    /// Whether `row` passes the `feature >= cutoff` test. `flip` plays no
    /// part at prediction time.
    pub fn fires(&self, row: ArrayView1<f64>) -> bool {
        row[self.feature_index] >= self.cutoff
    }

    pub fn num_pts_left(&self) -> usize {
        self.num_pts - self.num_pts_right
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafRule {
    pub val: f64,
    pub num_pts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleNode {
    Split(SplitRule),
    Leaf(LeafRule),
}

impl RuleNode {
    pub fn val(&self) -> f64 {
        match self {
            RuleNode::Split(rule) => rule.val,
            RuleNode::Leaf(leaf) => leaf.val,
        }
    }

    pub fn num_pts(&self) -> usize {
        match self {
            RuleNode::Split(rule) => rule.num_pts,
            RuleNode::Leaf(leaf) => leaf.num_pts,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, RuleNode::Leaf(_))
    }

    pub fn as_split(&self) -> Option<&SplitRule> {
        match self {
            RuleNode::Split(rule) => Some(rule),
            RuleNode::Leaf(_) => None,
        }
    }
}

/// Ordered chain of rules; the last node's `val` is the default prediction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleList {
    rules: Vec<RuleNode>,
}

impl RuleList {
    pub fn new(rules: Vec<RuleNode>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RuleNode] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleNode> {
        self.rules.iter()
    }

    pub fn splits(&self) -> impl Iterator<Item = &SplitRule> {
        self.rules.iter().filter_map(RuleNode::as_split)
    }

    /// Probability of class 1 for one row, `None` for an empty list.
    ///
    /// The first rule that fires answers with its `val_right`. The last
    /// node is never tested: reaching it yields its own `val`.
    pub fn evaluate_row(&self, row: ArrayView1<f64>) -> Option<f64> {
        let last = self.rules.len().checked_sub(1)?;
        for (j, rule) in self.rules.iter().enumerate() {
            if j == last {
                return Some(rule.val());
            }
            if let RuleNode::Split(split) = rule {
                if split.fires(row) {
                    return Some(split.val_right);
                }
            }
        }
        None
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

impl<'a> IntoIterator for &'a RuleList {
    type Item = &'a RuleNode;
    type IntoIter = std::slice::Iter<'a, RuleNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "mean {:.3} ({} pts)", rule.val(), rule.num_pts())?;
            if let RuleNode::Split(split) = rule {
                writeln!(
                    f,
                    "if {} >= {} then {:.3} ({} pts)",
                    split.feature, split.cutoff, split.val_right, split.num_pts_right
                )?;
            }
        }
        Ok(())
    }
}
