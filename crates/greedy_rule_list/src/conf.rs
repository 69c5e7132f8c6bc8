use core::fmt;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const FEATURE_NAME_PREFIX: &str = "feat ";
/// Starting value of every minimum search; any real split scores below it.
pub const INITIAL_MIN_CRITERION: f64 = 1e10;
/// Cutoff reported by a column search that never found a comparable score.
pub const DEFAULT_CUTOFF: f64 = 0.5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown criterion '{0}', expected one of: gini, entropy, neg_corr")]
    UnknownCriterion(String),
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Split quality measure. Lower scores are better for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    #[default]
    Gini,
    Entropy,
    NegCorr,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Gini => "gini",
            Criterion::Entropy => "entropy",
            Criterion::NegCorr => "neg_corr",
        }
    }

    /// Only the impurity criteria honour class weights.
    pub fn uses_class_weight(&self) -> bool {
        !matches!(self, Criterion::NegCorr)
    }
}

impl FromStr for Criterion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gini" => Ok(Criterion::Gini),
            "entropy" => Ok(Criterion::Entropy),
            "neg_corr" => Ok(Criterion::NegCorr),
            other => Err(ConfigError::UnknownCriterion(other.to_string())),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class sample weights. Labels without an entry weigh 1.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassWeight {
    #[serde(with = "crate::serde::class_weight")]
    weights: BTreeMap<OrderedFloat<f64>, f64>,
}

impl ClassWeight {
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self {
            weights: pairs
                .into_iter()
                .map(|(label, weight)| (OrderedFloat(label), weight))
                .collect(),
        }
    }

    pub fn weight_for(&self, label: f64) -> f64 {
        self.weights
            .get(&OrderedFloat(label))
            .copied()
            .unwrap_or(1.0)
    }

    /// Sample weight of every label, in order.
    pub fn sample_weights(&self, labels: &[f64]) -> Vec<f64> {
        labels.iter().map(|&label| self.weight_for(label)).collect()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.weights.iter().map(|(label, weight)| (label.0, *weight))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleListConfig {
    pub max_depth: usize,
    pub criterion: Criterion,
    pub class_weight: Option<ClassWeight>,
}

impl Default for RuleListConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            criterion: Criterion::Gini,
            class_weight: None,
        }
    }
}

impl RuleListConfig {
    /// Parses a JSON config; absent fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        // Report unknown criterion names with the dedicated variant
        if let Some(name) = value.get("criterion").and_then(|c| c.as_str()) {
            name.parse::<Criterion>()?;
        }
        Ok(serde_json::from_value(value)?)
    }
}

pub fn default_feature_names(n_features: usize) -> Vec<String> {
    (0..n_features)
        .map(|i| format!("{}{}", FEATURE_NAME_PREFIX, i))
        .collect()
}
