use crate::builder::{RuleListBuilder, StopReason};
use crate::conf::{
    ClassWeight, Criterion, DEFAULT_MAX_DEPTH, RuleListConfig, default_feature_names,
};
use crate::criterion::{CriterionError, distinct_labels};
use crate::dataframe::{frame_to_matrix, series_to_labels};
use crate::predict::probability;
use crate::rules::RuleList;
use estimator_api::api::{Estimator, FitError, PredictError, ProbabilisticClassifier};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use polars::prelude::{DataFrame, Series};

impl From<CriterionError> for FitError {
    fn from(err: CriterionError) -> Self {
        FitError::Precondition(err.to_string())
    }
}

/// Greedy rule list: CART split search, following only one branch per level.
#[derive(Debug, Clone)]
pub struct GreedyRuleListClassifier {
    pub max_depth: usize,
    pub class_weight: Option<ClassWeight>,
    pub criterion: Criterion,
    /// Column names; `"feat <i>"` when unset.
    pub feature_names: Option<Vec<String>>,
    rules: Option<RuleList>,
    stop_reason: Option<StopReason>,
    n_features: Option<usize>,
}

impl Default for GreedyRuleListClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, None, Criterion::Gini)
    }
}

impl GreedyRuleListClassifier {
    pub fn new(max_depth: usize, class_weight: Option<ClassWeight>, criterion: Criterion) -> Self {
        GreedyRuleListClassifier {
            max_depth,
            class_weight,
            criterion,
            feature_names: None,
            rules: None,
            stop_reason: None,
            n_features: None,
        }
    }

    pub fn from_config(config: RuleListConfig) -> Self {
        Self::new(config.max_depth, config.class_weight, config.criterion)
    }

    pub fn config(&self) -> RuleListConfig {
        RuleListConfig {
            max_depth: self.max_depth,
            criterion: self.criterion,
            class_weight: self.class_weight.clone(),
        }
    }

    pub fn with_feature_names(mut self, feature_names: Vec<String>) -> Self {
        self.feature_names = Some(feature_names);
        self
    }

    /// Fitted rule list, `None` before the first successful fit.
    pub fn rules(&self) -> Option<&RuleList> {
        self.rules.as_ref()
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn n_features(&self) -> Option<usize> {
        self.n_features
    }

    pub fn is_fitted(&self) -> bool {
        self.rules.is_some()
    }

    /// Fits on a frame of numeric features; column names become feature names.
    pub fn fit_frame(&mut self, df: &DataFrame, target: &Series) -> Result<&RuleList, FitError> {
        let (x, names) = frame_to_matrix(df).map_err(|e| FitError::InvalidInput(e.to_string()))?;
        let y = series_to_labels(target).map_err(|e| FitError::InvalidInput(e.to_string()))?;
        self.feature_names = Some(names);
        self.fit(x.view(), y.view())
    }

    pub fn predict_proba_frame(&self, df: &DataFrame) -> Result<Array2<f64>, PredictError> {
        let (x, _) = frame_to_matrix(df).map_err(|e| PredictError::InvalidInput(e.to_string()))?;
        self.predict_proba(x.view())
    }

    pub fn predict_frame(&self, df: &DataFrame) -> Result<Array1<usize>, PredictError> {
        let (x, _) = frame_to_matrix(df).map_err(|e| PredictError::InvalidInput(e.to_string()))?;
        self.predict(x.view())
    }

    fn validate_fit_input(&self, x: &ArrayView2<f64>, y: &ArrayView1<f64>) -> Result<Vec<String>, FitError> {
        if x.nrows() != y.len() {
            return Err(FitError::InvalidInput(format!(
                "x has {} rows but y has {} labels",
                x.nrows(),
                y.len()
            )));
        }
        if x.ncols() == 0 {
            return Err(FitError::InvalidInput("x has no feature columns".to_string()));
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(FitError::InvalidInput("x contains non-finite values".to_string()));
        }
        if y.iter().any(|v| !v.is_finite()) {
            return Err(FitError::InvalidInput("y contains non-finite values".to_string()));
        }

        if let Some(class_weight) = &self.class_weight {
            if let Some((label, weight)) = class_weight
                .iter()
                .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
            {
                return Err(FitError::Configuration(format!(
                    "class weight for label {} must be finite and non-negative, got {}",
                    label, weight
                )));
            }
        }

        if self.criterion == Criterion::NegCorr {
            let k = distinct_labels(&y.to_vec());
            if k > 2 {
                return Err(CriterionError::NonBinaryLabels(k).into());
            }
        }

        match &self.feature_names {
            Some(names) if names.len() != x.ncols() => Err(FitError::InvalidInput(format!(
                "{} feature names given for {} columns",
                names.len(),
                x.ncols()
            ))),
            Some(names) => Ok(names.clone()),
            None => Ok(default_feature_names(x.ncols())),
        }
    }

    fn fitted_rules(&self, x: &ArrayView2<f64>) -> Result<&RuleList, PredictError> {
        let rules = self.rules.as_ref().ok_or(PredictError::NotFitted)?;
        if rules.is_empty() {
            return Err(PredictError::EmptyModel);
        }
        if let Some(n_features) = self.n_features {
            if x.ncols() != n_features {
                return Err(PredictError::InvalidInput(format!(
                    "x has {} columns, model was fitted on {}",
                    x.ncols(),
                    n_features
                )));
            }
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(PredictError::InvalidInput(
                "x contains non-finite values".to_string(),
            ));
        }
        Ok(rules)
    }
}

impl Estimator for GreedyRuleListClassifier {
    type Model = RuleList;

    fn _fit_impl(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<&RuleList, FitError> {
        let feature_names = self.validate_fit_input(&x, &y)?;

        let builder = RuleListBuilder::new(
            self.max_depth,
            self.criterion,
            self.class_weight.as_ref(),
            &feature_names,
        );
        let outcome = builder.build(x, y)?;

        if outcome.rules.is_empty() {
            tracing::warn!(
                max_depth = self.max_depth,
                stop_reason = %outcome.stop_reason,
                "fit produced an empty rule list; predictions will fail"
            );
        }
        tracing::info!(
            criterion = %self.criterion,
            rules = outcome.rules.len(),
            stop_reason = %outcome.stop_reason,
            "fitted greedy rule list"
        );

        // Publish the new state only once the recursion has returned
        self.n_features = Some(x.ncols());
        self.stop_reason = Some(outcome.stop_reason);
        let rules: &RuleList = self.rules.insert(outcome.rules);
        Ok(rules)
    }

    fn _predict_impl(&self, x: ArrayView2<f64>) -> Result<Array1<usize>, PredictError> {
        let proba = self.predict_proba(x)?;
        Ok(probability::classes_from_proba(&proba))
    }
}

impl ProbabilisticClassifier for GreedyRuleListClassifier {
    fn predict_proba(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, PredictError> {
        let rules = self.fitted_rules(&x)?;
        probability::predict_proba(rules, x).ok_or(PredictError::EmptyModel)
    }
}
