use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Precondition violated: {0}")]
    Precondition(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("Model is not fitted")]
    NotFitted,
    /// The model was fitted but holds no rules to evaluate.
    #[error("Model has no rules to evaluate")]
    EmptyModel,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub trait Estimator: Sized {
    /// Fitted state produced by `fit`.
    type Model;

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<&Self::Model, FitError> {
        self._fit_impl(x, y)
    }

    fn _fit_impl(
        &mut self,
        _x: ArrayView2<f64>,
        _y: ArrayView1<f64>,
    ) -> Result<&Self::Model, FitError> {
        // Default implementation can be overridden by specific estimators
        Err(FitError::InvalidInput(
            "Default fit implementation not provided".to_string(),
        ))
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<usize>, PredictError> {
        self._predict_impl(x)
    }

    fn _predict_impl(&self, _x: ArrayView2<f64>) -> Result<Array1<usize>, PredictError> {
        Err(PredictError::NotFitted)
    }
}

pub trait ProbabilisticClassifier: Estimator {
    /// Returns an `(n_samples, 2)` matrix of `(P(class 0), P(class 1))`.
    fn predict_proba(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, PredictError>;
}
