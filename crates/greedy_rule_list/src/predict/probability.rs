use crate::rules::RuleList;
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// `P(class 1)` must exceed this for a row to be labelled class 1.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// `(P(class 0), P(class 1))` for every row, `None` when `rules` is empty.
pub fn predict_proba(rules: &RuleList, x: ArrayView2<f64>) -> Option<Array2<f64>> {
    if rules.is_empty() {
        return None;
    }

    let mut proba = Array2::<f64>::zeros((x.nrows(), 2));
    for (row, mut out) in x.axis_iter(Axis(0)).zip(proba.axis_iter_mut(Axis(0))) {
        let p = rules.evaluate_row(row)?;
        out[0] = 1.0 - p;
        out[1] = p;
    }
    Some(proba)
}

/// Argmax of the `> 0.5` indicator; a row at exactly 0.5 goes to class 0.
pub fn classes_from_proba(proba: &Array2<f64>) -> Array1<usize> {
    proba
        .column(1)
        .mapv(|p| if p > DECISION_THRESHOLD { 1 } else { 0 })
}
