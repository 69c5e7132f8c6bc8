use ndarray::{ArrayView1, ArrayView2};

/// The rows that satisfied every preceding rule, at a given depth.
///
/// A node owns its row indices; splitting allocates two new index vectors
/// and leaves the parent untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub indices: Vec<usize>,
    pub depth: usize,
}

impl Node {
    pub fn new(indices: Vec<usize>, depth: usize) -> Self {
        Self { indices, depth }
    }

    /// Root node covering all `n_rows` rows.
    pub fn root(n_rows: usize) -> Self {
        Self::new((0..n_rows).collect(), 0)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn labels(&self, y: ArrayView1<f64>) -> Vec<f64> {
        self.indices.iter().map(|&i| y[i]).collect()
    }

    pub fn column(&self, x: ArrayView2<f64>, feature_index: usize) -> Vec<f64> {
        self.indices.iter().map(|&i| x[[i, feature_index]]).collect()
    }

    /// Splits into `(x < cutoff, x >= cutoff)` on one feature, one level deeper.
    pub fn split(&self, x: ArrayView2<f64>, feature_index: usize, cutoff: f64) -> (Self, Self) {
        let (left, right): (Vec<usize>, Vec<usize>) = self
            .indices
            .iter()
            .partition(|&&i| x[[i, feature_index]] < cutoff);
        (
            Node::new(left, self.depth + 1),
            Node::new(right, self.depth + 1),
        )
    }
}

/// Arithmetic mean, NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn all_same(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}
