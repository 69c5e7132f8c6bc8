//! Conversion from polars frames into the plain arrays the learner consumes.

use ndarray::{Array1, Array2};
use polars::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error("column '{column}' has {count} missing or non-numeric values")]
    MissingValues { column: String, count: usize },
    #[error("frame has no columns")]
    NoColumns,
}

fn series_values(series: &Series) -> Result<Vec<f64>, FrameError> {
    // Non-numeric entries become nulls on cast and are reported with the missing ones
    let casted = series.cast(&DataType::Float64)?;
    let count = casted.null_count();
    if count > 0 {
        return Err(FrameError::MissingValues {
            column: series.name().to_string(),
            count,
        });
    }
    Ok(casted.f64()?.into_no_null_iter().collect())
}

/// Row-major feature matrix plus the column names, in frame order.
pub fn frame_to_matrix(df: &DataFrame) -> Result<(Array2<f64>, Vec<String>), FrameError> {
    let columns = df.get_columns();
    if columns.is_empty() {
        return Err(FrameError::NoColumns);
    }

    let names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
    let values: Vec<Vec<f64>> = columns
        .iter()
        .map(|c| series_values(c.as_materialized_series()))
        .collect::<Result<_, _>>()?;

    let matrix = Array2::from_shape_fn((df.height(), columns.len()), |(i, j)| values[j][i]);
    Ok((matrix, names))
}

pub fn series_to_labels(series: &Series) -> Result<Array1<f64>, FrameError> {
    Ok(Array1::from(series_values(series)?))
}
