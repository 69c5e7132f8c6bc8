use estimator_api::api::{Estimator, ProbabilisticClassifier};
use greedy_rule_list::conf::{ClassWeight, Criterion};
use greedy_rule_list::estimator::GreedyRuleListClassifier;
use polars::prelude::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn generate_sample_dataframe(n_samples: usize, n_features: usize) -> (DataFrame, Series) {
    // Meaningful numeric features x1, x2
    let mut x1_vals: Vec<f64> = Vec::with_capacity(n_samples);
    let mut x2_vals: Vec<f64> = Vec::with_capacity(n_samples);

    // Additional noisy numeric features
    let mut noise_cols: Vec<Vec<f64>> = vec![vec![0.0; n_samples]; n_features.saturating_sub(2)];

    let mut target: Vec<f64> = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let x1 = ((i * 37) % 100) as f64 / 10.0;
        let x2 = if i % 3 == 0 { 1.0 } else { 2.0 };
        x1_vals.push(x1);
        x2_vals.push(x2);

        for (j, col) in noise_cols.iter_mut().enumerate() {
            let jj = j + 2;
            col[i] = ((i * 13 + jj * 7) % 50) as f64 / 5.0;
        }

        // Risk rises with x1, and x2 == 1 adds a little
        let label = if x1 > 7.0 || (x1 > 4.0 && x2 < 1.5) { 1.0 } else { 0.0 };
        target.push(label);
    }

    let mut cols: Vec<Column> = Vec::new();
    cols.push(Series::new(PlSmallStr::from_static("x1"), x1_vals).into());
    if n_features >= 2 {
        cols.push(Series::new(PlSmallStr::from_static("x2"), x2_vals).into());
    }
    for (k, col) in noise_cols.into_iter().enumerate() {
        let name = format!("noise_{}", k);
        cols.push(Series::new(PlSmallStr::from_str(&name), col).into());
    }

    let df = DataFrame::new(cols).expect("valid frame");
    let y = Series::new(PlSmallStr::from_static("target"), target);
    (df, y)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("=== Simple Rule List (Polars) ===");

    let (df, y) = generate_sample_dataframe(200, 4);
    println!(
        "DataFrame shape: {{ rows: {}, cols: {} }}",
        df.height(),
        df.width()
    );
    println!("Columns: {:?}", df.get_column_names());

    for criterion in [Criterion::Gini, Criterion::Entropy, Criterion::NegCorr] {
        let mut clf = GreedyRuleListClassifier::new(5, None, criterion);

        println!("\nFitting with criterion '{}'...", criterion);
        let start_time = Instant::now();
        let rules = clf.fit_frame(&df, &y).expect("fit");
        println!("Fitting took: {:?}", start_time.elapsed());
        println!("{}", rules);
        println!("Stop reason: {:?}", clf.stop_reason());

        let predicted = clf.predict_frame(&df).expect("predict");
        let correct = predicted
            .iter()
            .zip(y.f64().expect("f64 target").into_no_null_iter())
            .filter(|(p, actual)| **p as f64 == *actual)
            .count();
        println!(
            "Training accuracy: {:.3}",
            correct as f64 / df.height() as f64
        );
    }

    // Upweighting the positive class on the raw array API
    let (x, names) = greedy_rule_list::dataframe::frame_to_matrix(&df).expect("matrix");
    let labels = greedy_rule_list::dataframe::series_to_labels(&y).expect("labels");
    let mut weighted = GreedyRuleListClassifier::new(
        3,
        Some(ClassWeight::new([(0.0, 1.0), (1.0, 5.0)])),
        Criterion::Gini,
    )
    .with_feature_names(names);
    weighted.fit(x.view(), labels.view()).expect("fit");
    println!("\nWeighted rule list:\n{}", weighted.rules().expect("fitted"));

    let proba = weighted.predict_proba(x.view()).expect("predict_proba");
    println!("First 5 probabilities:");
    for row in proba.outer_iter().take(5) {
        println!("  P(0) = {:.3}, P(1) = {:.3}", row[0], row[1]);
    }

    let json = weighted.rules().expect("fitted").to_json().expect("json");
    println!("\nSerialized rule list:\n{}", json);
}
