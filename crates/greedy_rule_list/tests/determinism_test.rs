use estimator_api::api::{Estimator, ProbabilisticClassifier};
use greedy_rule_list::conf::{ClassWeight, Criterion};
use greedy_rule_list::estimator::GreedyRuleListClassifier;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

/// Generate a noisy dataset with ties and repeated values in every column
fn generate_test_data(n_samples: usize, n_features: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = Array2::from_shape_fn((n_samples, n_features), |_| {
        rng.random_range(0..12u32) as f64 / 4.0
    });
    let y = x
        .rows()
        .into_iter()
        .map(|row| {
            let noise: f64 = rng.random();
            if row[0] + 0.5 * row[n_features - 1] + noise > 2.5 { 1.0 } else { 0.0 }
        })
        .collect::<Array1<f64>>();
    (x, y)
}

#[rstest]
#[case(Criterion::Gini, None)]
#[case(Criterion::Entropy, None)]
#[case(Criterion::NegCorr, None)]
#[case(Criterion::Gini, Some(ClassWeight::new([(0.0, 1.0), (1.0, 3.0)])))]
#[case(Criterion::Entropy, Some(ClassWeight::new([(0.0, 2.0)])))]
fn test_rule_list_determinism(#[case] criterion: Criterion, #[case] class_weight: Option<ClassWeight>) {
    let (x, y) = generate_test_data(150, 4, 42);

    let mut first = GreedyRuleListClassifier::new(5, class_weight.clone(), criterion);
    let mut second = GreedyRuleListClassifier::new(5, class_weight, criterion);
    let rules_first = first.fit(x.view(), y.view()).unwrap().clone();
    let rules_second = second.fit(x.view(), y.view()).unwrap().clone();

    assert_eq!(rules_first, rules_second);
    assert_eq!(first.stop_reason(), second.stop_reason());
    assert_eq!(
        first.predict_proba(x.view()).unwrap(),
        second.predict_proba(x.view()).unwrap()
    );
}

#[test]
fn test_refit_replaces_previous_model() {
    let (x, y) = generate_test_data(80, 3, 7);
    let (x_other, y_other) = generate_test_data(80, 3, 8);

    let mut clf = GreedyRuleListClassifier::new(4, None, Criterion::Gini);
    let original = clf.fit(x.view(), y.view()).unwrap().clone();
    clf.fit(x_other.view(), y_other.view()).unwrap();
    let refitted = clf.fit(x.view(), y.view()).unwrap();

    assert_eq!(&original, refitted);
}
