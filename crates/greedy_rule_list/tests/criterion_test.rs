//! Integration tests for greedy_rule_list::criterion
//!
//! Covers the single-partition measures (gini, entropy), the binary entropy
//! helper, the weighted split criterion with and without class weights, and
//! the negative-correlation criterion with its preconditions.

use approx::assert_relative_eq;
use greedy_rule_list::conf::{ClassWeight, Criterion};
use greedy_rule_list::criterion::{
    CriterionError, SplitEvaluator, entropy, entropy_from_counts, gini, neg_corr,
    weighted_criterion,
};
use rstest::rstest;

#[rstest]
#[case(vec![1.0])]
#[case(vec![0.0, 0.0, 0.0])]
#[case(vec![3.5, 3.5, 3.5, 3.5])]
fn single_class_is_exactly_pure(#[case] y: Vec<f64>) {
    assert_eq!(gini(&y), 0.0);
    assert_eq!(entropy(&y), 0.0);
}

#[test]
fn gini_of_balanced_two_class() {
    assert_relative_eq!(gini(&[0.0, 0.0, 1.0, 1.0]), 0.5);
}

#[test]
fn gini_of_three_classes() {
    // 3 * (1/3 * 2/3)
    assert_relative_eq!(gini(&[0.0, 1.0, 2.0]), 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn gini_and_entropy_of_empty_partition_are_zero() {
    assert_eq!(gini(&[]), 0.0);
    assert_eq!(entropy(&[]), 0.0);
}

#[test]
fn entropy_from_counts_handles_zero_counts() {
    assert_eq!(entropy_from_counts(0, 5), 0.0);
    assert_eq!(entropy_from_counts(5, 0), 0.0);
    assert_relative_eq!(entropy_from_counts(2, 2), 1.0);
}

#[test]
fn entropy_is_measured_in_bits() {
    // Each class contributes 0.5 * H(0.5, 0.5) = 0.5
    assert_relative_eq!(entropy(&[0.0, 0.0, 1.0, 1.0]), 1.0);

    // 1/4 and 3/4: both classes share the same one-vs-rest entropy
    let h = -(0.25_f64 * 0.25_f64.log2()) - 0.75 * 0.75_f64.log2();
    assert_relative_eq!(entropy(&[0.0, 1.0, 1.0, 1.0]), h, epsilon = 1e-12);
}

#[test]
fn weighted_gini_of_perfect_split_is_zero() {
    let y = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let split = [true, true, true, false, false, false];
    let s = weighted_criterion(Criterion::Gini, &split, &y, None).unwrap();
    assert_eq!(s, 0.0);
}

#[test]
fn weighted_gini_averages_by_side_size() {
    // left [0] is pure, right [1, 0, 1] has gini 4/9 and weight 3/4
    let y = [0.0, 1.0, 0.0, 1.0];
    let split = [true, false, false, false];
    let s = weighted_criterion(Criterion::Gini, &split, &y, None).unwrap();
    assert_relative_eq!(s, 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn empty_side_scores_the_whole_partition() {
    let y = [0.0, 1.0, 0.0, 1.0];
    let nobody = [false; 4];
    let gini_all = weighted_criterion(Criterion::Gini, &nobody, &y, None).unwrap();
    let entropy_all = weighted_criterion(Criterion::Entropy, &nobody, &y, None).unwrap();
    assert_relative_eq!(gini_all, gini(&y));
    assert_relative_eq!(entropy_all, entropy(&y));
}

#[rstest]
#[case(Criterion::Gini)]
#[case(Criterion::Entropy)]
fn class_weight_shifts_side_weights(#[case] criterion: Criterion) {
    // Pure zeros on the left, mixed on the right
    let y = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let split = [true, true, true, true, false, false];

    let unweighted = weighted_criterion(criterion, &split, &y, None).unwrap();
    let weights = ClassWeight::new([(0.0, 1.0), (1.0, 5.0)]);
    let weighted = weighted_criterion(criterion, &split, &y, Some(&weights)).unwrap();

    // Mixed side weight goes from 2/6 to 6/10
    assert_relative_eq!(unweighted * 3.0 / 5.0 * 3.0, weighted, epsilon = 1e-12);
    assert!(weighted > unweighted);
}

#[test]
fn evaluator_reuses_weights_across_masks() {
    let y = [0.0, 0.0, 1.0, 1.0];
    let evaluator = SplitEvaluator::new(Criterion::Gini, &y, None);
    assert_eq!(evaluator.criterion(), Criterion::Gini);
    assert_eq!(evaluator.labels(), &y);

    let perfect = evaluator.evaluate(&[true, true, false, false]).unwrap();
    let mixed = evaluator.evaluate(&[true, false, true, false]).unwrap();
    assert_eq!(perfect, 0.0);
    assert_relative_eq!(mixed, 0.5);
}

#[rstest]
#[case(Criterion::Gini)]
#[case(Criterion::Entropy)]
#[case(Criterion::NegCorr)]
fn mismatched_lengths_are_rejected(#[case] criterion: Criterion) {
    let y = [0.0, 1.0, 1.0];
    let err = weighted_criterion(criterion, &[true, false], &y, None).unwrap_err();
    assert_eq!(err, CriterionError::LengthMismatch { split: 2, labels: 3 });
}

#[test]
fn neg_corr_of_single_class_is_zero() {
    let s = neg_corr(&[true, false, true], &[1.0, 1.0, 1.0]).unwrap();
    assert_eq!(s, 0.0);
}

#[test]
fn neg_corr_rewards_isolating_the_majority_label() {
    let y = [0.0, 0.0, 1.0, 1.0];
    let aligned = neg_corr(&[false, false, true, true], &y).unwrap();
    let opposed = neg_corr(&[true, true, false, false], &y).unwrap();
    assert_relative_eq!(aligned, -1.0, epsilon = 1e-12);
    assert_relative_eq!(opposed, 1.0, epsilon = 1e-12);
}

#[test]
fn neg_corr_orients_minority_positive_labels() {
    // One positive out of four: labels are flipped before correlating
    let y = [0.0, 0.0, 0.0, 1.0];
    let isolates_zeros = neg_corr(&[true, true, true, false], &y).unwrap();
    let isolates_one = neg_corr(&[false, false, false, true], &y).unwrap();
    assert_relative_eq!(isolates_zeros, -1.0, epsilon = 1e-12);
    assert_relative_eq!(isolates_one, 1.0, epsilon = 1e-12);
}

#[test]
fn neg_corr_of_constant_mask_is_nan() {
    let s = neg_corr(&[false; 4], &[0.0, 1.0, 0.0, 1.0]).unwrap();
    assert!(s.is_nan());
}

#[test]
fn neg_corr_rejects_non_binary_labels() {
    let err = neg_corr(&[true, false, true], &[0.0, 1.0, 2.0]).unwrap_err();
    assert_eq!(err, CriterionError::NonBinaryLabels(3));
}

#[test]
fn neg_corr_ignores_class_weights() {
    let y = [0.0, 0.0, 1.0, 1.0, 1.0];
    let split = [false, true, true, true, false];
    let weights = ClassWeight::new([(1.0, 10.0)]);
    let plain = weighted_criterion(Criterion::NegCorr, &split, &y, None).unwrap();
    let weighted = weighted_criterion(Criterion::NegCorr, &split, &y, Some(&weights)).unwrap();
    assert_eq!(plain, weighted);
}

#[rstest]
#[case(Criterion::Gini, true)]
#[case(Criterion::Entropy, true)]
#[case(Criterion::NegCorr, false)]
fn only_impurity_criteria_use_class_weights(#[case] criterion: Criterion, #[case] expected: bool) {
    assert_eq!(criterion.uses_class_weight(), expected);
}
