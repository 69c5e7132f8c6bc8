use greedy_rule_list::node::{Node, all_same, mean};
use ndarray::array;

#[test]
fn root_covers_every_row() {
    let node = Node::root(4);
    assert_eq!(node.depth, 0);
    assert_eq!(node.indices, vec![0, 1, 2, 3]);
    assert_eq!(node.len(), 4);
    assert!(Node::root(0).is_empty());
}

#[test]
fn split_partitions_rows_by_cutoff() {
    let x = array![[5.0, 1.0], [2.0, 1.0], [3.0, 0.0], [7.0, 0.0]];
    let node = Node::root(4);

    let (left, right) = node.split(x.view(), 0, 3.0);
    assert_eq!(left.indices, vec![1]);
    assert_eq!(right.indices, vec![0, 2, 3]);
    assert_eq!(left.depth, 1);
    assert_eq!(right.depth, 1);
    // the parent keeps its rows
    assert_eq!(node.len(), 4);
}

#[test]
fn nested_split_only_sees_its_own_rows() {
    let x = array![[0.0], [1.0], [2.0], [3.0], [4.0]];
    let y = array![0.0, 0.0, 1.0, 0.0, 1.0];
    let node = Node::new(vec![0, 2, 4], 2);

    assert_eq!(node.labels(y.view()), vec![0.0, 1.0, 1.0]);
    assert_eq!(node.column(x.view(), 0), vec![0.0, 2.0, 4.0]);

    let (left, right) = node.split(x.view(), 0, 2.0);
    assert_eq!(left, Node::new(vec![0], 3));
    assert_eq!(right, Node::new(vec![2, 4], 3));
}

#[test]
fn mean_of_empty_is_nan() {
    assert!(mean(&[]).is_nan());
    assert_eq!(mean(&[0.0, 1.0, 1.0, 0.0]), 0.5);
}

#[test]
fn all_same_on_short_inputs() {
    assert!(all_same(&[]));
    assert!(all_same(&[2.0]));
    assert!(all_same(&[1.0, 1.0, 1.0]));
    assert!(!all_same(&[1.0, 0.0, 1.0]));
}
