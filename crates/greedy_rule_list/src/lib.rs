//! # Greedy Rule List
//!
//! A CART-style classifier that learns a single ordered chain of rules
//! instead of a tree: at every level the best threshold split is found, the
//! higher-risk side becomes a terminal rule, and the search continues on the
//! other side only.
//!
//! ## Key Features
//!
//! - **Three criteria**: weighted Gini, weighted entropy, negative correlation
//! - **Exhaustive search**: every distinct value of every column is a candidate cutoff
//! - **Plain arrays in, plain records out**: `ndarray` inputs, serde-tagged rules
//!
//! ## Example
//!
//! ```rust,ignore
//! use estimator_api::api::{Estimator, ProbabilisticClassifier};
//! use greedy_rule_list::conf::Criterion;
//! use greedy_rule_list::estimator::GreedyRuleListClassifier;
//! use ndarray::array;
//!
//! let x = array![[0.0], [1.0], [2.0], [3.0], [4.0], [5.0]];
//! let y = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
//!
//! let mut clf = GreedyRuleListClassifier::new(5, None, Criterion::Gini);
//! let rules = clf.fit(x.view(), y.view())?;
//! println!("{rules}");
//! // mean 0.500 (6 pts)
//! // if feat 0 >= 3 then 1.000 (3 pts)
//! // mean 0.000 (3 pts)
//! let proba = clf.predict_proba(x.view())?;
//! ```

// Module declarations
pub mod builder;
pub mod conf;
pub mod criterion;
pub mod dataframe;
pub mod estimator;
pub mod node;
pub mod predict;
pub mod rules;
pub mod serde;
pub mod split;
