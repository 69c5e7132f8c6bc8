//! Shared estimator interface for the workspace's learners.

pub mod api;
