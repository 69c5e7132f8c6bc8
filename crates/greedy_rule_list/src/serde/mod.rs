//! Custom serde modules for types that don't implement Serialize/Deserialize natively.

pub mod class_weight;
