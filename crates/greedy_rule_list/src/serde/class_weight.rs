//! Custom serde for BTreeMap<OrderedFloat<f64>, f64> - serialize as Vec<(f64, f64)>
//! Float map keys are not valid JSON object keys, so class weights travel as pairs.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

pub fn serialize<S>(weights: &BTreeMap<OrderedFloat<f64>, f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let pairs: Vec<(f64, f64)> = weights
        .iter()
        .map(|(label, weight)| (label.0, *weight))
        .collect();
    pairs.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<OrderedFloat<f64>, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let pairs: Vec<(f64, f64)> = Vec::deserialize(deserializer)?;
    Ok(pairs
        .into_iter()
        .map(|(label, weight)| (OrderedFloat(label), weight))
        .collect())
}
