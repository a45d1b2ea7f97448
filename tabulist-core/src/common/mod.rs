//! Mapping between the nested list model and the flat table model.

pub mod flat_to_nested;
pub mod nested_to_flat;
