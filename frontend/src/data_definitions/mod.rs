//! State definitions owned by the filter and ordering controls.

pub mod filter_selection;
pub mod sort_spec;
