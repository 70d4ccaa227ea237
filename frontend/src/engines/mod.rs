//! Pure filter and ordering functions over search results.

pub mod filter_engine;
pub mod sort_engine;
