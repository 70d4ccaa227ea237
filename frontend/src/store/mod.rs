//! Canonical search results and their observers.

pub mod result_store;
pub mod topic;

pub use result_store::{CampSiteSet, RequestTag, ResultSnapshot, ResultStore};
pub use topic::{Subscription, Topic};
