//! Free-campsite search client: canonical result state, filter and
//! ordering engines, and the sessions that feed them.

pub mod app;
pub mod data_definitions;
pub mod engines;
pub mod error;
pub mod session;
pub mod store;
pub mod views;

pub use app::CampinApp;
pub use error::SearchError;
