//! Remote access to the free-site search service.
//!
//! [`QueryAdapter`] is the seam the search sessions call through;
//! [`HttpQueryAdapter`] is its implementation over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod http_utils;
pub mod query_adapter;

pub use config::ServiceConfig;
pub use error::QueryFailure;
pub use query_adapter::{HttpQueryAdapter, QueryAdapter};
