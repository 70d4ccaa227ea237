//! HTTP helpers for talking to the search service.

pub mod service_client;
