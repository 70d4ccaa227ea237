//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod search_request;
pub mod park;
pub mod camp_site;
pub mod api_response;
