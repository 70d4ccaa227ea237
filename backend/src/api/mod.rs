//! Search service endpoints.

mod free_parks;
pub use free_parks::query_free_parks;

mod free_camp_sites;
pub use free_camp_sites::query_free_camp_sites;
