//! Derived lists the UI renders, recomputed from the store's publications.

pub mod camp_site_list;
pub mod park_list;

pub use camp_site_list::CampSiteListView;
pub use park_list::ParkListView;
