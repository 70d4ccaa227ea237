//! Search orchestration: one session per kind of query.

pub mod attempt;
pub mod camp_site_search;
pub mod park_search;

pub use camp_site_search::CampSiteSearchSession;
pub use park_search::ParkSearchSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What happened to a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<T> {
    /// Published as the new canonical state.
    Applied(T),
    /// A newer attempt superseded this one; the response was dropped.
    Discarded,
}

impl<T> SearchOutcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            SearchOutcome::Applied(value) => Some(value),
            SearchOutcome::Discarded => None,
        }
    }

    pub fn is_discarded(&self) -> bool {
        matches!(self, SearchOutcome::Discarded)
    }
}
