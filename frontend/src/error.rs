//! Errors surfaced to callers of the search sessions.

use backend::QueryFailure;
use common::search_request::InvalidSearchRequest;

use crate::data_definitions::sort_spec::UnknownSortField;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid search request: {0}")]
    RequestInvalid(#[from] InvalidSearchRequest),
    #[error("search failed: {0}")]
    RemoteFailure(#[from] QueryFailure),
    #[error("no park search results to look up campsites for")]
    NoActiveSearch,
    #[error(transparent)]
    UnknownSortField(#[from] UnknownSortField),
}

impl SearchError {
    /// HTTP-like status of a remote failure, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::RemoteFailure(failure) => failure.status,
            _ => None,
        }
    }
}
