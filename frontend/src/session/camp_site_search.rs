use std::{cell::Cell, rc::Rc};

use backend::QueryAdapter;
use common::camp_site::CampSite;
use tracing::{debug, warn};

use crate::{
    error::SearchError,
    session::{SearchOutcome, SessionState, attempt::KeyedAttempts},
    store::{RequestTag, ResultStore},
};

/// Runs the campsite search that depends on a completed park search.
///
/// Attempts supersede each other per park. A response is also dropped when
/// the park list it was requested against has been replaced in the meantime.
pub struct CampSiteSearchSession<A> {
    adapter: A,
    store: ResultStore,
    attempts: KeyedAttempts,
    state: Cell<SessionState>,
}

impl<A: QueryAdapter> CampSiteSearchSession<A> {
    pub fn new(adapter: A, store: ResultStore) -> Self {
        Self { adapter, store, attempts: KeyedAttempts::default(), state: Cell::new(SessionState::Idle) }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Searches `park_name` with the request behind the current park list.
    pub async fn run_latest(&self, park_name: &str) -> Result<SearchOutcome<Rc<[CampSite]>>, SearchError> {
        let tag = self.store.last_request().ok_or(SearchError::NoActiveSearch)?;
        self.run(park_name, tag).await
    }

    pub async fn run(&self, park_name: &str, tag: RequestTag) -> Result<SearchOutcome<Rc<[CampSite]>>, SearchError> {
        let attempt = self.attempts.begin(park_name);
        self.state.set(SessionState::Submitting);
        debug!("campsite search attempt {} for {} (request revision {})", attempt.number(), park_name, tag.revision);

        let result = self.adapter.query_free_camp_sites(park_name, &tag.request).await;
        let is_latest_overall = self.attempts.latest() == Some(attempt);
        let sites: Rc<[CampSite]> = match result {
            Ok(sites) => sites.into(),
            Err(failure) => {
                warn!("campsite search attempt {} for {} failed: {}", attempt.number(), park_name, failure);
                if is_latest_overall {
                    self.state.set(SessionState::Failed);
                }
                return Err(failure.into());
            }
        };

        if !self.attempts.is_latest(park_name, attempt)
            || !self.store.set_camp_sites_for(attempt, &tag, park_name, sites.clone())
        {
            debug!("discarding superseded campsite search attempt {} for {}", attempt.number(), park_name);
            return Ok(SearchOutcome::Discarded);
        }
        if is_latest_overall {
            self.state.set(SessionState::Succeeded);
        }
        Ok(SearchOutcome::Applied(sites))
    }
}
