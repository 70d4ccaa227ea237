use std::{cell::Cell, rc::Rc};

use backend::QueryAdapter;
use common::{park::Park, search_request::SearchRequest};
use tracing::{debug, warn};

use crate::{
    error::SearchError,
    session::{SearchOutcome, SessionState, attempt::AttemptSequence},
    store::ResultStore,
};

/// Runs park searches and publishes their results to the store.
///
/// Each `run` supersedes every earlier one: whatever order the responses
/// arrive in, only the most recently started attempt can change the store.
pub struct ParkSearchSession<A> {
    adapter: A,
    store: ResultStore,
    attempts: AttemptSequence,
    state: Cell<SessionState>,
}

impl<A: QueryAdapter> ParkSearchSession<A> {
    pub fn new(adapter: A, store: ResultStore) -> Self {
        Self { adapter, store, attempts: AttemptSequence::default(), state: Cell::new(SessionState::Idle) }
    }

    /// State of the most recently started attempt.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Supersedes every attempt still in flight without starting a new query.
    pub fn cancel(&self) {
        let attempt = self.attempts.begin();
        debug!("park search attempts up to {} cancelled", attempt.number());
        self.state.set(SessionState::Idle);
    }

    /// `request` is trusted to be valid. On failure the store keeps its previous parks.
    pub async fn run(&self, request: SearchRequest) -> Result<SearchOutcome<Rc<[Park]>>, SearchError> {
        let attempt = self.attempts.begin();
        self.state.set(SessionState::Submitting);
        debug!("park search attempt {} for {} .. {}", attempt.number(), request.start_date(), request.end_date());

        let result = self.adapter.query_free_parks(&request).await;
        let is_latest = self.attempts.is_latest(attempt);
        let parks: Rc<[Park]> = match result {
            Ok(parks) => parks.into(),
            Err(failure) => {
                warn!("park search attempt {} failed: {}", attempt.number(), failure);
                if is_latest {
                    self.state.set(SessionState::Failed);
                }
                return Err(failure.into());
            }
        };

        if !is_latest || !self.store.set_parks_for(attempt, request, parks.clone()) {
            debug!("discarding superseded park search attempt {}", attempt.number());
            return Ok(SearchOutcome::Discarded);
        }
        self.state.set(SessionState::Succeeded);
        Ok(SearchOutcome::Applied(parks))
    }
}
