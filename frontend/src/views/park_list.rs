use std::{cell::RefCell, rc::Rc};

use common::park::Park;

use crate::{
    data_definitions::sort_spec::{ParkSortField, SortSpec},
    engines::sort_engine::sort_parks,
    store::{ResultStore, Subscription},
};

#[derive(Debug, Default)]
struct ParkListState {
    displayed: Vec<Park>,
    /// Set once the user has asked for an ordering.
    applied_spec: Option<SortSpec>,
}

/// The park list as displayed: canonical order until the user orders it,
/// then sorted by the last requested spec, including for later results.
pub struct ParkListView {
    store: ResultStore,
    state: Rc<RefCell<ParkListState>>,
    _subscription: Subscription,
}

impl ParkListView {
    pub fn new(store: ResultStore) -> Self {
        let state = Rc::new(RefCell::new(ParkListState::default()));
        let view_state = state.clone();
        let subscription = store.subscribe_parks(move |parks| {
            let mut state = view_state.borrow_mut();
            state.displayed = match &state.applied_spec {
                Some(spec) => sort_parks(parks, spec),
                None => parks.to_vec(),
            };
        });
        Self { store, state, _subscription: subscription }
    }

    pub fn displayed(&self) -> Vec<Park> {
        self.state.borrow().displayed.clone()
    }

    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.state.borrow().applied_spec
    }

    /// Toggles the store's ordering for `field` and re-sorts what is shown.
    pub fn order_by(&self, field: ParkSortField) -> SortSpec {
        let spec = self.store.toggle_sort(field);
        let mut state = self.state.borrow_mut();
        state.displayed = sort_parks(&state.displayed, &spec);
        state.applied_spec = Some(spec);
        spec
    }
}
