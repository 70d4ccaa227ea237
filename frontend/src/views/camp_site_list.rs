use std::{cell::RefCell, rc::Rc};

use common::{camp_site::CampSite, park::Park};

use crate::{
    data_definitions::filter_selection::FilterSelection,
    engines::filter_engine::filter_camp_sites,
    store::{ResultStore, Subscription},
};

#[derive(Debug)]
struct CampSiteListState {
    selected_park: Option<String>,
    all_sites: Rc<[CampSite]>,
    selection: FilterSelection,
    displayed: Vec<CampSite>,
}

impl CampSiteListState {
    fn recompute(&mut self) {
        self.displayed = filter_camp_sites(&self.all_sites, &self.selection);
    }
}

/// Free campsites of the selected park, filtered by the current selection.
///
/// The unfiltered sites are kept so that changing the filter never needs a new query.
pub struct CampSiteListView {
    store: ResultStore,
    state: Rc<RefCell<CampSiteListState>>,
    _subscription: Subscription,
}

impl CampSiteListView {
    pub fn new(store: ResultStore) -> Self {
        let state = Rc::new(RefCell::new(CampSiteListState {
            selected_park: None,
            all_sites: Rc::from(Vec::new()),
            selection: FilterSelection::default(),
            displayed: Vec::new(),
        }));
        let view_state = state.clone();
        let subscription = store.subscribe_camp_sites(move |set| {
            let mut state = view_state.borrow_mut();
            // a set without a park means every loaded site was dropped
            let is_selected = set.park_name.is_none() || state.selected_park.as_deref().is_some_and(|park| set.is_for(park));
            if is_selected {
                state.all_sites = set.sites.clone();
                state.recompute();
            }
        });
        Self { store, state, _subscription: subscription }
    }

    /// Shows whatever the store already holds for `park_name`; later publications for it replace that.
    pub fn select_park(&self, park_name: &str) {
        let sites = self.store.camp_sites_for(park_name);
        let mut state = self.state.borrow_mut();
        state.selected_park = Some(park_name.to_string());
        state.all_sites = sites;
        state.recompute();
    }

    pub fn apply_filter(&self, selection: FilterSelection) -> Vec<CampSite> {
        let mut state = self.state.borrow_mut();
        state.selection = selection;
        state.recompute();
        state.displayed.clone()
    }

    pub fn selected_park(&self) -> Option<String> {
        self.state.borrow().selected_park.clone()
    }

    pub fn selection(&self) -> FilterSelection {
        self.state.borrow().selection
    }

    pub fn displayed(&self) -> Vec<CampSite> {
        self.state.borrow().displayed.clone()
    }

    pub fn all_sites(&self) -> Rc<[CampSite]> {
        self.state.borrow().all_sites.clone()
    }

    /// The selected park with its free-site count taken from the loaded sites.
    pub fn park_summary(&self) -> Option<Park> {
        let state = self.state.borrow();
        let selected = state.selected_park.as_deref()?;
        let mut park = self.store.parks().iter().find(|p| p.park_name == selected)?.clone();
        park.free_site_count = state.all_sites.len() as u32;
        Some(park)
    }
}
