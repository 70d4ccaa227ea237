//! Wires the store, sessions and views together for one user.

use std::rc::Rc;

use backend::QueryAdapter;
use common::{camp_site::CampSite, park::Park, search_request::SearchRequest};

use crate::{
    data_definitions::{
        filter_selection::FilterSelection,
        sort_spec::{ParkSortField, SortSpec},
    },
    error::SearchError,
    session::{CampSiteSearchSession, ParkSearchSession, SearchOutcome},
    store::ResultStore,
    views::{CampSiteListView, ParkListView},
};

pub struct CampinApp<A> {
    store: ResultStore,
    park_search: ParkSearchSession<A>,
    camp_site_search: CampSiteSearchSession<A>,
    parks: ParkListView,
    camp_sites: CampSiteListView,
}

impl<A: QueryAdapter + Clone> CampinApp<A> {
    pub fn new(adapter: A) -> Self {
        let store = ResultStore::new();
        Self {
            park_search: ParkSearchSession::new(adapter.clone(), store.clone()),
            camp_site_search: CampSiteSearchSession::new(adapter, store.clone()),
            parks: ParkListView::new(store.clone()),
            camp_sites: CampSiteListView::new(store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn park_search(&self) -> &ParkSearchSession<A> {
        &self.park_search
    }

    pub fn camp_site_search(&self) -> &CampSiteSearchSession<A> {
        &self.camp_site_search
    }

    pub fn parks(&self) -> &ParkListView {
        &self.parks
    }

    pub fn camp_sites(&self) -> &CampSiteListView {
        &self.camp_sites
    }

    pub async fn search_parks(&self, request: SearchRequest) -> Result<SearchOutcome<Rc<[Park]>>, SearchError> {
        self.park_search.run(request).await
    }

    /// Shows `park_name`'s campsites and fetches them for the current request.
    pub async fn select_park(&self, park_name: &str) -> Result<SearchOutcome<Rc<[CampSite]>>, SearchError> {
        self.camp_sites.select_park(park_name);
        self.camp_site_search.run_latest(park_name).await
    }

    pub fn order_parks_by(&self, field: ParkSortField) -> SortSpec {
        self.parks.order_by(field)
    }

    pub fn filter_camp_sites(&self, selection: FilterSelection) -> Vec<CampSite> {
        self.camp_sites.apply_filter(selection)
    }

    /// Invalidates the shown results, e.g. when the search form is edited again.
    /// Park searches still in flight are discarded when they complete.
    pub fn reset(&self) {
        self.park_search.cancel();
        self.store.clear_parks();
    }
}
