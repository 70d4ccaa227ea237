use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

use common::{camp_site::CampSite, park::Park, search_request::SearchRequest};
use tracing::debug;

use crate::{
    data_definitions::sort_spec::{ParkSortField, SortSpec},
    engines::sort_engine::next_sort_spec,
    session::attempt::Attempt,
    store::topic::{Subscription, Topic},
};

/// The request that produced the current park list.
///
/// `revision` changes whenever the park list is replaced, so a tag captured
/// before a newer park search landed is no longer current.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTag {
    pub revision: u64,
    pub request: SearchRequest,
}

/// Campsites published for one park.
#[derive(Debug, Clone, PartialEq)]
pub struct CampSiteSet {
    /// `None` when no park has campsites, initially and after the park list is replaced.
    pub park_name: Option<String>,
    pub sites: Rc<[CampSite]>,
}

impl Default for CampSiteSet {
    fn default() -> Self {
        Self { park_name: None, sites: Rc::from(Vec::new()) }
    }
}

impl CampSiteSet {
    pub fn is_for(&self, park_name: &str) -> bool {
        self.park_name.as_deref() == Some(park_name)
    }
}

/// Immutable view of the canonical state. Every mutation builds a new one.
#[derive(Debug, Clone)]
pub struct ResultSnapshot {
    pub parks: Rc<[Park]>,
    pub camp_sites: BTreeMap<String, Rc<[CampSite]>>,
    pub sort_spec: SortSpec,
    pub request: Option<RequestTag>,
    parks_revision: u64,
}

impl Default for ResultSnapshot {
    fn default() -> Self {
        Self {
            parks: Rc::from(Vec::new()),
            camp_sites: BTreeMap::new(),
            sort_spec: SortSpec::default(),
            request: None,
            parks_revision: 0,
        }
    }
}

impl ResultSnapshot {
    pub fn parks_revision(&self) -> u64 {
        self.parks_revision
    }
}

struct StoreInner {
    snapshot: RefCell<Rc<ResultSnapshot>>,
    parks_topic: Topic<Rc<[Park]>>,
    camp_sites_topic: Topic<CampSiteSet>,
    last_parks_attempt: Cell<Option<Attempt>>,
    last_camp_site_attempts: RefCell<HashMap<String, Attempt>>,
}

/// Sole owner and writer of the canonical park and campsite results.
///
/// Cloning gives another handle to the same store.
#[derive(Clone)]
pub struct ResultStore {
    inner: Rc<StoreInner>,
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore {
    pub fn new() -> Self {
        let snapshot = Rc::new(ResultSnapshot::default());
        Self {
            inner: Rc::new(StoreInner {
                parks_topic: Topic::new(snapshot.parks.clone()),
                camp_sites_topic: Topic::new(CampSiteSet::default()),
                snapshot: RefCell::new(snapshot),
                last_parks_attempt: Cell::new(None),
                last_camp_site_attempts: RefCell::new(HashMap::new()),
            }),
        }
    }

    pub fn snapshot(&self) -> Rc<ResultSnapshot> {
        self.inner.snapshot.borrow().clone()
    }

    pub fn parks(&self) -> Rc<[Park]> {
        self.snapshot().parks.clone()
    }

    pub fn camp_sites_for(&self, park_name: &str) -> Rc<[CampSite]> {
        self.snapshot().camp_sites.get(park_name).cloned().unwrap_or_else(|| Rc::from(Vec::new()))
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.snapshot().sort_spec
    }

    pub fn last_request(&self) -> Option<RequestTag> {
        self.snapshot().request.clone()
    }

    /// Whether `tag` still describes the request behind the current park list.
    pub fn is_current(&self, tag: &RequestTag) -> bool {
        self.snapshot().request.as_ref().is_some_and(|current| current.revision == tag.revision)
    }

    /// Replaces the park list with one that no tracked request produced.
    pub fn set_parks(&self, parks: impl Into<Rc<[Park]>>) {
        self.replace_parks(parks.into(), None);
    }

    pub fn clear_parks(&self) {
        self.replace_parks(Rc::from(Vec::new()), None);
    }

    /// Replaces the park list with the result of `request`, unless a later
    /// attempt has already been applied. Returns whether it was applied.
    pub fn set_parks_for(&self, attempt: Attempt, request: SearchRequest, parks: impl Into<Rc<[Park]>>) -> bool {
        if self.inner.last_parks_attempt.get().is_some_and(|last| attempt <= last) {
            debug!("ignoring park results of attempt {} (already applied a later one)", attempt.number());
            return false;
        }
        self.inner.last_parks_attempt.set(Some(attempt));
        self.replace_parks(parks.into(), Some(request));
        true
    }

    pub fn set_camp_sites(&self, park_name: &str, sites: impl Into<Rc<[CampSite]>>) {
        let sites = sites.into();
        self.update(|snapshot| {
            snapshot.camp_sites.insert(park_name.to_string(), sites.clone());
        });
        self.inner.camp_sites_topic.publish(CampSiteSet { park_name: Some(park_name.to_string()), sites });
    }

    /// Stores campsites fetched for `tag`'s request. Ignored when the park
    /// list has since been replaced or a later attempt for the same park was applied.
    pub fn set_camp_sites_for(
        &self,
        attempt: Attempt,
        tag: &RequestTag,
        park_name: &str,
        sites: impl Into<Rc<[CampSite]>>,
    ) -> bool {
        if !self.is_current(tag) {
            debug!("ignoring campsites of {} fetched for superseded request revision {}", park_name, tag.revision);
            return false;
        }
        let already_applied = self
            .inner
            .last_camp_site_attempts
            .borrow()
            .get(park_name)
            .is_some_and(|last| attempt <= *last);
        if already_applied {
            debug!("ignoring campsites of {} from attempt {} (already applied a later one)", park_name, attempt.number());
            return false;
        }
        self.inner.last_camp_site_attempts.borrow_mut().insert(park_name.to_string(), attempt);
        self.set_camp_sites(park_name, sites);
        true
    }

    /// Applies the ordering toggle for `field` and returns the new spec.
    pub fn toggle_sort(&self, field: ParkSortField) -> SortSpec {
        let mut next = SortSpec::default();
        self.update(|snapshot| {
            next = next_sort_spec(&snapshot.sort_spec, field);
            snapshot.sort_spec = next;
        });
        next
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe_parks(&self, observer: impl FnMut(&Rc<[Park]>) + 'static) -> Subscription {
        self.inner.parks_topic.subscribe(observer)
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe_camp_sites(&self, observer: impl FnMut(&CampSiteSet) + 'static) -> Subscription {
        self.inner.camp_sites_topic.subscribe(observer)
    }

    /// Campsites belong to the request that produced the park list, so they
    /// are dropped whenever the park list is replaced.
    fn replace_parks(&self, parks: Rc<[Park]>, request: Option<SearchRequest>) {
        self.update(|snapshot| {
            let revision = snapshot.parks_revision + 1;
            snapshot.parks_revision = revision;
            snapshot.parks = parks.clone();
            snapshot.request = request.map(|request| RequestTag { revision, request });
            snapshot.camp_sites.clear();
        });
        self.inner.parks_topic.publish(parks);
        self.inner.camp_sites_topic.publish(CampSiteSet::default());
    }

    fn update(&self, f: impl FnOnce(&mut ResultSnapshot)) {
        let mut next = ResultSnapshot::clone(&self.inner.snapshot.borrow());
        f(&mut next);
        *self.inner.snapshot.borrow_mut() = Rc::new(next);
    }
}

impl std::fmt::Debug for ResultStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultStore").field("snapshot", &self.snapshot()).finish()
    }
}
