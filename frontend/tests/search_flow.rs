//! Park and campsite searches through the app, with responses released by hand.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use async_trait::async_trait;
use backend::{QueryAdapter, QueryFailure};
use chrono::NaiveDate;
use common::{
    camp_site::{CampSite, QualityLevel},
    park::Park,
    search_request::SearchRequest,
};
use frontend::{
    CampinApp, SearchError,
    data_definitions::filter_selection::FilterSelection,
    session::{SearchOutcome, SessionState},
};
use serde_json::json;
use tokio::sync::oneshot;

type ParkReply = Result<Vec<Park>, QueryFailure>;
type SiteReply = Result<Vec<CampSite>, QueryFailure>;

/// Each query waits for the reply sent through its gate, keyed by start date or park name.
/// Campsite gates for one park are taken in the order they were opened.
#[derive(Default)]
struct GatedAdapter {
    park_gates: RefCell<HashMap<NaiveDate, oneshot::Receiver<ParkReply>>>,
    site_gates: RefCell<HashMap<String, VecDeque<oneshot::Receiver<SiteReply>>>>,
}

impl GatedAdapter {
    fn gate_parks(&self, start_date: NaiveDate) -> oneshot::Sender<ParkReply> {
        let (tx, rx) = oneshot::channel();
        self.park_gates.borrow_mut().insert(start_date, rx);
        tx
    }

    fn gate_sites(&self, park_name: &str) -> oneshot::Sender<SiteReply> {
        let (tx, rx) = oneshot::channel();
        self.site_gates.borrow_mut().entry(park_name.to_string()).or_default().push_back(rx);
        tx
    }
}

#[async_trait(?Send)]
impl QueryAdapter for GatedAdapter {
    async fn query_free_parks(&self, request: &SearchRequest) -> Result<Vec<Park>, QueryFailure> {
        let gate = self.park_gates.borrow_mut().remove(&request.start_date()).expect("no gate for park query");
        gate.await.expect("park gate dropped")
    }

    async fn query_free_camp_sites(&self, park_name: &str, _request: &SearchRequest) -> Result<Vec<CampSite>, QueryFailure> {
        let gate = self
            .site_gates
            .borrow_mut()
            .get_mut(park_name)
            .and_then(|gates| gates.pop_front())
            .expect("no gate for campsite query");
        gate.await.expect("campsite gate dropped")
    }
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn request(start: NaiveDate, end: NaiveDate) -> SearchRequest {
    SearchRequest::new(start, end, 3.0, None).unwrap()
}

fn park_names(parks: &[Park]) -> Vec<String> {
    parks.iter().map(|p| p.park_name.clone()).collect()
}

fn graded_site(park: &str, number: &str) -> CampSite {
    CampSite::new(park, number).with_detail("Privacy", "Good").with_detail("Quality", "Good")
}

fn site_numbers(sites: &[CampSite]) -> Vec<String> {
    sites.iter().map(|s| s.site_number.clone()).collect()
}

#[tokio::test]
async fn banff_search_with_privacy_filter() {
    let adapter = Rc::new(GatedAdapter::default());
    let app = CampinApp::new(adapter.clone());

    adapter.gate_parks(date(7, 1)).send(Ok(vec![Park::new("Banff", 12)])).unwrap();
    let outcome = app.search_parks(request(date(7, 1), date(7, 5))).await.unwrap();
    assert!(!outcome.is_discarded());
    assert_eq!(app.parks().displayed(), vec![Park::new("Banff", 12)]);

    let sites: Vec<CampSite> = serde_json::from_value(json!([
        {"parkName": "Banff", "siteNumber": "1", "details": {"Privacy": "Good", "Quality": "Poor"}, "images": []},
        {"parkName": "Banff", "siteNumber": "2", "details": {"Privacy": "Poor", "Quality": "Good"}, "images": []}
    ]))
    .unwrap();
    adapter.gate_sites("Banff").send(Ok(sites.clone())).unwrap();
    app.select_park("Banff").await.unwrap();

    let shown = app.filter_camp_sites(FilterSelection::new(QualityLevel::Average, QualityLevel::Poor));
    assert_eq!(shown, vec![sites[0].clone()]);
    assert_eq!(app.camp_sites().park_summary().unwrap().free_site_count, 2);
}

#[tokio::test]
async fn late_response_of_older_search_is_discarded() {
    let adapter = Rc::new(GatedAdapter::default());
    let app = CampinApp::new(adapter.clone());
    let x_gate = adapter.gate_parks(date(7, 1));
    let y_gate = adapter.gate_parks(date(8, 1));
    let store = app.store().clone();

    let (x, y, ()) = tokio::join!(
        app.search_parks(request(date(7, 1), date(7, 5))),
        app.search_parks(request(date(8, 1), date(8, 5))),
        async move {
            y_gate.send(Ok(vec![Park::new("Y Park", 3)])).unwrap();
            while store.parks().is_empty() {
                tokio::task::yield_now().await;
            }
            x_gate.send(Ok(vec![Park::new("X Park", 9)])).unwrap();
        }
    );

    assert_eq!(x, Ok(SearchOutcome::Discarded));
    assert_eq!(park_names(&y.unwrap().applied().unwrap()), vec!["Y Park"]);
    assert_eq!(park_names(&app.store().parks()), vec!["Y Park"]);
    assert_eq!(park_names(&app.parks().displayed()), vec!["Y Park"]);
    assert_eq!(app.store().last_request().unwrap().request.start_date(), date(8, 1));
    assert_eq!(app.park_search().state(), SessionState::Succeeded);
}

#[tokio::test]
async fn superseded_search_resolving_first_is_discarded_too() {
    let adapter = Rc::new(GatedAdapter::default());
    let app = CampinApp::new(adapter.clone());
    let x_gate = adapter.gate_parks(date(7, 1));
    let y_gate = adapter.gate_parks(date(8, 1));

    let (x, y, ()) = tokio::join!(
        app.search_parks(request(date(7, 1), date(7, 5))),
        app.search_parks(request(date(8, 1), date(8, 5))),
        async move {
            x_gate.send(Ok(vec![Park::new("X Park", 9)])).unwrap();
            tokio::task::yield_now().await;
            y_gate.send(Ok(vec![Park::new("Y Park", 3)])).unwrap();
        }
    );

    assert_eq!(x, Ok(SearchOutcome::Discarded));
    assert!(!y.unwrap().is_discarded());
    assert_eq!(park_names(&app.store().parks()), vec!["Y Park"]);
}

#[tokio::test]
async fn failed_newer_search_keeps_previous_results() {
    let adapter = Rc::new(GatedAdapter::default());
    let app = CampinApp::new(adapter.clone());
    adapter.gate_parks(date(6, 1)).send(Ok(vec![Park::new("Algonquin", 5)])).unwrap();
    app.search_parks(request(date(6, 1), date(6, 3))).await.unwrap();

    let x_gate = adapter.gate_parks(date(7, 1));
    let y_gate = adapter.gate_parks(date(8, 1));
    let (x, y, ()) = tokio::join!(
        app.search_parks(request(date(7, 1), date(7, 5))),
        app.search_parks(request(date(8, 1), date(8, 5))),
        async move {
            y_gate.send(Err(QueryFailure::new(Some(503), "503 - Service Unavailable"))).unwrap();
            tokio::task::yield_now().await;
            x_gate.send(Ok(vec![Park::new("X Park", 9)])).unwrap();
        }
    );

    assert_eq!(x, Ok(SearchOutcome::Discarded));
    assert_eq!(y.unwrap_err().status(), Some(503));
    assert_eq!(park_names(&app.store().parks()), vec!["Algonquin"]);
    assert_eq!(app.park_search().state(), SessionState::Failed);
}

#[tokio::test]
async fn campsites_for_replaced_park_list_are_discarded() {
    let adapter = Rc::new(GatedAdapter::default());
    let app = CampinApp::new(adapter.clone());
    adapter.gate_parks(date(7, 1)).send(Ok(vec![Park::new("Banff", 12)])).unwrap();
    app.search_parks(request(date(7, 1), date(7, 5))).await.unwrap();

    let site_gate = adapter.gate_sites("Banff");
    adapter.gate_parks(date(8, 1)).send(Ok(vec![Park::new("Banff", 4)])).unwrap();
    let app = &app;
    let (sites, ()) = tokio::join!(app.select_park("Banff"), async move {
        tokio::task::yield_now().await;
        app.search_parks(request(date(8, 1), date(8, 5))).await.unwrap();
        site_gate.send(Ok(vec![graded_site("Banff", "1")])).unwrap();
    });

    assert_eq!(sites, Ok(SearchOutcome::Discarded));
    assert!(app.store().camp_sites_for("Banff").is_empty());
    assert!(app.camp_sites().all_sites().is_empty());
    assert!(app.camp_sites().displayed().is_empty());
}

#[tokio::test]
async fn shown_campsites_are_dropped_with_their_park_list() {
    let adapter = Rc::new(GatedAdapter::default());
    let app = CampinApp::new(adapter.clone());
    adapter.gate_parks(date(7, 1)).send(Ok(vec![Park::new("Banff", 12)])).unwrap();
    app.search_parks(request(date(7, 1), date(7, 5))).await.unwrap();
    adapter.gate_sites("Banff").send(Ok(vec![graded_site("Banff", "1")])).unwrap();
    app.select_park("Banff").await.unwrap();
    assert_eq!(site_numbers(&app.camp_sites().displayed()), vec!["1"]);

    adapter.gate_parks(date(8, 1)).send(Ok(vec![Park::new("Banff", 4)])).unwrap();
    app.search_parks(request(date(8, 1), date(8, 5))).await.unwrap();
    assert!(app.camp_sites().all_sites().is_empty());
    assert!(app.camp_sites().displayed().is_empty());
}

#[tokio::test]
async fn late_campsites_of_older_run_for_same_park_are_discarded() {
    let adapter = Rc::new(GatedAdapter::default());
    let app = CampinApp::new(adapter.clone());
    adapter.gate_parks(date(7, 1)).send(Ok(vec![Park::new("Banff", 12)])).unwrap();
    app.search_parks(request(date(7, 1), date(7, 5))).await.unwrap();

    let first_gate = adapter.gate_sites("Banff");
    let second_gate = adapter.gate_sites("Banff");
    let store = app.store().clone();
    let sessions = app.camp_site_search();

    let (first, second, ()) = tokio::join!(sessions.run_latest("Banff"), sessions.run_latest("Banff"), async move {
        second_gate.send(Ok(vec![graded_site("Banff", "2")])).unwrap();
        while store.camp_sites_for("Banff").is_empty() {
            tokio::task::yield_now().await;
        }
        first_gate.send(Ok(vec![graded_site("Banff", "1")])).unwrap();
    });

    assert_eq!(first, Ok(SearchOutcome::Discarded));
    assert_eq!(site_numbers(&second.unwrap().applied().unwrap()), vec!["2"]);
    assert_eq!(site_numbers(&app.store().camp_sites_for("Banff")), vec!["2"]);
    assert_eq!(sessions.state(), SessionState::Succeeded);
}

#[tokio::test]
async fn campsite_runs_for_different_parks_do_not_supersede_each_other() {
    let adapter = Rc::new(GatedAdapter::default());
    let app = CampinApp::new(adapter.clone());
    adapter.gate_parks(date(7, 1)).send(Ok(vec![Park::new("Banff", 12), Park::new("Jasper", 3)])).unwrap();
    app.search_parks(request(date(7, 1), date(7, 5))).await.unwrap();

    let banff_gate = adapter.gate_sites("Banff");
    let jasper_gate = adapter.gate_sites("Jasper");
    let sessions = app.camp_site_search();

    let (banff, jasper, ()) = tokio::join!(sessions.run_latest("Banff"), sessions.run_latest("Jasper"), async move {
        jasper_gate.send(Ok(vec![graded_site("Jasper", "7")])).unwrap();
        tokio::task::yield_now().await;
        banff_gate.send(Ok(vec![graded_site("Banff", "1")])).unwrap();
    });

    assert!(!banff.unwrap().is_discarded());
    assert!(!jasper.unwrap().is_discarded());
    assert_eq!(site_numbers(&app.store().camp_sites_for("Banff")), vec!["1"]);
    assert_eq!(site_numbers(&app.store().camp_sites_for("Jasper")), vec!["7"]);
}

#[tokio::test]
async fn reset_discards_park_search_in_flight() {
    let adapter = Rc::new(GatedAdapter::default());
    let app = CampinApp::new(adapter.clone());
    let gate = adapter.gate_parks(date(7, 1));
    let app = &app;

    let (outcome, ()) = tokio::join!(app.search_parks(request(date(7, 1), date(7, 5))), async move {
        tokio::task::yield_now().await;
        app.reset();
        gate.send(Ok(vec![Park::new("Banff", 12)])).unwrap();
    });

    assert_eq!(outcome, Ok(SearchOutcome::Discarded));
    assert!(app.store().parks().is_empty());
    assert!(app.store().last_request().is_none());
    assert_eq!(app.park_search().state(), SessionState::Idle);
}

#[tokio::test]
async fn campsite_search_needs_park_results() {
    let app = CampinApp::new(Rc::new(GatedAdapter::default()));
    assert_eq!(app.select_park("Banff").await, Err(SearchError::NoActiveSearch));
}
