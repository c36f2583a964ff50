//! # Search ViewModel Behavior Tests
//!
//! Drives the full debounce-and-lookup flow against a scripted backend under
//! tokio's paused clock, so every timing assertion is exact.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::repl::events::StateReceiver;
use crate::repl::models::{CardInfo, SearchState};
use crate::repl::services::lookup::{CardLookup, LookupError};
use crate::repl::view_models::SearchViewModel;

const DELAY: Duration = Duration::from_millis(2000);
const LATENCY: Duration = Duration::from_millis(100);

fn sample_card() -> CardInfo {
    CardInfo {
        scheme: Some("visa".to_string()),
        card_type: Some("debit".to_string()),
        ..CardInfo::default()
    }
}

/// Lookup backend with scripted outcomes and a query log.
/// Outcomes are consumed in order; once exhausted, every call succeeds.
struct ScriptedLookup {
    outcomes: Mutex<VecDeque<Result<CardInfo, LookupError>>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedLookup {
    fn new() -> Arc<Self> {
        Self::with_outcomes(Vec::new())
    }

    fn with_outcomes(outcomes: Vec<Result<CardInfo, LookupError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            queries: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CardLookup for ScriptedLookup {
    async fn find(&self, bin: &str) -> Result<CardInfo, LookupError> {
        self.queries.lock().unwrap().push(bin.to_string());
        tokio::time::sleep(LATENCY).await;
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(sample_card()))
    }
}

/// Record every state transition an observer would see
fn collect_states(mut rx: StateReceiver) -> Arc<Mutex<Vec<SearchState>>> {
    let states = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&states);
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            sink.lock().unwrap().push(rx.borrow_and_update().clone());
        }
    });
    states
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_clears_immediately_without_lookup() {
    let lookup = ScriptedLookup::new();
    let vm = SearchViewModel::new(lookup.clone(), DELAY).unwrap();
    let states = collect_states(vm.subscribe());

    vm.on_input_changed("   ").await;

    // Well past the quiet period: nothing else may happen
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(vm.state(), SearchState::Empty);
    assert_eq!(lookup.calls(), 0, "blank input must not reach the backend");
    assert_eq!(
        *states.lock().unwrap(),
        vec![SearchState::Empty],
        "exactly one transition, from the clear itself"
    );
}

#[tokio::test(start_paused = true)]
async fn test_burst_looks_up_only_the_latest_value() {
    let lookup = ScriptedLookup::new();
    let vm = SearchViewModel::new(lookup.clone(), DELAY).unwrap();
    let mut rx = vm.subscribe();

    vm.on_input_changed("4").await;
    tokio::time::sleep(Duration::from_millis(500)).await;
    vm.on_input_changed("41").await;
    tokio::time::sleep(Duration::from_millis(700)).await;
    vm.on_input_changed("411").await;

    rx.wait_for(|s| *s == SearchState::Loading).await.unwrap();
    rx.wait_for(|s| matches!(s, SearchState::Content(_)))
        .await
        .unwrap();
    assert_eq!(lookup.queries(), vec!["411"], "earlier inputs are discarded");
}

#[tokio::test(start_paused = true)]
async fn test_success_goes_loading_then_content() {
    let lookup = ScriptedLookup::new();
    let vm = SearchViewModel::new(lookup.clone(), DELAY).unwrap();
    let mut rx = vm.subscribe();

    vm.on_input_changed("45717360").await;

    rx.wait_for(|s| *s == SearchState::Loading).await.unwrap();
    let settled = rx
        .wait_for(|s| matches!(s, SearchState::Content(_)))
        .await
        .unwrap()
        .clone();
    assert_eq!(settled, SearchState::Content(sample_card()));
}

#[tokio::test(start_paused = true)]
async fn test_server_error_goes_loading_then_error() {
    let lookup =
        ScriptedLookup::with_outcomes(vec![Err(LookupError::Server { status: Some(500) })]);
    let vm = SearchViewModel::new(lookup.clone(), DELAY).unwrap();
    let mut rx = vm.subscribe();

    vm.on_input_changed("4571").await;

    rx.wait_for(|s| *s == SearchState::Loading).await.unwrap();
    rx.wait_for(|s| *s == SearchState::Error).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_no_internet_goes_loading_then_no_internet() {
    let lookup = ScriptedLookup::with_outcomes(vec![Err(LookupError::NoInternet)]);
    let vm = SearchViewModel::new(lookup.clone(), DELAY).unwrap();
    let mut rx = vm.subscribe();

    vm.on_input_changed("4571").await;

    rx.wait_for(|s| *s == SearchState::Loading).await.unwrap();
    rx.wait_for(|s| *s == SearchState::NoInternet).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_no_data_goes_loading_then_empty() {
    let lookup = ScriptedLookup::with_outcomes(vec![Err(LookupError::NoData)]);
    let vm = SearchViewModel::new(lookup.clone(), DELAY).unwrap();
    let mut rx = vm.subscribe();

    vm.on_input_changed("9999").await;

    rx.wait_for(|s| *s == SearchState::Loading).await.unwrap();
    rx.wait_for(|s| *s == SearchState::Empty).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_repeated_settled_input_issues_no_second_lookup() {
    let lookup = ScriptedLookup::new();
    let vm = SearchViewModel::new(lookup.clone(), DELAY).unwrap();
    let mut rx = vm.subscribe();

    vm.on_input_changed("4571").await;
    rx.wait_for(|s| matches!(s, SearchState::Content(_)))
        .await
        .unwrap();
    assert_eq!(lookup.calls(), 1);

    // Same text settles again: redundant, maps to Empty with no lookup
    vm.on_input_changed("4571").await;
    rx.wait_for(|s| *s == SearchState::Empty).await.unwrap();
    assert_eq!(lookup.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_clear_resets_last_issued_tracking() {
    let lookup = ScriptedLookup::new();
    let vm = SearchViewModel::new(lookup.clone(), DELAY).unwrap();
    let mut rx = vm.subscribe();

    vm.on_input_changed("4571").await;
    rx.wait_for(|s| matches!(s, SearchState::Content(_)))
        .await
        .unwrap();

    // Clearing forgets "4571"...
    vm.on_input_changed("").await;
    rx.wait_for(|s| *s == SearchState::Empty).await.unwrap();

    // ...so typing it again is a fresh search
    vm.on_input_changed("4571").await;
    rx.wait_for(|s| matches!(s, SearchState::Content(_)))
        .await
        .unwrap();
    assert_eq!(lookup.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_pending_work() {
    let lookup = ScriptedLookup::new();
    let vm = SearchViewModel::new(lookup.clone(), DELAY).unwrap();

    vm.on_input_changed("4571").await;
    vm.shutdown();

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(lookup.calls(), 0, "pending firing must die with its owner");
    assert_eq!(vm.state(), SearchState::Empty);
}
