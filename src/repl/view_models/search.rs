//! # Search ViewModel
//!
//! Coordinates typed input, the debouncer, and the lookup backend, and
//! publishes exactly one [`SearchState`] at a time. All state writes happen
//! on one worker task; the debouncer's firings and explicit clears arrive
//! through the same inbox, so transitions are serialized by construction.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};

use crate::repl::events::{SearchEvent, StateReceiver};
use crate::repl::models::{CardInfo, SearchState};
use crate::repl::services::debounce::{DebounceError, Debouncer};
use crate::repl::services::lookup::{CardLookup, LookupError};

/// View model for the BIN search screen
pub struct SearchViewModel {
    debouncer: Debouncer,
    events_tx: mpsc::Sender<SearchEvent>,
    state_rx: StateReceiver,
    worker: JoinHandle<()>,
}

impl SearchViewModel {
    /// Create the view model with an injected lookup backend.
    ///
    /// `delay` is the quiet period typed input must survive before a lookup
    /// is issued. Must be called from within a tokio runtime.
    pub fn new(lookup: Arc<dyn CardLookup>, delay: Duration) -> Result<Self, DebounceError> {
        let (state_tx, state_rx) = watch::channel(SearchState::Empty);
        let (events_tx, events_rx) = mpsc::channel(32);

        // The debouncer's action forwards settled values into the worker's
        // inbox. The debounce throttles to one firing per quiet period, so
        // the channel cannot realistically fill; if it somehow does, dropping
        // the firing beats blocking the dispatcher.
        let settled_tx = events_tx.clone();
        let debouncer = Debouncer::spawn(delay, true, move |text| {
            if settled_tx.try_send(SearchEvent::Settled(text)).is_err() {
                tracing::warn!("Search inbox unavailable, dropping settled input");
            }
        })?;

        let worker = tokio::spawn(run_search(events_rx, state_tx, lookup));

        Ok(Self {
            debouncer,
            events_tx,
            state_rx,
            worker,
        })
    }

    /// Observe state transitions. Each receiver always sees the current state.
    pub fn subscribe(&self) -> StateReceiver {
        self.state_rx.clone()
    }

    /// Read the current state
    pub fn state(&self) -> SearchState {
        self.state_rx.borrow().clone()
    }

    /// Feed the latest text the user typed.
    ///
    /// Blank input clears the screen immediately and resets the last-issued
    /// tracking; the debouncer is not involved. Anything else restarts the
    /// quiet period.
    pub async fn on_input_changed(&self, text: &str) {
        if text.trim().is_empty() {
            if self.events_tx.send(SearchEvent::Clear).await.is_err() {
                tracing::warn!("Search worker gone, ignoring clear");
            }
            return;
        }
        self.debouncer.submit(text).await;
    }

    /// Tear the view model down: pending firings and in-flight lookups are
    /// cancelled, never completing against a dead screen.
    pub fn shutdown(&self) {
        self.debouncer.shutdown();
        self.worker.abort();
    }
}

/// Single-writer worker: consumes events in order, issues lookups, publishes
/// states. Lookups run on their own tasks so a slow backend never delays the
/// next settled input; completions publish in the order they finish.
async fn run_search(
    mut events: mpsc::Receiver<SearchEvent>,
    state: watch::Sender<SearchState>,
    lookup: Arc<dyn CardLookup>,
) {
    // The last expression a lookup was issued for; settled input equal to it
    // is redundant and maps to Empty without a new lookup.
    let mut last_expression = String::new();
    let mut in_flight: JoinSet<Result<CardInfo, LookupError>> = JoinSet::new();

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(SearchEvent::Clear) => {
                    last_expression.clear();
                    publish(&state, SearchState::Empty);
                }
                Some(SearchEvent::Settled(text)) => {
                    if text.trim().is_empty() || text == last_expression {
                        publish(&state, SearchState::Empty);
                    } else {
                        last_expression = text.clone();
                        publish(&state, SearchState::Loading);
                        let lookup = Arc::clone(&lookup);
                        in_flight.spawn(async move { lookup.find(&text).await });
                    }
                }
                None => break,
            },
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                let next = match joined {
                    Ok(Ok(card)) => SearchState::Content(card),
                    Ok(Err(LookupError::Server { status })) => {
                        tracing::debug!("Lookup failed server-side (status {:?})", status);
                        SearchState::Error
                    }
                    Ok(Err(LookupError::NoData)) => SearchState::Empty,
                    Ok(Err(LookupError::NoInternet)) => SearchState::NoInternet,
                    Err(err) => {
                        tracing::warn!("Lookup task failed: {}", err);
                        SearchState::Error
                    }
                };
                publish(&state, next);
            }
        }
    }
}

fn publish(state: &watch::Sender<SearchState>, next: SearchState) {
    tracing::debug!("Search state -> {}", next.label());
    state.send_replace(next);
}
