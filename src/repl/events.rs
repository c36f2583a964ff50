//! Event types for the search flow
//!
//! The view model publishes every state transition through a `watch` channel
//! so observers always see exactly one current state, and consumes its own
//! inbox of [`SearchEvent`]s on a single worker task. Routing both the
//! debouncer firings and explicit clears through that inbox keeps the state
//! cell single-writer.

use tokio::sync::watch;

use crate::repl::models::SearchState;

/// Receiver half of the observable state cell.
///
/// Holds exactly one current [`SearchState`] at any time; `changed()` wakes
/// observers on every transition.
pub type StateReceiver = watch::Receiver<SearchState>;

/// Messages consumed by the search view model's worker task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Blank input: reset the last-issued tracking and show nothing
    Clear,
    /// The debouncer settled on a value after a quiet period
    Settled(String),
}
