//! View state for the search screen
//!
//! Exactly one state is active at any time. Transitions are driven only by
//! the view model: a settled input, an explicit clear, or a lookup outcome.

use crate::repl::models::CardInfo;

/// What the search screen should show right now
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    /// Nothing to show: initial state, cleared input, or no data found
    #[default]
    Empty,
    /// A lookup is in flight
    Loading,
    /// The lookup service reported a failure
    Error,
    /// The lookup service could not be reached
    NoInternet,
    /// Card metadata ready to display
    Content(CardInfo),
}

impl SearchState {
    /// Stable name for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loading => "loading",
            Self::Error => "error",
            Self::NoInternet => "no-internet",
            Self::Content(_) => "content",
        }
    }
}
