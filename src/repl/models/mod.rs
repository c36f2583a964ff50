//! # Models Module
//!
//! Data carried through the search flow: the card metadata returned by the
//! lookup service and the view state projected from it.

pub mod card_info;
pub mod search_state;

// Re-export all models for easy access
pub use card_info::{Bank, CardInfo, Country, NumberInfo};
pub use search_state::SearchState;
