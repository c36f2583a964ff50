//! # MVVM Architecture Implementation
//!
//! This module contains the MVVM implementation for binlook.
//! All components are designed with clear separation of concerns and testability:
//! models hold data, services talk to the outside world, the view model owns
//! the debounce-and-lookup flow, and the controller wires user input to it.

pub mod controllers;
pub mod events;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use events::{SearchEvent, StateReceiver};
pub use models::{CardInfo, SearchState};
pub use services::{BinlistClient, CardLookup, DebounceError, Debouncer, LookupError};
pub use view_models::SearchViewModel;
pub use views::StateRenderer;
