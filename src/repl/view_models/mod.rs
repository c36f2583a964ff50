//! # ViewModel Module
//!
//! The view model owns the whole search flow: debounce the typed input,
//! issue lookups, and project outcomes into the observable state cell.

mod search;

#[cfg(test)]
mod tests;

// Re-export the main ViewModel
pub use search::SearchViewModel;
