//! # Services Layer
//!
//! Services encapsulate the operations the view model coordinates but does
//! not perform itself: deferring work until input settles, and fetching card
//! metadata from the outside world.
//!
//! Services should only exist when they add real value by:
//! - Managing their own state (like Debouncer with its pending invocation)
//! - Abstracting external resources (like the lookup backends)

pub mod binlist;
pub mod debounce;
pub mod lookup;

// Re-export service types
pub use binlist::BinlistClient;
pub use debounce::{DebounceError, Debouncer};
pub use lookup::{CardLookup, LookupError};
