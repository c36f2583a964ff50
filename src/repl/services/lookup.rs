//! Lookup collaborator boundary
//!
//! The view model consumes card lookups through this narrow interface and
//! never sees transport concerns. Backends are injected as
//! `Arc<dyn CardLookup>` (plain constructor injection).

use async_trait::async_trait;
use thiserror::Error;

use crate::repl::models::CardInfo;

/// Failure kinds a lookup backend can report.
///
/// All three are terminal, user-visible outcomes; nothing is retried
/// automatically. A retry only happens when the user types again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The service answered, but with a failure
    #[error("lookup service error (status {status:?})")]
    Server { status: Option<u16> },
    /// The service has no metadata for the queried BIN
    #[error("no card data found")]
    NoData,
    /// The service could not be reached
    #[error("no internet connection")]
    NoInternet,
}

/// A downstream card metadata lookup
#[async_trait]
pub trait CardLookup: Send + Sync {
    /// Fetch metadata for a BIN prefix
    async fn find(&self, bin: &str) -> Result<CardInfo, LookupError>;
}
