//! # binlook - Live BIN Lookup for the Terminal
//!
//! Type the first digits of a payment card and get issuer metadata back.
//! Input is debounced so the remote service is queried at most once per
//! pause in typing, with only the latest value looked up.
//!
//! ## Architecture
//!
//! This crate follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    States     ┌──────────────┐    Outcomes   ┌──────────┐
//! │    View     │◄──────────────│  ViewModel   │◄──────────────│ Services │
//! │             │               │              │               │          │
//! │ - Renderer  │               │ - Debounce   │               │ - Lookup │
//! │ - Prompt    │               │ - State      │               │ - HTTP   │
//! └─────────────┘               │   projection │               └──────────┘
//!        ▲                      └──────────────┘
//!        │ Input lines                 ▲
//!        ▼                             │
//! ┌──────────────┐    on_input_changed │
//! │  Controller  │─────────────────────┘
//! │              │
//! │ - Line loop  │
//! │ - Quit       │
//! └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
