//! # Views Module
//!
//! Text rendering of search states. The view layer knows nothing about
//! debouncing or lookups; it only turns the current state into output.

pub mod renderer;

pub use renderer::StateRenderer;
