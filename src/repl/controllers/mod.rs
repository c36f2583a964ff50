//! # Controllers Module
//!
//! The controller owns the input loop: it feeds typed lines to the view
//! model and renders every state transition it observes.

pub mod app_controller;

pub use app_controller::AppController;
