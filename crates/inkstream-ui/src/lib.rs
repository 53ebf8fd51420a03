//! Inkstream UI Components
//!
//! Shared Dioxus form controls used across the desktop app's pages:
//! buttons, text inputs, textareas, and selects, all styled through the
//! app-level stylesheet classes.

pub mod components;

pub use components::*;
