//! State Management
//!
//! Global application state built on Leptos signals.

pub mod global;

pub use global::{provide_global_state, GlobalState, NewRecord, Record};
