//! Pages
//!
//! Top-level page components for each route.

pub mod home;

pub use home::Home;
