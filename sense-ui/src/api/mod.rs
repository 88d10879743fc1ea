//! API Layer
//!
//! HTTP client functions for the gateway's record API.

pub mod client;

pub use client::{fetch_records, get_api_base, submit_record};
