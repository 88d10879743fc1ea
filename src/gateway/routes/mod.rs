//! Route Handlers
//!
//! One module per endpoint group.

pub mod health;
pub mod records;
