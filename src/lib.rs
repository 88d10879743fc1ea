//! # SENSE Data Market
//!
//! API gateway and dashboard host for the SENSE data market, a small
//! commerce platform for sensory/emotion records.
//!
//! The gateway serves the built `sense-ui` assets and proxies the
//! `/api/records` surface to the record backend, which owns all storage.
//! The gateway itself holds no state beyond a shared HTTP client.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`gateway`]: Axum router, handlers, and error mapping
//! - [`record`]: the `Record` data model shared by the proxy handlers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sense_market::config::Config;
//! use sense_market::gateway::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::new(config)?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod gateway;
pub mod record;

// Re-export top-level types for convenience
pub use config::{BackendConfig, Config, ConfigError, GatewayConfig, LoggingConfig};
pub use gateway::{build_router, serve, AppState, GatewayError, GatewayResult};
pub use record::{NewRecord, Record};
