//! Core library for the `weathernow` CLI.
//!
//! This crate defines:
//! - Configuration & endpoint handling
//! - The geocode-then-forecast provider abstraction
//! - Shared domain models, the weather-code translator, and the request
//!   state machine
//!
//! It is used by `weathernow-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod model;
pub mod provider;
pub mod state;

pub use codes::{Conditions, describe};
pub use config::{Config, Endpoints};
pub use model::{DailyForecast, ForecastResult, Location};
pub use provider::{ForecastProvider, OpenMeteo, ProviderError, provider_from_config};
pub use state::{RequestState, WeatherSearch};
