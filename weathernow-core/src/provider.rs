use crate::{
    Config,
    model::{DailyForecast, Location},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

pub use open_meteo::OpenMeteo;

/// Errors produced by a forecast provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The geocoding search yielded zero results.
    #[error("city not found")]
    CityNotFound,

    /// The request could not be completed at the transport level.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The collaborator answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response arrived but did not have the promised shape.
    #[error("{0}")]
    Payload(String),
}

/// Abstraction over the two sequential collaborator calls of one search.
///
/// A submission first resolves the city, then (only on success) fetches the
/// daily forecast for the resolved coordinates.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Resolve a free-text city name to its single best-match location.
    ///
    /// The name is passed through verbatim apart from percent-encoding.
    async fn resolve_city(&self, name: &str) -> Result<Location, ProviderError>;

    /// Fetch seven days of daily aggregates for the given coordinates,
    /// ascending by date starting today.
    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<DailyForecast>, ProviderError>;
}

/// Construct the default provider from config.
pub fn provider_from_config(config: &Config) -> Box<dyn ForecastProvider> {
    Box::new(OpenMeteo::from_config(config))
}
