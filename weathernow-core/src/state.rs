//! Request state machine for the search pipeline.
//!
//! `Idle → Loading → {Success, Error} → Loading → …`: each new submission
//! re-enters `Loading` regardless of the prior terminal state. The state is
//! a single tagged union replaced wholesale on every transition, never
//! mutated in place, so transitions are testable by equality on the value.

use tracing::warn;

use crate::{
    model::ForecastResult,
    provider::{ForecastProvider, ProviderError},
};

/// Validation message for empty or whitespace-only input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a city name";
/// Message shown when the geocoding step fails for any reason.
pub const CITY_NOT_FOUND_MESSAGE: &str = "Failed to find city";
/// Default message for transport failures in the forecast step.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

/// The single request state owned by the controller. Exactly one variant is
/// active at a time; a stale result never renders alongside `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(ForecastResult),
}

impl RequestState {
    /// The synchronous transition applied at submission time, before any
    /// network call: empty input surfaces the validation message, anything
    /// else clears the prior result and enters `Loading`.
    #[must_use]
    pub fn on_submit(&self, input: &str) -> RequestState {
        if input.trim().is_empty() {
            RequestState::Error(EMPTY_INPUT_MESSAGE.to_owned())
        } else {
            RequestState::Loading
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Sequences the geocode-then-forecast pipeline and holds the resulting
/// request state.
///
/// The two collaborator calls of one submission are strictly sequential;
/// the forecast fetch only runs once the geocoder has succeeded. There is
/// no cancellation, retry, or request fencing: every submission that starts
/// runs to completion and unconditionally writes its terminal state, so the
/// most recent write wins.
#[derive(Debug)]
pub struct WeatherSearch {
    provider: Box<dyn ForecastProvider>,
    state: RequestState,
}

impl WeatherSearch {
    pub fn new(provider: Box<dyn ForecastProvider>) -> Self {
        Self {
            provider,
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Submit a city name.
    ///
    /// Empty or whitespace-only input surfaces the validation message
    /// without touching the network. Anything else enters `Loading`, runs
    /// the two collaborator calls in order, and ends in `Success` or
    /// `Error`. The controller is always interactive again afterwards.
    pub async fn submit(&mut self, input: &str) -> &RequestState {
        self.state = self.state.on_submit(input);
        if !self.state.is_loading() {
            return &self.state;
        }

        self.state = self.run_pipeline(input).await;
        &self.state
    }

    async fn run_pipeline(&self, input: &str) -> RequestState {
        // The city name goes upstream verbatim; only the transport layer
        // percent-encodes it.
        let location = match self.provider.resolve_city(input).await {
            Ok(location) => location,
            Err(err) => {
                warn!("Geocoding '{input}' failed: {err}");
                return RequestState::Error(CITY_NOT_FOUND_MESSAGE.to_owned());
            }
        };

        match self
            .provider
            .daily_forecast(location.latitude, location.longitude)
            .await
        {
            Ok(days) => RequestState::Success(ForecastResult { location, days }),
            Err(err) => {
                warn!("Forecast fetch failed: {err}");
                RequestState::Error(fetch_error_message(&err))
            }
        }
    }
}

/// Payload-shape failures carry an actionable message of their own; raw
/// transport failures collapse to the default message.
fn fetch_error_message(err: &ProviderError) -> String {
    match err {
        ProviderError::Payload(msg) => msg.clone(),
        _ => FETCH_FAILED_MESSAGE.to_owned(),
    }
}
