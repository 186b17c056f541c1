use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    Config,
    model::{DailyForecast, Location},
};

use super::{ForecastProvider, ProviderError};

/// Public Open-Meteo geocoding host. No API key required.
pub const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com";
/// Public Open-Meteo forecast host. No API key required.
pub const FORECAST_BASE_URL: &str = "https://api.open-meteo.com";

/// Fixed forecast horizon: seven daily aggregates, index 0 = today.
pub const FORECAST_DAYS: usize = 7;

/// Daily aggregates requested from the forecast endpoint, comma-joined.
const DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode,windspeed_10m_max";

/// Open-Meteo client implementing both halves of the search pipeline.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    http: Client,
    geocoding_base_url: String,
    forecast_base_url: String,
}

impl OpenMeteo {
    pub fn new() -> Self {
        Self::with_base_urls(GEOCODING_BASE_URL.to_owned(), FORECAST_BASE_URL.to_owned())
    }

    /// Point the client at alternative collaborator hosts (mirrors,
    /// self-hosted instances, test servers).
    pub fn with_base_urls(geocoding_base_url: String, forecast_base_url: String) -> Self {
        Self {
            http: Client::new(),
            geocoding_base_url,
            forecast_base_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_urls(config.geocoding_base_url(), config.forecast_base_url())
    }
}

impl Default for OpenMeteo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteo {
    async fn resolve_city(&self, name: &str) -> Result<Location, ProviderError> {
        let url = format!("{}/v1/search", self.geocoding_base_url);

        debug!("Geocoding city name: {name}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("name", name),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: GeocodingResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::Payload(format!("geocoding response is not valid JSON: {e}"))
        })?;

        let first = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(ProviderError::CityNotFound)?;

        debug!(
            "Resolved '{}' to {} ({:.4}, {:.4})",
            name, first.name, first.latitude, first.longitude
        );

        Ok(Location {
            latitude: first.latitude,
            longitude: first.longitude,
            name: first.name,
            country: first.country.unwrap_or_else(|| "Unknown".to_owned()),
        })
    }

    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<DailyForecast>, ProviderError> {
        let url = format!("{}/v1/forecast", self.forecast_base_url);

        debug!("Fetching daily forecast for ({latitude}, {longitude})");

        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let days = FORECAST_DAYS.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", lat.as_str()),
                ("longitude", lon.as_str()),
                ("daily", DAILY_VARIABLES),
                ("timezone", "auto"),
                ("forecast_days", days.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: ForecastResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::Payload(format!("forecast response is not valid JSON: {e}"))
        })?;

        daily_series(parsed.daily)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyData,
}

/// Parallel daily arrays as returned by the forecast endpoint,
/// index-aligned by day.
#[derive(Debug, Deserialize)]
struct DailyData {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_sum: Vec<f64>,
    weathercode: Vec<i32>,
    windspeed_10m_max: Vec<f64>,
}

/// Zip the parallel arrays into per-day entries, enforcing the seven-day,
/// index-aligned, strictly-ascending-date contract. Any violation fails the
/// whole request; there is no partial-day fallback.
fn daily_series(daily: DailyData) -> Result<Vec<DailyForecast>, ProviderError> {
    let len = daily.time.len();
    if len != FORECAST_DAYS {
        return Err(ProviderError::Payload(format!(
            "expected {FORECAST_DAYS} forecast days, got {len}"
        )));
    }

    let aligned = [
        daily.temperature_2m_max.len(),
        daily.temperature_2m_min.len(),
        daily.precipitation_sum.len(),
        daily.weathercode.len(),
        daily.windspeed_10m_max.len(),
    ]
    .iter()
    .all(|&l| l == len);

    if !aligned {
        return Err(ProviderError::Payload(
            "daily series have mismatched lengths".to_owned(),
        ));
    }

    let mut days: Vec<DailyForecast> = Vec::with_capacity(len);
    for i in 0..len {
        let date = NaiveDate::parse_from_str(&daily.time[i], "%Y-%m-%d").map_err(|e| {
            ProviderError::Payload(format!("bad forecast date '{}': {e}", daily.time[i]))
        })?;

        if let Some(prev) = days.last() {
            if date <= prev.date {
                return Err(ProviderError::Payload(format!(
                    "forecast dates are not strictly increasing at '{}'",
                    daily.time[i]
                )));
            }
        }

        days.push(DailyForecast {
            date,
            temp_max_c: daily.temperature_2m_max[i],
            temp_min_c: daily.temperature_2m_min[i],
            precipitation_mm: daily.precipitation_sum[i],
            wind_speed_max_kmh: daily.windspeed_10m_max[i],
            weather_code: daily.weathercode[i],
        });
    }

    Ok(days)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_owned()
    }
}
