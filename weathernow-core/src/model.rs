use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A geocoded place: the first/best match for a city search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

/// One day of the forecast, metric units as returned by the upstream API
/// (°C, mm, km/h).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub precipitation_mm: f64,
    pub wind_speed_max_kmh: f64,
    pub weather_code: i32,
}

/// A completed search: the resolved location plus exactly seven days of
/// forecast in ascending date order, index 0 = today.
///
/// Assembled only once both collaborator calls have succeeded; a failed
/// submission never produces a partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub location: Location,
    pub days: Vec<DailyForecast>,
}
