//! Terminal rendering of the request state: one line for errors and
//! loading, a header plus seven daily cards for a successful search.

use chrono::NaiveDate;
use weathernow_core::{DailyForecast, ForecastResult, RequestState, describe};

/// Loading indicator shown while a submission is in flight.
pub const LOADING_LINE: &str = "🔍 Searching for weather data...";

/// Render a request state as terminal output.
pub fn state(state: &RequestState) -> String {
    match state {
        RequestState::Idle => String::new(),
        RequestState::Loading => format!("{LOADING_LINE}\n"),
        RequestState::Error(message) => format!("❌ {message}\n"),
        RequestState::Success(result) => forecast(result),
    }
}

/// City header plus one card per forecast day.
fn forecast(result: &ForecastResult) -> String {
    let mut out = format!(
        "📍 {}, {}\n7-Day Weather Forecast\n\n",
        result.location.name, result.location.country
    );

    for (index, day) in result.days.iter().enumerate() {
        out.push_str(&card(index, day));
        out.push('\n');
    }

    out
}

fn card(index: usize, day: &DailyForecast) -> String {
    let conditions = describe(day.weather_code);
    format!(
        "{}, {}\n  {} {}\n  {:.0}°C / {:.0}°C\n  🌧️ {:.1}mm  💨 {:.0} km/h\n",
        day_label(index, day.date),
        long_date(day.date),
        conditions.symbol,
        conditions.text,
        day.temp_max_c,
        day.temp_min_c,
        day.precipitation_mm,
        day.wind_speed_max_kmh,
    )
}

/// "Today" for the first card, the weekday name for the rest.
fn day_label(index: usize, date: NaiveDate) -> String {
    if index == 0 {
        "Today".to_owned()
    } else {
        date.format("%A").to_string()
    }
}

/// US-English long form, e.g. "January 5, 2024".
fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
