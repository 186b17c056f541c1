//! WMO weather code translation.
//!
//! Open-Meteo reports conditions as small integer codes. The two mappings
//! below are pure data; `describe` is total over all integers so the
//! renderer can never fail on a code it has not seen before.

/// Display text and symbol for one weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditions {
    pub text: &'static str,
    pub symbol: &'static str,
}

/// Translate a weather code into its display pair.
///
/// Unknown codes map to the `"Unknown"` / thermometer fallback instead of
/// failing.
#[must_use]
pub fn describe(code: i32) -> Conditions {
    Conditions {
        text: description(code),
        symbol: symbol(code),
    }
}

fn description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        95 => "Thunderstorm",
        96 => "Thunderstorm with hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

fn symbol(code: i32) -> &'static str {
    match code {
        0 => "☀️",
        1 => "🌤️",
        2 => "⛅",
        3 => "☁️",
        45 | 48 => "🌫️",
        51 | 53 => "🌦️",
        55 | 61 | 63 => "🌧️",
        65 => "⛈️",
        71 => "🌨️",
        73 | 75 => "❄️",
        95 | 96 | 99 => "⛈️",
        _ => "🌡️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sky() {
        assert_eq!(describe(0), Conditions { text: "Clear sky", symbol: "☀️" });
    }

    #[test]
    fn mainly_clear_and_cloud_cover() {
        assert_eq!(describe(1).text, "Mainly clear");
        assert_eq!(describe(1).symbol, "🌤️");
        assert_eq!(describe(2).text, "Partly cloudy");
        assert_eq!(describe(2).symbol, "⛅");
        assert_eq!(describe(3).text, "Overcast");
        assert_eq!(describe(3).symbol, "☁️");
    }

    #[test]
    fn fog_codes_share_symbol() {
        assert_eq!(describe(45).text, "Fog");
        assert_eq!(describe(48).text, "Rime fog");
        assert_eq!(describe(45).symbol, "🌫️");
        assert_eq!(describe(48).symbol, "🌫️");
    }

    #[test]
    fn drizzle() {
        assert_eq!(describe(51).text, "Light drizzle");
        assert_eq!(describe(53).text, "Moderate drizzle");
        assert_eq!(describe(55).text, "Dense drizzle");
        assert_eq!(describe(51).symbol, "🌦️");
        assert_eq!(describe(53).symbol, "🌦️");
        assert_eq!(describe(55).symbol, "🌧️");
    }

    #[test]
    fn rain() {
        assert_eq!(describe(61).text, "Slight rain");
        assert_eq!(describe(63).text, "Moderate rain");
        assert_eq!(describe(65).text, "Heavy rain");
        assert_eq!(describe(61).symbol, "🌧️");
        assert_eq!(describe(63).symbol, "🌧️");
        assert_eq!(describe(65).symbol, "⛈️");
    }

    #[test]
    fn snow() {
        assert_eq!(describe(71).text, "Slight snow");
        assert_eq!(describe(73).text, "Moderate snow");
        assert_eq!(describe(75).text, "Heavy snow");
        assert_eq!(describe(71).symbol, "🌨️");
        assert_eq!(describe(73).symbol, "❄️");
        assert_eq!(describe(75).symbol, "❄️");
    }

    #[test]
    fn thunderstorms() {
        assert_eq!(describe(95).text, "Thunderstorm");
        assert_eq!(describe(96).text, "Thunderstorm with hail");
        assert_eq!(describe(99).text, "Thunderstorm with heavy hail");
        for code in [95, 96, 99] {
            assert_eq!(describe(code).symbol, "⛈️");
        }
    }

    #[test]
    fn unknown_codes_fall_back_without_panicking() {
        let fallback = Conditions { text: "Unknown", symbol: "🌡️" };
        // 77 (snow grains) is reported by the API but deliberately not in
        // the known set.
        for code in [-1, 4, 44, 77, 100, i32::MIN, i32::MAX] {
            assert_eq!(describe(code), fallback);
        }
    }
}
