use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrentWeather {
    pub temperature_c: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_kph: Option<i64>,
    pub precipitation_chance: Option<f64>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AirQuality {
    pub pm10: Option<f64>,
    pub pm2_5: Option<f64>,
}

/// The joined weather + air-quality view returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherBulletin {
    pub weather: Option<CurrentWeather>,
    pub air_quality: Option<AirQuality>,
}

/// Fixed weather-code table (WMO codes) mapped to human text.
pub fn weather_code_text(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Rain",
        65 => "Heavy rain",
        71 => "Slight snow",
        73 => "Snow",
        75 => "Heavy snow",
        95 => "Thunderstorm",
        _ => "Weather available",
    }
}

/// Wind arrives in m/s and is displayed in km/h.
pub fn wind_kph(wind_ms: f64) -> i64 {
    (wind_ms * 3.6).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_fixed_text() {
        assert_eq!(weather_code_text(0), "Clear sky");
        assert_eq!(weather_code_text(95), "Thunderstorm");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(weather_code_text(42), "Weather available");
    }

    #[test]
    fn wind_converts_meters_per_second_to_kph() {
        assert_eq!(wind_kph(3.2), 12);
        assert_eq!(wind_kph(0.0), 0);
    }
}
