use chrono::{DateTime, Utc};
use serde::Serialize;

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// One user-triggered lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    city_query: String,
}

impl FetchRequest {
    /// Surrounding whitespace is dropped; nothing else about the input changes.
    pub fn new(city_query: impl AsRef<str>) -> Self {
        Self {
            city_query: city_query.as_ref().trim().to_string(),
        }
    }

    pub fn city_query(&self) -> &str {
        &self.city_query
    }

    pub fn is_empty(&self) -> bool {
        self.city_query.is_empty()
    }
}

/// The first entry of the payload's `weather` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Current conditions for one location, decoded from a single response.
///
/// Fields are private so a report cannot be altered after decoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    location_name: String,
    temperature: f64,
    feels_like: f64,
    humidity: i64,
    pressure_hpa: i64,
    wind_speed: f64,
    condition: Option<Condition>,
    fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        location_name: String,
        temperature: f64,
        feels_like: f64,
        humidity: i64,
        pressure_hpa: i64,
        wind_speed: f64,
        condition: Option<Condition>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            location_name,
            temperature,
            feels_like,
            humidity,
            pressure_hpa,
            wind_speed,
            condition,
            fetched_at,
        }
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    /// Degrees Celsius.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Degrees Celsius.
    pub fn feels_like(&self) -> f64 {
        self.feels_like
    }

    /// Relative humidity, percent.
    pub fn humidity(&self) -> i64 {
        self.humidity
    }

    pub fn pressure_hpa(&self) -> i64 {
        self.pressure_hpa
    }

    /// Metres per second.
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    /// `None` when the API returned an empty `weather` list.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn condition_id(&self) -> Option<i64> {
        self.condition.as_ref().map(|c| c.id)
    }

    pub fn condition_main(&self) -> Option<&str> {
        self.condition.as_ref().map(|c| c.main.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.condition.as_ref().map(|c| c.description.as_str())
    }

    pub fn icon_code(&self) -> Option<&str> {
        self.condition.as_ref().map(|c| c.icon.as_str())
    }

    /// Image URL for the condition icon, at 2x size.
    pub fn icon_url(&self) -> Option<String> {
        self.icon_code()
            .map(|icon| format!("{ICON_BASE_URL}/{icon}@2x.png"))
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
