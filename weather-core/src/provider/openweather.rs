use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, instrument, trace, warn};

use crate::{
    FetchError,
    city::resolve_city,
    config::{Config, DEFAULT_BASE_URL, DEFAULT_LANG},
    model::{Condition, FetchRequest, WeatherReport},
};

use super::WeatherProvider;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    lang: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_BASE_URL, DEFAULT_LANG)
    }

    pub fn with_endpoint(api_key: String, base_url: &str, lang: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.to_string(),
            lang: lang.to_string(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_endpoint(config.api_key(), config.base_url(), config.lang())
    }

    /// Full request URL for an already-resolved city name.
    pub fn request_url(&self, city: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", self.lang.as_str()),
            ],
        )
        .map_err(|err| FetchError::Encoding(err.to_string()))
    }
}

impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .field("lang", &self.lang)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: i64,
    pressure: i64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl From<OwCurrentResponse> for WeatherReport {
    fn from(parsed: OwCurrentResponse) -> Self {
        let condition = parsed.weather.into_iter().next().map(|w| Condition {
            id: w.id,
            main: w.main,
            description: w.description,
            icon: w.icon,
        });

        WeatherReport::new(
            parsed.name,
            parsed.main.temp,
            parsed.main.feels_like,
            parsed.main.humidity,
            parsed.main.pressure,
            parsed.wind.speed,
            condition,
            Utc::now(),
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip_all, fields(city = request.city_query()))]
    async fn fetch(&self, request: &FetchRequest) -> Result<WeatherReport, FetchError> {
        if request.is_empty() {
            return Err(FetchError::Validation);
        }

        let city = resolve_city(request.city_query());
        let url = self.request_url(city)?;

        debug!(query = city, endpoint = %self.base_url, lang = %self.lang, "requesting current weather");

        // The request URL carries the API key, so it is stripped from transport errors.
        let res = self.http.get(url).send().await.map_err(|err| {
            let err = err.without_url();
            warn!(error = %err, "weather request failed");
            FetchError::Network(err)
        })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %truncate_body(&body), "weather request rejected");
            return Err(FetchError::Server {
                status: status.as_u16(),
            });
        }

        let body = res
            .text()
            .await
            .map_err(|err| FetchError::Network(err.without_url()))?;
        trace!(body = %body, "weather response");

        decode_current(&body).inspect_err(|err| {
            warn!(error = %err, "weather response did not match the expected schema");
        })
    }
}

/// Decode a current-weather response body.
///
/// Either every required field is present and well-typed, or nothing is built.
pub fn decode_current(body: &str) -> Result<WeatherReport, FetchError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;
    Ok(parsed.into())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
