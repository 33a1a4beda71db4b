use crate::{
    Config, FetchError, FetchRequest, WeatherReport, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// One request/response/decode cycle. Never retried.
    async fn fetch(&self, request: &FetchRequest) -> Result<WeatherReport, FetchError>;

    async fn fetch_city(&self, city: &str) -> Result<WeatherReport, FetchError> {
        self.fetch(&FetchRequest::new(city)).await
    }
}

/// Construct the OpenWeather provider from config.
///
/// A missing API key is not an error here; the server rejects the request
/// and the caller sees a `Server` error.
pub fn provider_from_config(config: &Config) -> Arc<dyn WeatherProvider> {
    Arc::new(OpenWeatherProvider::from_config(config))
}
