//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Local-language city name resolution
//! - The OpenWeather current-conditions fetcher and its error kinds
//! - A single-owner view state for displaying the latest lookup
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod city;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod state;

pub use city::resolve_city;
pub use config::Config;
pub use error::FetchError;
pub use model::{Condition, FetchRequest, WeatherReport};
pub use provider::{
    WeatherProvider,
    openweather::{OpenWeatherProvider, decode_current},
    provider_from_config,
};
pub use state::{RequestId, WeatherController, WeatherState};
