//! Failure kinds of a single weather fetch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("city name is empty")]
    Validation,

    #[error("city name cannot be encoded into a request URL: {0}")]
    Encoding(String),

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("server responded with status {status}")]
    Server { status: u16 },

    #[error("failed to decode weather data: {0}")]
    Decoding(#[from] serde_json::Error),
}

impl FetchError {
    /// Message shown to the user in place of a report.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation => "Please enter a city name / 都市名を入力してください".to_string(),
            Self::Encoding(_) => "Invalid city name / 無効な都市名です".to_string(),
            Self::Network(err) => format!("Network error: {err} / ネットワークエラー"),
            Self::Server { status } => format!("Server error (code: {status}) / サーバーエラー"),
            Self::Decoding(_) => {
                "Failed to decode weather data / 天気データの解析に失敗しました".to_string()
            }
        }
    }

    /// HTTP status for `Server` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status } => Some(*status),
            _ => None,
        }
    }
}
