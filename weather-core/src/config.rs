use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable that overrides the API key stored on disk.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_LANG: &str = "ja";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// lang = "ja"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Override of the current-weather endpoint.
    pub base_url: Option<String>,

    /// Language tag for condition descriptions.
    pub lang: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key to send with every request.
    ///
    /// `OPENWEATHER_API_KEY` wins over the file. With neither set this is an
    /// empty string and the server will reject the request.
    pub fn api_key(&self) -> String {
        resolve_api_key(self.api_key.as_deref(), std::env::var(API_KEY_ENV).ok())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn set_lang(&mut self, lang: String) {
        self.lang = Some(lang);
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key().is_empty()
    }
}

fn resolve_api_key(from_file: Option<&str>, from_env: Option<String>) -> String {
    from_env
        .filter(|key| !key.trim().is_empty())
        .or_else(|| from_file.map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::default();

        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.lang(), "ja");
    }

    #[test]
    fn env_key_overrides_file_key() {
        let key = resolve_api_key(Some("FILE_KEY"), Some("ENV_KEY".into()));
        assert_eq!(key, "ENV_KEY");
    }

    #[test]
    fn blank_env_key_falls_back_to_file() {
        let key = resolve_api_key(Some("FILE_KEY"), Some("  ".into()));
        assert_eq!(key, "FILE_KEY");
    }

    #[test]
    fn missing_key_is_empty_string() {
        assert_eq!(resolve_api_key(None, None), "");
    }

    #[test]
    fn load_from_missing_file_returns_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("nope.toml")).expect("load");

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_api_key("OPEN_KEY".into());
        cfg.set_lang("en".into());
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.lang(), "en");
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_key = [").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
