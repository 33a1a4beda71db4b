use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_core::{Config, WeatherController, city::known_cities, provider_from_config};

use crate::render::{render_report, render_state};

const DEFAULT_CITY: &str = "Tokyo";
const QUIT: &str = ":q";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city / 天気アプリ")]
pub struct Cli {
    /// Log request details to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and description language.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, in English or one of the known Japanese names.
        city: String,

        /// Print the decoded report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Look up cities one after another until `:q` or Esc.
    Interactive {
        /// City pre-filled in the first prompt.
        #[arg(long, default_value = DEFAULT_CITY)]
        city: String,
    },

    /// List the Japanese city names that are translated before lookup.
    Cities,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(&city, json).await,
            Command::Interactive { city } => interactive(city).await,
            Command::Cities => {
                for (local, canonical) in known_cities() {
                    println!("{local}\t{canonical}");
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let lang = Text::new("Description language:")
        .with_default(cfg.lang())
        .prompt()
        .context("Failed to read language")?;

    cfg.set_api_key(api_key.trim().to_string());
    cfg.set_lang(lang.trim().to_string());
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn controller_from_config() -> anyhow::Result<WeatherController> {
    let path = Config::config_file_path()?;
    let cfg = Config::load_from(&path)?;
    debug!(
        path = %path.display(),
        endpoint = cfg.base_url(),
        lang = cfg.lang(),
        has_api_key = cfg.has_api_key(),
        "loaded configuration"
    );
    if !cfg.has_api_key() {
        eprintln!(
            "No API key configured.\n\
             Hint: run `weather configure` or set OPENWEATHER_API_KEY."
        );
    }
    Ok(WeatherController::new(provider_from_config(&cfg)))
}

async fn show(city: &str, json: bool) -> anyhow::Result<()> {
    let controller = controller_from_config()?;
    controller.fetch(city).await;

    let state = controller.snapshot();
    if let Some(error) = state.error() {
        bail!("{error}");
    }

    if let Some(report) = state.report() {
        if json {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else {
            println!("{}", render_report(city, report));
        }
    }
    Ok(())
}

async fn interactive(initial: String) -> anyhow::Result<()> {
    let controller = controller_from_config()?;
    let mut last = initial;

    while let Some(city) = prompt_city(last.clone()).await? {
        if city.trim() == QUIT {
            debug!("leaving interactive mode");
            break;
        }

        let pending = controller.submit(city.clone());
        println!("{}", render_state(&city, &controller.snapshot()));
        pending.await.context("Weather lookup task failed")?;

        println!("{}\n", render_state(&city, &controller.snapshot()));
        if !city.trim().is_empty() {
            last = city;
        }
    }

    Ok(())
}

fn city_prompt(initial: &str) -> Text<'_> {
    // Pre-filled but editable: clearing the line submits an empty city.
    Text::new("City / 都市名:").with_initial_value(initial)
}

/// `None` when the user cancels the prompt.
async fn prompt_city(initial: String) -> anyhow::Result<Option<String>> {
    let answer = tokio::task::spawn_blocking(move || {
        city_prompt(&initial)
            .with_help_message("Enter :q or press Esc to quit")
            .prompt()
    })
    .await
    .context("Prompt task failed")?;

    match answer {
        Ok(city) => Ok(Some(city)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read city name"),
    }
}
