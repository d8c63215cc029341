use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use climacell_core::{Config, Field, NowcastWindow, Unit, client_from_config};
use inquire::{Password, Select, Text};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "climacell", version, about = "ClimaCell weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every weather query.
#[derive(Debug, Args)]
pub struct Query {
    /// Latitude in degrees, within ±59.9.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees, within ±180.
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Unit system, "si" or "us". Defaults to the configured unit.
    #[arg(long)]
    pub unit: Option<Unit>,

    /// Comma-separated field names, e.g. "temp,humidity".
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<Field>,

    /// Print the decoded response as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and optional base URL.
    Configure,

    /// Show current conditions.
    Realtime {
        #[command(flatten)]
        query: Query,
    },

    /// Show the short-term forecast.
    Nowcast {
        #[command(flatten)]
        query: Query,

        /// Minutes between timesteps.
        #[arg(long, default_value_t = 5)]
        timestep: u32,

        /// RFC3339 start time; if absent, means "now".
        #[arg(long)]
        start: Option<DateTime<Utc>>,

        /// RFC3339 end time.
        #[arg(long)]
        end: Option<DateTime<Utc>>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Realtime { query } => {
                let config = Config::load()?;
                let client = client_from_config(&config)?;
                let unit = query.unit.unwrap_or_else(|| config.unit());

                let data = client
                    .realtime(query.lat, query.lon, unit, &query.fields)
                    .await?;

                if query.json {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                } else {
                    print!("{}", render::realtime(&data));
                }

                Ok(())
            }
            Command::Nowcast {
                query,
                timestep,
                start,
                end,
            } => {
                let config = Config::load()?;
                let client = client_from_config(&config)?;
                let unit = query.unit.unwrap_or_else(|| config.unit());
                let window = NowcastWindow {
                    timestep,
                    start_time: start,
                    end_time: end,
                };

                let data = client
                    .nowcast(query.lat, query.lon, unit, &window, &query.fields)
                    .await?;

                if query.json {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                } else {
                    print!("{}", render::nowcast(&data));
                }

                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("ClimaCell API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let base_url = Text::new("Base URL (leave empty for the public API):")
        .with_initial_value(config.base_url.as_deref().unwrap_or_default())
        .prompt()
        .context("Failed to read base URL")?;

    let current = Unit::all()
        .iter()
        .position(|u| *u == config.unit())
        .unwrap_or(0);

    let unit = Select::new("Default unit system:", Unit::all().to_vec())
        .with_starting_cursor(current)
        .prompt()
        .context("Failed to read unit system")?;

    config.api_key = Some(api_key.trim().to_string());
    config.base_url = Some(base_url.trim().to_string()).filter(|url| !url.is_empty());
    config.default_unit = Some(unit);

    // Validates key and base URL before anything is written.
    client_from_config(&config)?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
