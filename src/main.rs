//! tripflow - compose and submit multi-day trip schedules
//!
//! CLI binary around the draft, resolver, and submission pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tripflow::types::GeoPoint;

mod cli;

#[derive(Parser)]
#[command(name = "tripflow")]
#[command(about = "Compose and submit multi-day trip schedules")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a draft schedule to the remote service
    Submit {
        /// Path to the draft JSON file
        draft: PathBuf,

        /// Base URL of the schedule API
        #[arg(long, env = "TRIPFLOW_API")]
        api: String,

        /// Base URL of the place-search API (defaults to the schedule API)
        #[arg(long, env = "TRIPFLOW_PLACES_API")]
        places_api: Option<String>,

        /// Current position as "lat,lng", used as the default origin
        #[arg(long, value_parser = parse_position)]
        at: Option<GeoPoint>,
    },

    /// Validate a draft without issuing any network call
    Validate {
        /// Path to the draft JSON file
        draft: PathBuf,
    },

    /// Show the day-by-day calendar for a date range
    Dates {
        /// Start date, yyyy-mm-dd
        from: String,

        /// End date, yyyy-mm-dd
        to: String,
    },
}

fn parse_position(value: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lng\", got {value:?}"))?;
    let latitude = lat
        .trim()
        .parse()
        .map_err(|e| format!("bad latitude {lat:?}: {e}"))?;
    let longitude = lng
        .trim()
        .parse()
        .map_err(|e| format!("bad longitude {lng:?}: {e}"))?;
    Ok(GeoPoint::new(latitude, longitude))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            draft,
            api,
            places_api,
            at,
        } => {
            cli::run_submit(&draft, &api, places_api.as_deref(), at).await?;
        }
        Commands::Validate { draft } => {
            cli::run_validate(&draft)?;
        }
        Commands::Dates { from, to } => {
            cli::run_dates(&from, &to)?;
        }
    }

    Ok(())
}
