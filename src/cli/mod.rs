use clap::Parser;
use geoguess::{DistanceUnit, Occasion, Settings, Theme};
use std::path::PathBuf;
use tracing::Level;
#[cfg(test)]
pub mod tests;

/// Scores guesses of the daily country-guessing game, one JSON line per guess.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Identifiers of the guessed countries, in submission order.
    #[arg(required = true)]
    pub guesses: Vec<String>,
    /// Identifier of the hidden country. Defaults to the target of the day.
    #[arg(long)]
    pub target: Option<String>,
    /// Day number (since the Unix epoch) whose target to play against.
    #[arg(long, conflicts_with = "target")]
    pub day: Option<u64>,
    #[arg(long, conflicts_with_all = ["target", "day"])]
    pub random_target: bool,
    /// NDJSON dataset to use instead of the built-in one.
    #[arg(long)]
    pub countries: Option<PathBuf>,
    #[arg(long, value_enum)]
    #[arg(default_value = "km")]
    pub distance_unit: DistanceUnit,
    #[arg(long, value_enum)]
    #[arg(default_value = "light")]
    pub theme: Theme,
    #[arg(long)]
    pub fuzzy_distance: bool,
    #[arg(long)]
    pub hide_direction: bool,
    #[arg(long)]
    pub april_fools: bool,
    #[arg(long)]
    #[arg(default_value = "info")]
    pub log_level: Level,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            distance_unit: self.distance_unit,
            theme: self.theme,
            fuzzy_distance: self.fuzzy_distance,
            hide_direction: self.hide_direction,
        }
    }

    pub fn occasion(&self) -> Occasion {
        if self.april_fools {
            Occasion::AprilFools
        } else {
            Occasion::Regular
        }
    }
}
