//! Scoring engine of a daily country-guessing game.
//!
//! A guess and a hidden target are resolved to reference points, and the engine
//! reports how far apart they are, in which direction the target lies, how close the
//! guess is as a percentage, and how that percentage renders as a row of squares.
//! Everything here is pure: no I/O past loading the dataset, no hidden state.

pub mod countries;
pub mod error;
pub mod format;
pub mod geo;
pub mod guess;
pub mod scoring;
pub mod settings;

pub use countries::models::CountryPoint;
pub use countries::registry::CountryRegistry;
pub use error::{Error, Result};
pub use format::distance::{format_distance, format_fuzzy_distance};
pub use format::models::{DistanceUnit, Occasion};
pub use format::trade::format_trade_distance;
pub use geo::direction::{direction_for, Direction};
pub use geo::distance_and_bearing;
pub use guess::models::Guess;
pub use scoring::models::Theme;
pub use scoring::proximity::score;
pub use scoring::squares::{squares, SquareSequence};
pub use scoring::ProximityPercent;
pub use settings::Settings;

/// Resolves a country in the built-in dataset.
pub fn resolve(id: &str) -> Result<&'static CountryPoint> {
    countries::builtin().resolve(id)
}

/// Evaluates a guess against a target from the built-in dataset.
pub fn evaluate_guess(guess_id: &str, target_id: &str) -> Result<Guess> {
    countries::builtin().evaluate_guess(guess_id, target_id)
}
