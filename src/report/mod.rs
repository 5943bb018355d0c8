use geoguess::format::direction::{direction_glyph, displayed_proximity};
use geoguess::format::distance::{format_distance_for, format_fuzzy_distance};
use geoguess::format::trade::format_trade_distance;
use geoguess::{squares, CountryPoint, Guess, Occasion, ProximityPercent, Settings};
use serde::Serialize;

/// Everything a client needs to draw one row of the guess grid, and nothing the
/// player chose not to see.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessReport {
    pub row: usize,
    pub country: String,
    pub country_name: String,
    /// `None` when the player only wants fuzzy distances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity: Option<ProximityPercent>,
    pub squares: String,
    pub distance: String,
    pub trade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<&'static str>,
    pub exact: bool,
}

impl GuessReport {
    pub fn new(
        country: &CountryPoint,
        guess: &Guess,
        settings: &Settings,
        occasion: Occasion,
        row: usize,
    ) -> Self {
        let proximity = guess.proximity();
        let distance = match (occasion, settings.fuzzy_distance) {
            (Occasion::Regular, true) => format_fuzzy_distance(guess.distance),
            _ => format_distance_for(guess.distance, settings.distance_unit, occasion),
        };
        let direction =
            (!settings.hide_direction).then(|| direction_glyph(guess.direction, occasion));
        Self {
            row,
            country: guess.country.clone(),
            country_name: country.name.clone(),
            proximity: (!settings.fuzzy_distance)
                .then(|| displayed_proximity(proximity, occasion)),
            squares: squares(proximity, settings.theme).concat(),
            distance,
            trade: format_trade_distance(guess.trade_distance),
            direction,
            exact: guess.is_exact(),
        }
    }
}
