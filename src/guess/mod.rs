use crate::countries::models::CountryPoint;
use crate::countries::registry::CountryRegistry;
use crate::error::Result;
use crate::geo::direction::direction_for;
use crate::geo::distance_and_bearing;
use crate::geo::models::Geodesic;
use models::Guess;

pub mod models;

impl CountryRegistry {
    /// Resolves both countries and compares the guess with the target.
    pub fn evaluate_guess(&self, guess_id: &str, target_id: &str) -> Result<Guess> {
        let guessed = self.resolve(guess_id)?;
        let target = self.resolve(target_id)?;
        let guess = compare(guessed, target);
        tracing::debug!(
            task = "evaluate_guess",
            guess_country = guess_id,
            target_country = target_id,
            distance_km = guess.distance,
            proximity = guess.proximity(),
        );
        Ok(guess)
    }
}

fn compare(guessed: &CountryPoint, target: &CountryPoint) -> Guess {
    let Geodesic {
        distance_km,
        bearing_deg,
    } = if guessed.id == target.id {
        Geodesic {
            distance_km: 0.0,
            bearing_deg: None,
        }
    } else {
        distance_and_bearing(guessed.location, target.location)
    };
    Guess {
        country: guessed.id.clone(),
        distance: distance_km,
        direction: direction_for(bearing_deg),
        trade_distance: trade_distance(guessed, target),
    }
}

pub fn trade_distance(guessed: &CountryPoint, target: &CountryPoint) -> f64 {
    (guessed.economic_size - target.economic_size).abs()
}
