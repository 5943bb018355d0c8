use crate::geo::direction::Direction;
use crate::scoring::proximity;
use crate::scoring::ProximityPercent;
use serde::{Deserialize, Serialize};

/// Outcome of a single submission, compared against the hidden target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    /// Identifier of the guessed country.
    pub country: String,
    /// Great-circle distance to the target, in kilometers.
    pub distance: f64,
    /// Direction from the guess toward the target, `None` on an exact match.
    pub direction: Option<Direction>,
    /// Difference in export value, in billions of USD. `0` is an exact trade match.
    pub trade_distance: f64,
}

impl Guess {
    pub fn proximity(&self) -> ProximityPercent {
        proximity::score(self.distance)
    }

    pub fn is_exact(&self) -> bool {
        self.distance == 0.0
    }
}
