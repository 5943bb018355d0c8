use crate::format::consts::{CELEBRATION, HIDDEN};
use crate::format::models::Occasion;
use crate::geo::direction::Direction;
use crate::scoring::ProximityPercent;

/// Glyph for the direction cell. No direction means the guess hit.
pub fn direction_glyph(direction: Option<Direction>, occasion: Occasion) -> &'static str {
    match (direction, occasion) {
        (None, _) => CELEBRATION,
        (Some(direction), Occasion::Regular) => direction.arrow(),
        (Some(_), Occasion::AprilFools) => HIDDEN,
    }
}

/// On April Fools' Day every guess claims to be spot on.
pub fn displayed_proximity(proximity: ProximityPercent, occasion: Occasion) -> ProximityPercent {
    match occasion {
        Occasion::Regular => proximity,
        Occasion::AprilFools => 100,
    }
}
