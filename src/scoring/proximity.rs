use crate::geo::consts::MAX_DISTANCE_KM;
use crate::scoring::ProximityPercent;

/// Linear closeness score calibrated against the antipodal distance, so scores are
/// comparable across targets.
///
/// Rounds half up. The two extremes are reserved: `100` only for a zero distance and
/// `0` only for the maximum distance, so anything in between lands in `1..=99`.
pub fn score(distance_km: f64) -> ProximityPercent {
    assert!(
        distance_km.is_finite() && distance_km >= 0.0,
        "Distance must be a finite non-negative number, got {distance_km}."
    );
    if distance_km == 0.0 {
        return 100;
    }
    if distance_km >= MAX_DISTANCE_KM {
        return 0;
    }
    let percent = (1.0 - distance_km / MAX_DISTANCE_KM) * 100.0;
    ((percent + 0.5).floor() as ProximityPercent).clamp(1, 99)
}
