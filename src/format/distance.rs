use crate::format::consts::{EXACT_MATCH, FUZZY_BOUNDS_KM, HIDDEN, MILES_PER_KM};
use crate::format::models::{DistanceUnit, FuzzyDistance, Occasion};

/// Renders e.g. `1,234 km` or `767 mi`. A zero distance is an exact match.
pub fn format_distance(distance_km: f64, unit: DistanceUnit) -> String {
    assert_distance(distance_km);
    if distance_km == 0.0 {
        return EXACT_MATCH.to_string();
    }
    let (value, suffix) = match unit {
        DistanceUnit::Kilometers => (distance_km, "km"),
        DistanceUnit::Miles => (distance_km * MILES_PER_KM, "mi"),
    };
    // A positive distance never reads as zero.
    let rounded = (value.round() as u64).max(1);
    format!("{} {}", group_thousands(rounded), suffix)
}

pub fn format_distance_for(distance_km: f64, unit: DistanceUnit, occasion: Occasion) -> String {
    match occasion {
        Occasion::Regular => format_distance(distance_km, unit),
        Occasion::AprilFools => HIDDEN.to_string(),
    }
}

pub fn fuzzy_distance(distance_km: f64) -> Option<FuzzyDistance> {
    assert_distance(distance_km);
    if distance_km == 0.0 {
        return None;
    }
    let buckets = [
        FuzzyDistance::VeryClose,
        FuzzyDistance::Close,
        FuzzyDistance::Medium,
        FuzzyDistance::Far,
    ];
    let bucket = FUZZY_BOUNDS_KM
        .iter()
        .zip(buckets)
        .find(|(bound, _)| distance_km < **bound)
        .map(|(_, bucket)| bucket)
        .unwrap_or(FuzzyDistance::VeryFar);
    Some(bucket)
}

pub fn format_fuzzy_distance(distance_km: f64) -> String {
    match fuzzy_distance(distance_km) {
        Some(bucket) => bucket.label().to_string(),
        None => EXACT_MATCH.to_string(),
    }
}

pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn assert_distance(distance_km: f64) {
    assert!(
        distance_km.is_finite() && distance_km >= 0.0,
        "Distance must be a finite non-negative number, got {distance_km}."
    );
}
