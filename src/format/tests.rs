use crate::format::consts::{CELEBRATION, EXACT_MATCH, HIDDEN, MILES_PER_KM};
use crate::format::direction::{direction_glyph, displayed_proximity};
use crate::format::distance::{
    format_distance, format_distance_for, format_fuzzy_distance, fuzzy_distance, group_thousands,
};
use crate::format::models::{DistanceUnit, FuzzyDistance, Occasion};
use crate::format::trade::format_trade_distance;
use crate::geo::direction::Direction;

fn leading_number(text: &str) -> f64 {
    text.split(' ')
        .next()
        .unwrap()
        .replace(',', "")
        .parse()
        .expect("Formatted distance must start with a number.")
}

#[test]
fn test_format_distance() {
    assert_eq!(format_distance(757.7, DistanceUnit::Kilometers), "758 km");
    assert_eq!(format_distance(757.7, DistanceUnit::Miles), "471 mi");
    assert_eq!(format_distance(15_101.49, DistanceUnit::Kilometers), "15,101 km");
    assert_eq!(format_distance(0.2, DistanceUnit::Kilometers), "1 km");
}

#[test]
fn test_format_zero_distance_is_exact_match() {
    assert_eq!(format_distance(0.0, DistanceUnit::Kilometers), EXACT_MATCH);
    assert_eq!(format_distance(0.0, DistanceUnit::Miles), EXACT_MATCH);
    assert_ne!(format_distance(0.0, DistanceUnit::Kilometers), "0 km");
}

#[test]
fn test_units_differ_by_conversion_factor() {
    for distance_km in [1.0, 42.0, 757.7, 5_000.0, 12_345.6, 20_015.0] {
        let kilometers = leading_number(&format_distance(distance_km, DistanceUnit::Kilometers));
        let miles = leading_number(&format_distance(distance_km, DistanceUnit::Miles));
        // Each side is rounded to the nearest unit.
        assert!((kilometers * MILES_PER_KM - miles).abs() <= 1.0);
    }
}

#[test]
fn test_april_fools_hides_distance() {
    assert_eq!(
        format_distance_for(757.7, DistanceUnit::Kilometers, Occasion::AprilFools),
        HIDDEN
    );
    assert_eq!(
        format_distance_for(757.7, DistanceUnit::Kilometers, Occasion::Regular),
        "758 km"
    );
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(20_015), "20,015");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn test_fuzzy_distance_buckets() {
    assert_eq!(fuzzy_distance(0.0), None);
    assert_eq!(fuzzy_distance(1.0), Some(FuzzyDistance::VeryClose));
    assert_eq!(fuzzy_distance(999.9), Some(FuzzyDistance::VeryClose));
    assert_eq!(fuzzy_distance(1_000.0), Some(FuzzyDistance::Close));
    assert_eq!(fuzzy_distance(4_000.0), Some(FuzzyDistance::Medium));
    assert_eq!(fuzzy_distance(6_000.0), Some(FuzzyDistance::Far));
    assert_eq!(fuzzy_distance(10_000.0), Some(FuzzyDistance::VeryFar));
    assert_eq!(fuzzy_distance(20_015.0), Some(FuzzyDistance::VeryFar));
}

#[test]
fn test_fuzzy_distance_is_monotonic() {
    let mut previous = FuzzyDistance::VeryClose;
    for step in 1..2_100 {
        let current = fuzzy_distance(step as f64 * 10.0).unwrap();
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_format_fuzzy_distance() {
    assert_eq!(format_fuzzy_distance(0.0), EXACT_MATCH);
    assert_eq!(format_fuzzy_distance(757.7), "Very close");
    assert_eq!(format_fuzzy_distance(15_101.5), "Very far");
}

#[test]
fn test_format_trade_distance() {
    assert_eq!(format_trade_distance(0.0), EXACT_MATCH);
    assert_eq!(format_trade_distance(0.0001), "<$1M");
    assert_eq!(format_trade_distance(0.32), "$320M");
    assert_eq!(format_trade_distance(240.5), "$240.5B");
    assert_eq!(format_trade_distance(1_045.0), "$1.0T");
    assert_eq!(format_trade_distance(2_775.0), "$2.8T");
}

#[test]
fn test_small_trade_distance_is_not_exact() {
    for trade_distance in [1e-9, 0.0004, 0.01] {
        assert_ne!(format_trade_distance(trade_distance), EXACT_MATCH);
    }
}

#[test]
fn test_direction_glyph() {
    assert_eq!(direction_glyph(None, Occasion::Regular), CELEBRATION);
    assert_eq!(direction_glyph(None, Occasion::AprilFools), CELEBRATION);
    assert_eq!(direction_glyph(Some(Direction::E), Occasion::Regular), "➡️");
}

#[test]
fn test_april_fools_hides_direction() {
    for direction in Direction::ALL {
        assert_eq!(direction_glyph(Some(direction), Occasion::AprilFools), HIDDEN);
    }
}

#[test]
fn test_displayed_proximity() {
    assert_eq!(displayed_proximity(42, Occasion::Regular), 42);
    assert_eq!(displayed_proximity(42, Occasion::AprilFools), 100);
}

#[test]
#[should_panic]
fn test_negative_distance_panics() {
    format_distance(-3.0, DistanceUnit::Miles);
}
