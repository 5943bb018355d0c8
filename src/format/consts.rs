pub const MILES_PER_KM: f64 = 0.621371;

pub const EXACT_MATCH: &str = "🎯";
pub const CELEBRATION: &str = "🎉";
pub const HIDDEN: &str = "⁇";

/// Upper bounds (exclusive, km) of the fuzzy distance buckets, closest first.
pub const FUZZY_BOUNDS_KM: [f64; 4] = [1_000.0, 3_000.0, 6_000.0, 10_000.0];
