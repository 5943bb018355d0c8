/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Half of the Earth's circumference: the largest possible separation of two points.
pub const MAX_DISTANCE_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;

pub const DIRECTION_COUNT: usize = 16;

pub const SECTOR_WIDTH_DEG: f64 = 360.0 / DIRECTION_COUNT as f64;
