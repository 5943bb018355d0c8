use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Great-circle distance between two points plus the initial bearing from the first
/// to the second. `bearing_deg` is `None` when the points coincide.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geodesic {
    pub distance_km: f64,
    pub bearing_deg: Option<f64>,
}
