use consts::EARTH_RADIUS_KM;
use models::{Geodesic, LatLng};

pub mod consts;
pub mod direction;
pub mod models;

/// Haversine distance on a spherical Earth together with the initial bearing,
/// in degrees clockwise from true north, normalized into `[0, 360)`.
pub fn distance_and_bearing(from: LatLng, to: LatLng) -> Geodesic {
    if from == to {
        return Geodesic {
            distance_km: 0.0,
            bearing_deg: None,
        };
    }
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    let distance_km = EARTH_RADIUS_KM * c;
    if distance_km == 0.0 {
        return Geodesic {
            distance_km,
            bearing_deg: None,
        };
    }

    let y = delta_lambda.sin() * phi_2.cos();
    let x = phi_1.cos() * phi_2.sin() - phi_1.sin() * phi_2.cos() * delta_lambda.cos();
    Geodesic {
        distance_km,
        bearing_deg: Some(normalize_bearing(y.atan2(x).to_degrees())),
    }
}

pub fn normalize_bearing(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // `rem_euclid` may return exactly 360.0 for tiny negative inputs.
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}
