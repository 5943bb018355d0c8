use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

/// A country's reference point together with the attributes used for feedback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryPoint {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub location: LatLng,
    /// Annual export value in billions of USD.
    #[serde(rename = "exports")]
    pub economic_size: f64,
}
