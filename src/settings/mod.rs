use crate::format::models::DistanceUnit;
use crate::scoring::models::Theme;
use serde::{Deserialize, Serialize};

/// Player preferences that only change how feedback is displayed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub distance_unit: DistanceUnit,
    pub theme: Theme,
    pub fuzzy_distance: bool,
    pub hide_direction: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fall_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"distanceUnit": "miles", "hideDirection": true}"#).unwrap();

        assert_eq!(
            settings,
            Settings {
                distance_unit: DistanceUnit::Miles,
                theme: Theme::Light,
                fuzzy_distance: false,
                hide_direction: true,
            }
        );
    }

    #[test]
    fn test_settings_serialize_camel_case() {
        let settings = Settings {
            theme: Theme::Colorblind,
            ..Settings::default()
        };

        let json = serde_json::to_value(settings).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "distanceUnit": "km",
                "theme": "colorblind",
                "fuzzyDistance": false,
                "hideDirection": false,
            })
        );
    }
}
