use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "km")]
    #[value(name = "km")]
    Kilometers,
    #[serde(rename = "miles")]
    #[value(name = "miles")]
    Miles,
}

/// Cosmetic variant of the feedback symbols. Never reaches the scoring math.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Occasion {
    #[default]
    Regular,
    AprilFools,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FuzzyDistance {
    VeryClose,
    Close,
    Medium,
    Far,
    VeryFar,
}

impl FuzzyDistance {
    pub fn label(self) -> &'static str {
        match self {
            FuzzyDistance::VeryClose => "Very close",
            FuzzyDistance::Close => "Close",
            FuzzyDistance::Medium => "Medium",
            FuzzyDistance::Far => "Far",
            FuzzyDistance::VeryFar => "Very far",
        }
    }
}

impl fmt::Display for FuzzyDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
