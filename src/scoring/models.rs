use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Colorblind,
}

/// Heat level of a single square, from coldest to hottest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Square {
    Cold,
    Warm,
    Hot,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub cold: &'static str,
    pub warm: &'static str,
    pub hot: &'static str,
}

const LIGHT: Palette = Palette {
    cold: "⬜",
    warm: "🟨",
    hot: "🟩",
};

const DARK: Palette = Palette {
    cold: "⬛",
    warm: "🟨",
    hot: "🟩",
};

const COLORBLIND: Palette = Palette {
    cold: "⬜",
    warm: "🟦",
    hot: "🟧",
};

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
            Theme::Colorblind => &COLORBLIND,
        }
    }
}

impl Palette {
    pub fn symbol(&self, square: Square) -> &'static str {
        match square {
            Square::Cold => self.cold,
            Square::Warm => self.warm,
            Square::Hot => self.hot,
        }
    }
}
