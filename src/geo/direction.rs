use crate::geo::consts::{DIRECTION_COUNT, SECTOR_WIDTH_DEG};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the sixteen compass points, in clockwise order starting from north.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

const ARROWS: [&str; DIRECTION_COUNT] = [
    "⬆️", "↗️", "↗️", "↗️", "➡️", "↘️", "↘️", "↘️", "⬇️", "↙️", "↙️", "↙️", "⬅️", "↖️", "↖️", "↖️",
];

impl Direction {
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::N,
        Direction::NNE,
        Direction::NE,
        Direction::ENE,
        Direction::E,
        Direction::ESE,
        Direction::SE,
        Direction::SSE,
        Direction::S,
        Direction::SSW,
        Direction::SW,
        Direction::WSW,
        Direction::W,
        Direction::WNW,
        Direction::NW,
        Direction::NNW,
    ];

    /// Maps a bearing to the compass point whose sector contains it.
    ///
    /// Each sector spans `[center - 11.25, center + 11.25)`, so a bearing lying exactly
    /// on a boundary goes to the clockwise neighbour.
    pub fn from_bearing(bearing_deg: f64) -> Direction {
        assert!(
            bearing_deg.is_finite(),
            "Bearing must be a finite number, got {bearing_deg}."
        );
        let bearing_deg = crate::geo::normalize_bearing(bearing_deg);
        // `rem_euclid` is exact, unlike adding half a sector before dividing.
        let offset = bearing_deg.rem_euclid(SECTOR_WIDTH_DEG);
        let mut sector = ((bearing_deg - offset) / SECTOR_WIDTH_DEG).round() as usize;
        if offset >= SECTOR_WIDTH_DEG / 2.0 {
            sector += 1;
        }
        Direction::ALL[sector % DIRECTION_COUNT]
    }

    pub fn center_deg(self) -> f64 {
        self as usize as f64 * SECTOR_WIDTH_DEG
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NNE => "NNE",
            Direction::NE => "NE",
            Direction::ENE => "ENE",
            Direction::E => "E",
            Direction::ESE => "ESE",
            Direction::SE => "SE",
            Direction::SSE => "SSE",
            Direction::S => "S",
            Direction::SSW => "SSW",
            Direction::SW => "SW",
            Direction::WSW => "WSW",
            Direction::W => "W",
            Direction::WNW => "WNW",
            Direction::NW => "NW",
            Direction::NNW => "NNW",
        }
    }

    pub fn arrow(self) -> &'static str {
        ARROWS[self as usize]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction for an optional bearing; `None` stays `None` (zero distance).
pub fn direction_for(bearing_deg: Option<f64>) -> Option<Direction> {
    bearing_deg.map(Direction::from_bearing)
}
