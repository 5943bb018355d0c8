pub mod consts;
pub mod models;
pub mod proximity;
pub mod squares;

/// Closeness of a guess in whole percent: `100` is an exact match, `0` the antipode.
pub type ProximityPercent = u8;
