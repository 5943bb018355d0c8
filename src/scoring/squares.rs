use crate::scoring::consts::{BUCKET_WIDTH, SQUARE_COUNT, WARM_THRESHOLD};
use crate::scoring::models::{Square, Theme};
use crate::scoring::ProximityPercent;

pub type SquareSequence = [&'static str; SQUARE_COUNT];

/// Index of the equal-width bucket holding `percent`. Buckets are closed on the low end
/// and open on the high end, except the last one which also includes `100`.
pub fn bucket(percent: ProximityPercent) -> usize {
    assert_percent(percent);
    (percent / BUCKET_WIDTH).min(SQUARE_COUNT as u8 - 1) as usize
}

/// Every bucket below the one holding `percent` is hot. The holding bucket turns warm
/// once half full and hot once full, which only happens at `100`.
pub fn quantize(percent: ProximityPercent) -> [Square; SQUARE_COUNT] {
    let current = bucket(percent);
    let fill = percent - current as u8 * BUCKET_WIDTH;
    let mut squares = [Square::Cold; SQUARE_COUNT];
    for square in squares.iter_mut().take(current) {
        *square = Square::Hot;
    }
    squares[current] = if fill >= BUCKET_WIDTH {
        Square::Hot
    } else if fill >= WARM_THRESHOLD {
        Square::Warm
    } else {
        Square::Cold
    };
    squares
}

pub fn squares(percent: ProximityPercent, theme: Theme) -> SquareSequence {
    let palette = theme.palette();
    quantize(percent).map(|square| palette.symbol(square))
}

fn assert_percent(percent: ProximityPercent) {
    assert!(percent <= 100, "Proximity must be within 0..=100, got {percent}.");
}
