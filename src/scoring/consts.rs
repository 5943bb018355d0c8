/// Length of every square sequence.
pub const SQUARE_COUNT: usize = 5;

/// Width of each proximity bucket, in percent.
pub const BUCKET_WIDTH: u8 = 100 / SQUARE_COUNT as u8;

/// A partially filled bucket shows a warm square once it is at least half full.
pub const WARM_THRESHOLD: u8 = BUCKET_WIDTH / 2;
