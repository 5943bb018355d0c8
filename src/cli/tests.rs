use crate::cli::Args;
use clap::Parser;
use geoguess::{DistanceUnit, Occasion, Settings, Theme};
use tracing::Level;

pub fn fake_args() -> Args {
    Args::try_parse_from(["geoguess", "DE", "--target", "FR"])
        .expect("Failed to construct fake arguments.")
}

#[test]
fn test_defaults() {
    let args = fake_args();

    assert_eq!(args.guesses, ["DE"]);
    assert_eq!(args.target.as_deref(), Some("FR"));
    assert_eq!(args.day, None);
    assert!(!args.random_target);
    assert_eq!(args.countries, None);
    assert_eq!(args.log_level, Level::INFO);
    assert_eq!(args.settings(), Settings::default());
    assert_eq!(args.occasion(), Occasion::Regular);
}

#[test]
fn test_display_options() {
    let args = Args::try_parse_from([
        "geoguess",
        "DE",
        "ES",
        "--day",
        "20000",
        "--distance-unit",
        "miles",
        "--theme",
        "colorblind",
        "--fuzzy-distance",
        "--hide-direction",
        "--april-fools",
    ])
    .unwrap();

    assert_eq!(args.guesses, ["DE", "ES"]);
    assert_eq!(args.day, Some(20_000));
    assert_eq!(
        args.settings(),
        Settings {
            distance_unit: DistanceUnit::Miles,
            theme: Theme::Colorblind,
            fuzzy_distance: true,
            hide_direction: true,
        }
    );
    assert_eq!(args.occasion(), Occasion::AprilFools);
}

#[test]
fn test_requires_a_guess() {
    assert!(Args::try_parse_from(["geoguess", "--target", "FR"]).is_err());
}

#[test]
fn test_target_and_day_conflict() {
    assert!(Args::try_parse_from(["geoguess", "DE", "--target", "FR", "--day", "3"]).is_err());
    assert!(Args::try_parse_from(["geoguess", "DE", "--day", "3", "--random-target"]).is_err());
}
