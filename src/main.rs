use clap::Parser;
use cli::Args;
use geoguess::countries;
use geoguess::{CountryPoint, CountryRegistry, Result};
use report::GuessReport;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

mod cli;
mod logging;
mod report;

const SECONDS_PER_DAY: u64 = 86_400;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args);
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "Failed to score the guesses.");
            ExitCode::FAILURE
        }
    }
}

/// Prints a report per guess. Returns `false` if some guess could not be scored.
fn run(args: &Args) -> Result<bool> {
    let loaded;
    let registry = match &args.countries {
        Some(path) => {
            loaded = CountryRegistry::load(path)?;
            &loaded
        }
        None => countries::builtin(),
    };
    let target = pick_target(args, registry)?;
    tracing::debug!(country = %target.id, "Picked the hidden country.");

    let settings = args.settings();
    let occasion = args.occasion();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut all_scored = true;
    for (row, guess_id) in args.guesses.iter().enumerate() {
        let guess = match registry.evaluate_guess(guess_id, &target.id) {
            Ok(guess) => guess,
            Err(err) => {
                tracing::error!(task = "evaluate_guess", guess = %guess_id, error = %err);
                all_scored = false;
                continue;
            }
        };
        let country = registry.resolve(guess_id)?;
        let report = GuessReport::new(country, &guess, &settings, occasion, row);
        serde_json::to_writer(&mut out, &report).map_err(io::Error::from)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(all_scored)
}

fn pick_target<'a>(args: &Args, registry: &'a CountryRegistry) -> Result<&'a CountryPoint> {
    if let Some(id) = &args.target {
        return registry.resolve(id);
    }
    if args.random_target {
        return Ok(registry.random_target());
    }
    let day = args.day.unwrap_or_else(today);
    Ok(registry.daily_target(day))
}

fn today() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() / SECONDS_PER_DAY)
        .unwrap_or(0)
}
