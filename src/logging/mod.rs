use crate::cli::Args;
use std::io;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries the reports.
pub fn init(args: &Args) {
    let directive = format!("geoguess={}", args.log_level)
        .parse()
        .expect("Failed to build the log filter directive.");
    let env_filter = EnvFilter::default().add_directive(directive);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
