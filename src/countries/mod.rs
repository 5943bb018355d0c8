use registry::CountryRegistry;
use std::sync::OnceLock;

pub mod models;
pub mod registry;

const BUILTIN_DATASET: &str = include_str!("countries.ndjson");

static BUILTIN: OnceLock<CountryRegistry> = OnceLock::new();

/// The dataset compiled into the crate, parsed on first use.
pub fn builtin() -> &'static CountryRegistry {
    BUILTIN.get_or_init(|| {
        let registry = CountryRegistry::from_ndjson(BUILTIN_DATASET.as_bytes())
            .expect("The built-in countries dataset is malformed.");
        tracing::info!(countries = registry.len(), "Loaded the built-in countries dataset.");
        registry
    })
}
