use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The identifier has no entry in the registry.
    #[error("unknown country: `{0}`")]
    UnknownCountry(String),

    #[error("failed to read the countries dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse line {line} of the countries dataset: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("the countries dataset is empty")]
    EmptyDataset,

    #[error("country `{0}` is listed more than once")]
    DuplicateCountry(String),

    #[error("country `{id}` has coordinates out of range: ({lat}, {lng})")]
    InvalidCoordinates { id: String, lat: f64, lng: f64 },

    #[error("country `{id}` has an invalid economic size: {value}")]
    InvalidEconomicSize { id: String, value: f64 },

    #[error("countries `{first}` and `{second}` share the same reference point")]
    CoincidentCountries { first: String, second: String },
}
