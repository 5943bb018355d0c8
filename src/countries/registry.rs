use crate::countries::models::CountryPoint;
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read-only lookup from a country identifier to its [`CountryPoint`].
#[derive(Clone, Debug)]
pub struct CountryRegistry {
    countries: BTreeMap<String, CountryPoint>,
}

impl CountryRegistry {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let registry = Self::from_ndjson(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            countries = registry.len(),
            "Loaded the countries dataset."
        );
        Ok(registry)
    }

    /// Parses one JSON object per line; blank lines are skipped.
    pub fn from_ndjson<R: BufRead>(reader: R) -> Result<Self> {
        let mut countries = BTreeMap::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let country: CountryPoint =
                serde_json::from_str(&line).map_err(|source| Error::Parse {
                    line: index + 1,
                    source,
                })?;
            validate(&country)?;
            if countries.contains_key(&country.id) {
                return Err(Error::DuplicateCountry(country.id));
            }
            countries.insert(country.id.clone(), country);
        }
        if countries.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let registry = Self { countries };
        registry.check_reference_points_are_distinct()?;
        Ok(registry)
    }

    pub fn resolve(&self, id: &str) -> Result<&CountryPoint> {
        self.countries
            .get(id)
            .ok_or_else(|| Error::UnknownCountry(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.countries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Countries ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = &CountryPoint> {
        self.countries.values()
    }

    pub fn random_target(&self) -> &CountryPoint {
        let mut rng = rand::thread_rng();
        self.nth(rng.gen_range(0..self.len()))
    }

    /// The hidden target of a given day. Same day, same dataset, same country.
    pub fn daily_target(&self, day: u64) -> &CountryPoint {
        let mut rng = StdRng::seed_from_u64(day);
        self.nth(rng.gen_range(0..self.len()))
    }

    fn nth(&self, index: usize) -> &CountryPoint {
        self.countries
            .values()
            .nth(index)
            .expect("Index is always drawn from `0..len`.")
    }

    fn check_reference_points_are_distinct(&self) -> Result<()> {
        let countries: Vec<&CountryPoint> = self.countries.values().collect();
        for (index, first) in countries.iter().enumerate() {
            if let Some(second) = countries[index + 1..]
                .iter()
                .find(|other| other.location == first.location)
            {
                return Err(Error::CoincidentCountries {
                    first: first.id.clone(),
                    second: second.id.clone(),
                });
            }
        }
        Ok(())
    }
}

fn validate(country: &CountryPoint) -> Result<()> {
    if !country.location.is_valid() {
        return Err(Error::InvalidCoordinates {
            id: country.id.clone(),
            lat: country.location.lat,
            lng: country.location.lng,
        });
    }
    if !country.economic_size.is_finite() || country.economic_size < 0.0 {
        return Err(Error::InvalidEconomicSize {
            id: country.id.clone(),
            value: country.economic_size,
        });
    }
    Ok(())
}
