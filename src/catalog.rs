//! Destination catalog loading and budget filtering
//!
//! The catalog is read once at startup from a delimited tabular file and
//! shared read-only for the rest of the process lifetime.

use std::path::Path;

use tracing::{debug, info};

use crate::Result;
use crate::error::SmartMapError;
use crate::models::Destination;

/// In-memory table of candidate destinations, immutable once loaded
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Load the catalog from a CSV file
    ///
    /// The header row binds columns by name (`city`, `country`, `latitude`,
    /// `longitude`, `average_daily_cost`); column order is irrelevant.
    /// Rows with a negative daily cost are rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SmartMapError::catalog(format!(
                "catalog not found: {}",
                path.display()
            )));
        }

        debug!("Loading destination catalog from {}", path.display());

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| SmartMapError::catalog(format!("{}: {e}", path.display())))?;

        let mut destinations = Vec::new();
        for (index, record) in reader.deserialize::<Destination>().enumerate() {
            // Header is line 1, so the first data row is line 2
            let line = index + 2;
            let destination = record
                .map_err(|e| SmartMapError::catalog(format!("line {line}: {e}")))?;

            if destination.average_daily_cost < 0.0 {
                return Err(SmartMapError::catalog(format!(
                    "line {line}: negative average_daily_cost for {}",
                    destination.city
                )));
            }

            destinations.push(destination);
        }

        info!(
            "Loaded {} destinations from {}",
            destinations.len(),
            path.display()
        );

        Ok(Self { destinations })
    }

    /// Build a catalog from already-validated destinations
    #[must_use]
    pub fn from_destinations(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// Number of destinations in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the catalog has no destinations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Iterate over all destinations in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    /// Destinations whose average daily cost is at or below the ceiling
    ///
    /// Preserves catalog order. An empty result is a valid, reportable
    /// state, not an error.
    #[must_use]
    pub fn filter_by_budget(&self, ceiling: f64) -> Vec<&Destination> {
        self.destinations
            .iter()
            .filter(|destination| destination.average_daily_cost <= ceiling)
            .collect()
    }

    /// Look up a destination by city and country
    #[must_use]
    pub fn find(&self, city: &str, country: &str) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|destination| destination.city == city && destination.country == country)
    }
}
