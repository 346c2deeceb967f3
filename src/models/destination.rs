//! Destination model for catalog rows

use serde::{Deserialize, Serialize};

/// A candidate travel destination from the catalog
///
/// Field names are the binding contract with the catalog file header;
/// column order is irrelevant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Destination {
    /// City name
    pub city: String,
    /// Country name
    pub country: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Average cost of one day in this city, in dollars
    pub average_daily_cost: f64,
}

impl Destination {
    /// Create a new destination
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
        average_daily_cost: f64,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            latitude,
            longitude,
            average_daily_cost,
        }
    }

    /// Combined "City, Country" label used by selection controls
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Label for the map marker popup
    #[must_use]
    pub fn map_label(&self) -> String {
        format!("{} (${}/day)", self.city, self.average_daily_cost)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let destination = Destination::new("Lisbon", "Portugal", 38.7, -9.1, 35.0);
        assert_eq!(destination.display_name(), "Lisbon, Portugal");
    }

    #[test]
    fn test_map_label() {
        let destination = Destination::new("Bangkok", "Thailand", 13.7, 100.5, 25.0);
        assert_eq!(destination.map_label(), "Bangkok ($25/day)");
    }

    #[test]
    fn test_format_coordinates() {
        let destination = Destination::new("Lisbon", "Portugal", 38.7223, -9.1393, 35.0);
        assert_eq!(destination.format_coordinates(), "38.7223, -9.1393");
    }
}
