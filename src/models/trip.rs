//! Trip request and itinerary result types

use serde::{Deserialize, Serialize};

use crate::error::SmartMapError;

/// Parameters for a single itinerary generation
///
/// Created per user action and consumed immediately by the prompt
/// builder; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination city
    pub city: String,
    /// Destination country
    pub country: String,
    /// Trip duration in days
    pub day_count: u32,
    /// Total budget for the whole trip, in dollars
    pub total_budget: f64,
    /// Free-text traveler interests
    pub interests: String,
}

impl TripRequest {
    /// Create a validated trip request
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        day_count: u32,
        total_budget: f64,
        interests: impl Into<String>,
    ) -> Result<Self, SmartMapError> {
        let city = city.into();
        if city.trim().is_empty() {
            return Err(SmartMapError::validation("City cannot be empty"));
        }
        if day_count == 0 {
            return Err(SmartMapError::validation(
                "Trip duration must be at least 1 day",
            ));
        }
        if total_budget < 0.0 {
            return Err(SmartMapError::validation("Budget cannot be negative"));
        }

        Ok(Self {
            city,
            country: country.into(),
            day_count,
            total_budget,
            interests: interests.into(),
        })
    }
}

/// Outcome of one itinerary generation attempt
///
/// Remote failures are recovered into the `Failed` variant so the cause
/// can be shown in place of the itinerary text instead of crashing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItineraryResult {
    /// Markdown itinerary text returned by the remote model
    Generated { text: String },
    /// Human-readable description of why generation failed
    Failed { message: String },
}

impl ItineraryResult {
    /// Text shown to the user, whether the plan succeeded or not
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            ItineraryResult::Generated { text } => text,
            ItineraryResult::Failed { message } => message,
        }
    }

    /// Whether this result carries a failure
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, ItineraryResult::Failed { .. })
    }
}
