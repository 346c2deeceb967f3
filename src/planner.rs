//! Trip planning glue
//!
//! Renders the prompt for a trip request, performs the single remote
//! generation attempt, and folds any failure into a displayable result.

use std::sync::Arc;

use tracing::{info, warn};

use crate::llm::ItineraryGenerator;
use crate::models::{ItineraryResult, TripRequest};
use crate::prompt;

/// Produces itineraries for validated trip requests
pub struct TripPlanner {
    generator: Arc<dyn ItineraryGenerator>,
}

impl TripPlanner {
    /// Create a planner backed by the given generator
    pub fn new(generator: Arc<dyn ItineraryGenerator>) -> Self {
        Self { generator }
    }

    /// Generate an itinerary for one trip request
    ///
    /// Remote failures are recovered here: the returned result is either
    /// the generated markdown or a `Failed` value whose message names the
    /// cause. Nothing propagates as an uncaught fault.
    pub async fn plan(&self, trip: &TripRequest) -> ItineraryResult {
        let prompt_text = prompt::build_prompt(trip);

        match self.generator.generate(&prompt_text).await {
            Ok(text) => {
                info!(
                    "Generated {}-day itinerary for {}, {}",
                    trip.day_count, trip.city, trip.country
                );
                ItineraryResult::Generated { text }
            }
            Err(e) => {
                warn!("Itinerary generation failed: {e}");
                ItineraryResult::Failed {
                    message: format!("AI error: {e}"),
                }
            }
        }
    }
}
