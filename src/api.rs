//! HTTP API consumed by the frontend
//!
//! Exposes the filtered destination listing, the itinerary generation
//! trigger, the model enumeration, and the interactive control bounds.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::DestinationCatalog;
use crate::config::DefaultsConfig;
use crate::llm::{GeminiClient, ModelInfo};
use crate::models::{Destination, ItineraryResult, TripRequest};
use crate::planner::TripPlanner;

/// Shared state behind the router
///
/// The catalog is read-only after startup, so sharing it across request
/// handlers needs no locking.
pub struct AppState {
    pub catalog: DestinationCatalog,
    pub planner: TripPlanner,
    pub gemini: Arc<GeminiClient>,
    pub defaults: DefaultsConfig,
}

#[derive(Serialize, Deserialize)]
pub struct ApiDestination {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub average_daily_cost: f64,
    pub display_name: String,
    pub map_label: String,
}

impl From<&Destination> for ApiDestination {
    fn from(destination: &Destination) -> Self {
        Self {
            city: destination.city.clone(),
            country: destination.country.clone(),
            latitude: destination.latitude,
            longitude: destination.longitude,
            average_daily_cost: destination.average_daily_cost,
            display_name: destination.display_name(),
            map_label: destination.map_label(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct DestinationListResponse {
    /// Number of cities matching the budget ceiling; zero is a valid,
    /// reportable state rather than an error
    pub count: usize,
    pub destinations: Vec<ApiDestination>,
}

#[derive(Deserialize)]
pub struct BudgetQuery {
    pub max_budget: f64,
}

#[derive(Deserialize)]
pub struct ItineraryRequestBody {
    pub city: String,
    pub country: String,
    pub day_count: u32,
    pub max_daily_budget: f64,
    pub interests: Option<String>,
}

#[derive(Serialize)]
pub struct PlannerLimits {
    pub budget_floor: u32,
    pub budget_ceiling: u32,
    pub budget_default: u32,
    pub max_trip_days: u32,
    pub default_trip_days: u32,
    pub default_interests: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/destinations", get(list_destinations))
        .route("/itinerary", post(generate_itinerary))
        .route("/models", get(list_models))
        .route("/config", get(planner_limits))
        .with_state(state)
}

async fn list_destinations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BudgetQuery>,
) -> Json<DestinationListResponse> {
    let filtered = state.catalog.filter_by_budget(query.max_budget);
    debug!(
        "Budget ceiling {} matched {} destinations",
        query.max_budget,
        filtered.len()
    );

    let destinations: Vec<ApiDestination> =
        filtered.into_iter().map(ApiDestination::from).collect();

    Json(DestinationListResponse {
        count: destinations.len(),
        destinations,
    })
}

async fn generate_itinerary(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ItineraryRequestBody>,
) -> Result<Json<ItineraryResult>, StatusCode> {
    if body.day_count == 0 || body.day_count > state.defaults.max_trip_days {
        return Err(StatusCode::BAD_REQUEST);
    }
    if body.max_daily_budget < 0.0 {
        return Err(StatusCode::BAD_REQUEST);
    }

    // Selections must come from the catalog the listing was served from
    let destination = state
        .catalog
        .find(&body.city, &body.country)
        .ok_or(StatusCode::NOT_FOUND)?;

    let total_budget = body.max_daily_budget * f64::from(body.day_count);
    let interests = body
        .interests
        .unwrap_or_else(|| state.defaults.default_interests.clone());

    let trip = TripRequest::new(
        destination.city.clone(),
        destination.country.clone(),
        body.day_count,
        total_budget,
        interests,
    )
    .map_err(|e| {
        warn!("Rejected itinerary request: {e}");
        StatusCode::BAD_REQUEST
    })?;

    let result = state.planner.plan(&trip).await;
    Ok(Json(result))
}

async fn list_models(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ModelInfo>>, StatusCode> {
    state.gemini.list_models().await.map(Json).map_err(|e| {
        warn!("Model listing failed: {e}");
        StatusCode::BAD_GATEWAY
    })
}

async fn planner_limits(State(state): State<Arc<AppState>>) -> Json<PlannerLimits> {
    Json(PlannerLimits {
        budget_floor: state.defaults.budget_floor,
        budget_ceiling: state.defaults.budget_ceiling,
        budget_default: state.defaults.budget_default,
        max_trip_days: state.defaults.max_trip_days,
        default_trip_days: state.defaults.default_trip_days,
        default_interests: state.defaults.default_interests.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_destination_conversion() {
        let destination = Destination::new("Bangkok", "Thailand", 13.7, 100.5, 25.0);
        let api_destination = ApiDestination::from(&destination);
        assert_eq!(api_destination.city, "Bangkok");
        assert_eq!(api_destination.display_name, "Bangkok, Thailand");
        assert_eq!(api_destination.map_label, "Bangkok ($25/day)");
        assert_eq!(api_destination.average_daily_cost, 25.0);
    }
}
