//! `SmartMap` - budget-aware student travel planning
//!
//! This library provides the core functionality for destination catalog
//! loading, budget filtering, and AI-generated travel itineraries.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod planner;
pub mod prompt;
pub mod web;

// Re-export core types for public API
pub use catalog::DestinationCatalog;
pub use config::SmartMapConfig;
pub use error::SmartMapError;
pub use llm::{GeminiClient, ItineraryGenerator, ModelInfo};
pub use models::{Destination, ItineraryResult, TripRequest};
pub use planner::TripPlanner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SmartMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
