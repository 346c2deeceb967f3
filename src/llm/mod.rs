//! Remote text-generation client
//!
//! Talks to the Gemini REST API to turn a rendered prompt into itinerary
//! text, and enumerates the models the API supports.

use async_trait::async_trait;

mod error;
mod gemini;

pub use error::GeminiError;
pub use gemini::{GeminiClient, ModelInfo};

/// Seam between the trip planner and the concrete remote client
///
/// Tests substitute a scripted generator; production uses [`GeminiClient`].
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Send one prompt to the remote model and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}
