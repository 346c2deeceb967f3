//! Core data models for destinations and trip planning

pub mod destination;
pub mod trip;

pub use destination::Destination;
pub use trip::{ItineraryResult, TripRequest};
