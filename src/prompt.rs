//! Itinerary prompt rendering
//!
//! Pure string templating: identical trip parameters always produce
//! byte-identical prompt text.

use crate::models::TripRequest;

/// Render the itinerary request prompt for the remote text-generation model
///
/// The section layout (day-by-day Morning/Afternoon/Evening headings, then
/// a Food/Transport/Activities cost breakdown) is fixed; only the trip
/// parameters are substituted.
#[must_use]
pub fn build_prompt(trip: &TripRequest) -> String {
    format!(
        "You are a friendly local travel guide for students.\n\
         \n\
         Create a {days}-day travel itinerary for {city}, {country}.\n\
         Total Budget: ${budget}\n\
         Student Interests: {interests}\n\
         \n\
         Use this format:\n\
         \n\
         ## 📅 Day 1: [Theme]\n\
         - 🌅 Morning:\n\
         - 🌞 Afternoon:\n\
         - 🌙 Evening:\n\
         \n\
         ## 💰 Estimated Cost\n\
         - 🍽 Food:\n\
         - 🚕 Transport:\n\
         - 🎟 Activities:\n",
        days = trip.day_count,
        city = trip.city,
        country = trip.country,
        budget = format_dollars(trip.total_budget),
        interests = trip.interests,
    )
}

/// Format a dollar amount without a trailing ".00" for whole values
fn format_dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}
