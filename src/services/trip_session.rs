//! The four core trip-session operations: add, view, clear, and the final
//! itinerary generation. All operate on an explicit `TripContext` supplied by
//! the caller; nothing is retained here between calls.

use chrono::Utc;
use rand::Rng;

use crate::models::booking::SelectionInput;
use crate::models::responses::{
    AddAttractionResponse, ClearAttractionsResponse, FinalItineraryResponse, ItineraryResult,
    ViewAttractionsResponse,
};
use crate::models::trip_context::{GenerateItineraryParams, TripContext};
use crate::models::attraction::Attraction;
use crate::services::formatter_service;
use crate::services::itinerary_builder::{self, BuildRequest};
use crate::services::weather_service::WeatherService;

const DEFAULT_START_DATE: &str = "2025-11-15";
const DEFAULT_TRIP_DAYS: u32 = 3;
const DEFAULT_CITY: &str = "India";

/// Save one attraction with the current timestamp. Never fails.
pub fn add_attraction(
    context: &mut TripContext,
    name: &str,
    location: &str,
    description: &str,
    category: &str,
) -> AddAttractionResponse {
    context.saved_attractions.push(Attraction {
        name: name.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        category: if category.is_empty() {
            "General".to_string()
        } else {
            category.to_string()
        },
        added_at: Utc::now().to_rfc3339(),
    });

    let total_saved = context.saved_attractions.len();
    AddAttractionResponse {
        status: "success".to_string(),
        message: format!(
            "Added '{}' to your itinerary! Total saved: {}",
            name, total_saved
        ),
        total_saved,
    }
}

pub fn view_attractions(context: &TripContext) -> ViewAttractionsResponse {
    if context.saved_attractions.is_empty() {
        return ViewAttractionsResponse::Empty {
            message: "No attractions saved yet. Swipe right on some places to add them!"
                .to_string(),
            attractions: Vec::new(),
        };
    }

    ViewAttractionsResponse::Success {
        message: format!(
            "You have {} attractions saved:",
            context.saved_attractions.len()
        ),
        attractions: context.saved_attractions.clone(),
    }
}

pub fn clear_attractions(context: &mut TripContext) -> ClearAttractionsResponse {
    let count = context.saved_attractions.len();
    context.saved_attractions.clear();

    ClearAttractionsResponse {
        status: "success".to_string(),
        message: format!("Cleared {} attractions from your itinerary. Start fresh!", count),
    }
}

/// Resolve trip parameters from the request and context, build the itinerary,
/// and attach the presentation layer (summary text plus suggestion cards).
pub async fn generate_final<R: Rng + ?Sized>(
    context: &TripContext,
    params: &GenerateItineraryParams,
    weather: &WeatherService,
    rng: &mut R,
) -> FinalItineraryResponse {
    if context.saved_attractions.is_empty() {
        return FinalItineraryResponse::Error {
            message: "No attractions to create itinerary from. Please swipe right on some places first!"
                .to_string(),
        };
    }

    let start_date = params
        .start_date
        .clone()
        .filter(|date| !date.is_empty())
        .or_else(|| context.start_date.clone())
        .unwrap_or_else(|| DEFAULT_START_DATE.to_string());
    let num_days = params
        .num_days
        .filter(|days| *days > 0)
        .or(context.duration_days)
        .unwrap_or(DEFAULT_TRIP_DAYS);
    let city = context
        .to
        .clone()
        .or_else(|| context.stay_city.clone())
        .unwrap_or_else(|| DEFAULT_CITY.to_string());
    let preferences = params
        .preferences
        .clone()
        .filter(|prefs| !prefs.is_empty())
        .or_else(|| context.preferences.clone())
        .unwrap_or_default();

    // Only the first confirmed hotel and transport are used.
    let hotel = context
        .selected_hotels
        .first()
        .cloned()
        .map(SelectionInput::into_selection);
    let transport = context
        .selected_transport
        .first()
        .cloned()
        .map(SelectionInput::into_selection);

    let result = itinerary_builder::build(
        BuildRequest {
            attractions: &context.saved_attractions,
            start_date: &start_date,
            num_days,
            preferences: &preferences,
            hotel: hotel.as_ref(),
            transport: transport.as_ref(),
            city: &city,
        },
        weather,
        rng,
    )
    .await;

    match result {
        ItineraryResult::Success {
            itinerary,
            attractions_dropped,
            ..
        } => {
            let start_weather = weather.forecast(&city, &start_date).await;
            let formatted = formatter_service::format_itinerary(
                &itinerary,
                hotel.as_ref(),
                transport.as_ref(),
                &city,
                &start_weather,
            );

            FinalItineraryResponse::Success {
                message: formatted.formatted_text.clone(),
                formatted_itinerary: formatted.formatted_text,
                show_suggestions: true,
                suggestions: formatted.suggestions,
                attractions_dropped,
                itinerary,
            }
        }
        ItineraryResult::Error { message } => FinalItineraryResponse::Error { message },
    }
}
