use serde::{Deserialize, Serialize};

use crate::models::attraction::Attraction;
use crate::models::itinerary::Itinerary;
use crate::models::weather::DailyWeather;

/// Result of a raw itinerary build. All failure paths come back as the
/// `Error` variant; the builder never panics or raises.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ItineraryResult {
    Success {
        itinerary: Itinerary,
        message: String,
        /// Attractions that could not be placed in any slot. Reported rather
        /// than silently discarded.
        attractions_dropped: usize,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AddAttractionResponse {
    pub status: String,
    pub message: String,
    pub total_saved: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ViewAttractionsResponse {
    Success {
        message: String,
        attractions: Vec<Attraction>,
    },
    Empty {
        message: String,
        attractions: Vec<Attraction>,
    },
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClearAttractionsResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Hotel,
    Transport,
    ItineraryDay,
}

/// A swipeable card the mobile client renders: one per confirmed booking and
/// one per itinerary day.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SuggestionCard {
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub details: String,
    pub current_weather: DailyWeather,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Response for the full generate operation: the built itinerary plus the
/// presentation layer (summary text and suggestion cards).
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FinalItineraryResponse {
    Success {
        itinerary: Itinerary,
        formatted_itinerary: String,
        message: String,
        show_suggestions: bool,
        suggestions: Vec<SuggestionCard>,
        attractions_dropped: usize,
    },
    Error {
        message: String,
    },
}
