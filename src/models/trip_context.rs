use serde::{Deserialize, Serialize};

use crate::models::attraction::Attraction;
use crate::models::booking::SelectionInput;

/// Per-session trip state. Handed into each core operation by the caller;
/// the services never retain it beyond the call.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TripContext {
    #[serde(default)]
    pub saved_attractions: Vec<Attraction>,
    #[serde(default)]
    pub selected_hotels: Vec<SelectionInput>,
    #[serde(default)]
    pub selected_transport: Vec<SelectionInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
}

/// Partial update merged into a session context by the HTTP layer. Fields
/// left out of the request keep their current values.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TripContextUpdate {
    pub to: Option<String>,
    pub stay_city: Option<String>,
    pub start_date: Option<String>,
    pub duration_days: Option<u32>,
    pub preferences: Option<String>,
    pub selected_hotels: Option<Vec<SelectionInput>>,
    pub selected_transport: Option<Vec<SelectionInput>>,
}

impl TripContext {
    pub fn apply(&mut self, update: TripContextUpdate) {
        if let Some(to) = update.to {
            self.to = Some(to);
        }
        if let Some(stay_city) = update.stay_city {
            self.stay_city = Some(stay_city);
        }
        if let Some(start_date) = update.start_date {
            self.start_date = Some(start_date);
        }
        if let Some(duration_days) = update.duration_days {
            self.duration_days = Some(duration_days);
        }
        if let Some(preferences) = update.preferences {
            self.preferences = Some(preferences);
        }
        if let Some(selected_hotels) = update.selected_hotels {
            self.selected_hotels = selected_hotels;
        }
        if let Some(selected_transport) = update.selected_transport {
            self.selected_transport = selected_transport;
        }
    }
}

/// Caller-supplied overrides for itinerary generation. Missing values are
/// resolved from the session context, then from compiled defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GenerateItineraryParams {
    pub start_date: Option<String>,
    pub num_days: Option<u32>,
    pub preferences: Option<String>,
}
