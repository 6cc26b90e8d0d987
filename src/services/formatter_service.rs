//! Itinerary presentation: a plain-text trip summary plus one swipeable card
//! per confirmed booking and per day. Pure over its inputs; missing optional
//! fields degrade to placeholder strings.

use chrono::{Duration, NaiveDate};

use crate::models::booking::BookingSelection;
use crate::models::itinerary::Itinerary;
use crate::models::responses::{CardType, SuggestionCard};
use crate::models::weather::DailyWeather;

const DAY_PREVIEW_ACTIVITIES: usize = 3;

pub struct FormattedItinerary {
    pub formatted_text: String,
    pub suggestions: Vec<SuggestionCard>,
}

pub fn format_itinerary(
    itinerary: &Itinerary,
    hotel: Option<&BookingSelection>,
    transport: Option<&BookingSelection>,
    city: &str,
    start_weather: &DailyWeather,
) -> FormattedItinerary {
    let end_date = NaiveDate::parse_from_str(&itinerary.start_date, "%Y-%m-%d")
        .map(|start| {
            (start + Duration::days(itinerary.total_days.saturating_sub(1) as i64))
                .format("%Y-%m-%d")
                .to_string()
        })
        .unwrap_or_else(|_| itinerary.start_date.clone());

    let mut suggestions = Vec::new();

    if let Some(hotel) = hotel {
        suggestions.push(SuggestionCard {
            card_type: CardType::Hotel,
            title: format!("🏨 {}", hotel.title_or("Hotel Booking")),
            description: hotel
                .description
                .clone()
                .unwrap_or_else(|| "Your accommodation for the trip".to_string()),
            location: hotel
                .location
                .clone()
                .unwrap_or_else(|| "City Center".to_string()),
            price: Some(hotel.price.clone().unwrap_or_else(|| "TBD".to_string())),
            rating: Some(hotel.rating_display()),
            image: Some(hotel.image.clone().unwrap_or_default()),
            details: format!("Check-in: {}, Check-out: {}", itinerary.start_date, end_date),
            current_weather: start_weather.clone(),
            highlights: None,
            date: None,
        });
    }

    if let Some(transport) = transport {
        suggestions.push(SuggestionCard {
            card_type: CardType::Transport,
            title: format!("✈️ {}", transport.title_or("Transport Booking")),
            description: transport
                .description
                .clone()
                .unwrap_or_else(|| "Your transportation for the trip".to_string()),
            location: format!(
                "{} → {}",
                transport.from.as_deref().unwrap_or("Origin"),
                transport.to.as_deref().unwrap_or(city)
            ),
            price: Some(transport.price.clone().unwrap_or_else(|| "TBD".to_string())),
            rating: Some(transport.rating_display()),
            image: Some(transport.image.clone().unwrap_or_default()),
            details: format!("Departure: {}", itinerary.start_date),
            current_weather: start_weather.clone(),
            highlights: None,
            date: None,
        });
    }

    for day in &itinerary.daily_schedule {
        let preview: Vec<String> = day
            .activities
            .iter()
            .take(DAY_PREVIEW_ACTIVITIES)
            .map(|activity| format!("{}: {}", activity.time, activity.name))
            .collect();

        suggestions.push(SuggestionCard {
            card_type: CardType::ItineraryDay,
            title: format!("📅 Day {}: {}", day.day, day.day_name),
            description: format!("Activities planned for {}", day.date),
            location: city.to_string(),
            price: None,
            rating: None,
            image: None,
            details: preview.join("\n"),
            current_weather: day.weather.clone(),
            highlights: Some(format!("{} activities planned", day.activities.len())),
            date: Some(day.date.clone()),
        });
    }

    let mut formatted_text = format!("\n✈️ **{}**\n", itinerary.trip_title);
    formatted_text.push_str(&format!("📅 Start Date: {}\n", itinerary.start_date));
    formatted_text.push_str(&format!("🏨 Hotel: {}\n", itinerary.hotel));
    formatted_text.push_str(&format!("🚗 Transport: {}\n", itinerary.transport));
    formatted_text.push_str(&format!(
        "📍 Total Attractions: {}\n\n",
        itinerary.total_attractions
    ));
    formatted_text.push_str("✅ **Swipe through the suggestions below to confirm your itinerary!**\n");

    FormattedItinerary {
        formatted_text,
        suggestions,
    }
}
