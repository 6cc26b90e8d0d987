//! Itinerary Builder: merges confirmed bookings, saved attractions, and
//! per-day restaurant picks into a time-ordered daily schedule.
//!
//! Slots are fixed wall-clock times. Day one gets arrival and check-in
//! bookkeeping, the last day gets early-morning catch-up slots, checkout, and
//! departure. A one-day trip fires both branches in the same day, which can
//! overlap the 07:00/09:00 catch-up slots with the 08:00 arrival; that is the
//! shipped behavior and is pinned by tests.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::attraction::Attraction;
use crate::models::booking::BookingSelection;
use crate::models::itinerary::{ActivityType, DaySchedule, Itinerary, ScheduledActivity};
use crate::models::responses::ItineraryResult;
use crate::models::restaurant::Restaurant;
use crate::services::restaurant_service;
use crate::services::weather_service::WeatherService;

const ARRIVAL_TIME: &str = "08:00 AM";
const CHECK_IN_TIME: &str = "11:00 AM";
const LUNCH_TIME: &str = "01:00 PM";
const AFTERNOON_SLOTS: [&str; 2] = ["03:00 PM", "05:30 PM"];
const DINNER_TIME: &str = "08:00 PM";
const HOTEL_RETURN_TIME: &str = "10:00 PM";
const EARLY_MORNING_SLOTS: [&str; 2] = ["07:00 AM", "09:00 AM"];
const CHECK_OUT_TIME: &str = "11:00 AM";
const DEPARTURE_TIME: &str = "02:00 PM";
const MEALS_PER_DAY: u32 = 2;

pub struct BuildRequest<'a> {
    pub attractions: &'a [Attraction],
    pub start_date: &'a str,
    pub num_days: u32,
    pub preferences: &'a str,
    pub hotel: Option<&'a BookingSelection>,
    pub transport: Option<&'a BookingSelection>,
    pub city: &'a str,
}

/// Build a day-by-day itinerary. All failures come back as tagged results.
pub async fn build<R: Rng + ?Sized>(
    request: BuildRequest<'_>,
    weather: &WeatherService,
    rng: &mut R,
) -> ItineraryResult {
    if request.attractions.is_empty() {
        return ItineraryResult::Error {
            message: "No attractions provided. Please swipe right on some places first!"
                .to_string(),
        };
    }

    let start = match NaiveDate::parse_from_str(request.start_date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return ItineraryResult::Error {
                message: format!("Invalid date format: {}. Use YYYY-MM-DD", request.start_date),
            }
        }
    };

    let num_days = request.num_days.max(1);
    let restaurants = restaurant_service::recommend_restaurants(
        request.city,
        (num_days * MEALS_PER_DAY) as usize,
        rng,
    );

    let mut attraction_index = 0usize;
    let mut restaurant_index = 0usize;
    let mut daily_schedule = Vec::with_capacity(num_days as usize);

    for day in 0..num_days {
        let day_date = start + Duration::days(day as i64);
        let mut activities: Vec<ScheduledActivity> = Vec::new();

        // Arrival day: transport in, then hotel check-in.
        if day == 0 {
            if let Some(transport) = request.transport {
                activities.push(arrival_activity(transport, request.city));
            }
            if let Some(hotel) = request.hotel {
                activities.push(check_in_activity(hotel));
            }
        }

        let lunch = next_restaurant(&restaurants, &mut restaurant_index);
        activities.push(meal_activity(LUNCH_TIME, "Lunch", "🍽️", "1-1.5 hours", &lunch));

        for slot in AFTERNOON_SLOTS {
            if attraction_index < request.attractions.len() {
                activities.push(attraction_activity(
                    slot,
                    &request.attractions[attraction_index],
                    "1.5-2 hours",
                ));
                attraction_index += 1;
            }
        }

        let dinner = next_restaurant(&restaurants, &mut restaurant_index);
        activities.push(meal_activity(DINNER_TIME, "Dinner", "🍴", "1.5-2 hours", &dinner));

        if let Some(hotel) = request.hotel {
            activities.push(hotel_return_activity(hotel));
        }

        // Departure day: leftover attractions go into early-morning slots,
        // then checkout and the return journey close out the trip.
        if day == num_days - 1 {
            let mut slot_index = 0;
            while attraction_index < request.attractions.len()
                && slot_index < EARLY_MORNING_SLOTS.len()
            {
                activities.insert(
                    slot_index,
                    attraction_activity(
                        EARLY_MORNING_SLOTS[slot_index],
                        &request.attractions[attraction_index],
                        "1 hour",
                    ),
                );
                attraction_index += 1;
                slot_index += 1;
            }

            if let Some(hotel) = request.hotel {
                activities.push(check_out_activity(hotel));
            }
            if let Some(transport) = request.transport {
                activities.push(departure_activity(transport, request.city));
            }
        }

        let date = day_date.format("%Y-%m-%d").to_string();
        let day_weather = weather.forecast(request.city, &date).await;

        daily_schedule.push(DaySchedule {
            day: day + 1,
            date,
            day_name: day_date.format("%A").to_string(),
            weather: day_weather,
            activities,
        });
    }

    let attractions_dropped = request.attractions.len() - attraction_index;
    if attractions_dropped > 0 {
        println!(
            "Itinerary for {} left {} attraction(s) unscheduled",
            request.city, attractions_dropped
        );
    }

    ItineraryResult::Success {
        message: format!(
            "Itinerary created for {} days with {} attractions!",
            num_days,
            request.attractions.len()
        ),
        attractions_dropped,
        itinerary: Itinerary {
            trip_title: format!("{}-Day {} Trip", num_days, request.city),
            start_date: request.start_date.to_string(),
            total_days: num_days,
            total_attractions: request.attractions.len(),
            hotel: request
                .hotel
                .map(|h| h.title_or("Hotel TBD").to_string())
                .unwrap_or_else(|| "Hotel TBD".to_string()),
            transport: request
                .transport
                .map(|t| t.title_or("Transport TBD").to_string())
                .unwrap_or_else(|| "Transport TBD".to_string()),
            preferences: request.preferences.to_string(),
            daily_schedule,
        },
    }
}

/// Two meals per day; cycles from the front once the picked list runs out.
fn next_restaurant(restaurants: &[Restaurant], index: &mut usize) -> Restaurant {
    let restaurant = if restaurants.is_empty() {
        Restaurant {
            name: "Hotel Restaurant".to_string(),
            cuisine: "Multi-Cuisine".to_string(),
            price: "₹₹".to_string(),
            rating: 4.0,
            location: "Hotel".to_string(),
        }
    } else {
        restaurants[*index % restaurants.len()].clone()
    };
    *index += 1;
    restaurant
}

fn arrival_activity(transport: &BookingSelection, city: &str) -> ScheduledActivity {
    let details = match &transport.flight_number {
        Some(flight_number) => format!(
            "Flight Number: {}, Terminal: {}",
            flight_number,
            transport.from.as_deref().unwrap_or("Check details")
        ),
        None => format!(
            "Departs: {}, Arrives: {}",
            transport.from.as_deref().unwrap_or("TBD"),
            transport.to.as_deref().unwrap_or(city)
        ),
    };

    ScheduledActivity {
        time: ARRIVAL_TIME.to_string(),
        activity_type: ActivityType::Transport,
        icon: "✈️".to_string(),
        name: format!("Arrive via {}", transport.title_or("Flight")),
        description: transport
            .description
            .clone()
            .unwrap_or_else(|| "Arrival flight".to_string()),
        details,
        location: format!("{} Airport", transport.to.as_deref().unwrap_or(city)),
        estimated_duration: "Transfer to hotel: 1 hour".to_string(),
    }
}

fn check_in_activity(hotel: &BookingSelection) -> ScheduledActivity {
    let address = hotel.location.as_deref().unwrap_or("City Center");

    ScheduledActivity {
        time: CHECK_IN_TIME.to_string(),
        activity_type: ActivityType::Hotel,
        icon: "🏨".to_string(),
        name: format!("Check-in at {}", hotel.title_or("Hotel")),
        description: hotel
            .description
            .clone()
            .unwrap_or_else(|| "Hotel accommodation".to_string()),
        details: format!(
            "Address: {}, Rating: {}⭐, Price: {}",
            address,
            hotel.rating_display(),
            hotel.price.as_deref().unwrap_or("TBD")
        ),
        location: address.to_string(),
        estimated_duration: "Check-in: 30 mins, Freshen up: 1 hour".to_string(),
    }
}

fn meal_activity(
    time: &str,
    meal: &str,
    icon: &str,
    duration: &str,
    restaurant: &Restaurant,
) -> ScheduledActivity {
    ScheduledActivity {
        time: time.to_string(),
        activity_type: ActivityType::Meal,
        icon: icon.to_string(),
        name: format!("{} at {}", meal, restaurant.name),
        description: format!("{} cuisine", restaurant.cuisine),
        details: format!(
            "Rating: {}⭐, Price Range: {}, Location: {}",
            restaurant.rating, restaurant.price, restaurant.location
        ),
        location: restaurant.location.clone(),
        estimated_duration: duration.to_string(),
    }
}

fn attraction_activity(time: &str, attraction: &Attraction, duration: &str) -> ScheduledActivity {
    ScheduledActivity {
        time: time.to_string(),
        activity_type: ActivityType::Attraction,
        icon: "📍".to_string(),
        name: attraction.name.clone(),
        description: attraction.description.clone(),
        details: format!("Category: {}", attraction.category),
        location: attraction.location.clone(),
        estimated_duration: duration.to_string(),
    }
}

fn hotel_return_activity(hotel: &BookingSelection) -> ScheduledActivity {
    let address = hotel.location.as_deref().unwrap_or("City Center");

    ScheduledActivity {
        time: HOTEL_RETURN_TIME.to_string(),
        activity_type: ActivityType::Hotel,
        icon: "🛏️".to_string(),
        name: format!("Return to {}", hotel.title_or("Hotel")),
        description: "Rest and overnight stay".to_string(),
        details: format!("Address: {}", address),
        location: address.to_string(),
        estimated_duration: "Overnight".to_string(),
    }
}

fn check_out_activity(hotel: &BookingSelection) -> ScheduledActivity {
    let address = hotel.location.as_deref().unwrap_or("City Center");

    ScheduledActivity {
        time: CHECK_OUT_TIME.to_string(),
        activity_type: ActivityType::Hotel,
        icon: "🏨".to_string(),
        name: format!("Check-out from {}", hotel.title_or("Hotel")),
        description: "End of stay".to_string(),
        details: format!("Address: {}", address),
        location: address.to_string(),
        estimated_duration: "30 mins".to_string(),
    }
}

fn departure_activity(transport: &BookingSelection, city: &str) -> ScheduledActivity {
    let details = match &transport.flight_number {
        Some(flight_number) => format!("Flight Number: {}, Departs: {}", flight_number, city),
        None => format!(
            "From: {}, To: {}",
            city,
            transport.from.as_deref().unwrap_or("Home")
        ),
    };

    ScheduledActivity {
        time: DEPARTURE_TIME.to_string(),
        activity_type: ActivityType::Transport,
        icon: "✈️".to_string(),
        name: format!("Depart via {}", transport.title_or("Flight")),
        description: "Return journey".to_string(),
        details,
        location: format!("{} Airport", city),
        estimated_duration: "Check-in 2 hours before flight".to_string(),
    }
}
