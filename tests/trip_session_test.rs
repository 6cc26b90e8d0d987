use rand::rngs::StdRng;
use rand::SeedableRng;

use tripflow_api::models::booking::{BookingSelection, SelectionInput};
use tripflow_api::models::responses::{FinalItineraryResponse, ViewAttractionsResponse};
use tripflow_api::models::trip_context::{GenerateItineraryParams, TripContext, TripContextUpdate};
use tripflow_api::services::trip_session;
use tripflow_api::services::weather_service::WeatherService;

fn offline_weather() -> WeatherService {
    WeatherService::with_api_key(None)
}

#[test]
fn add_reports_a_monotonic_count_in_insertion_order() {
    let mut context = TripContext::default();

    let first = trip_session::add_attraction(&mut context, "Red Fort", "Delhi", "Historic fort", "Historical");
    assert_eq!(first.status, "success");
    assert_eq!(first.total_saved, 1);

    let second = trip_session::add_attraction(&mut context, "India Gate", "Delhi", "", "Landmark");
    assert_eq!(second.total_saved, 2);

    match trip_session::view_attractions(&context) {
        ViewAttractionsResponse::Success { attractions, message } => {
            assert_eq!(attractions.len(), 2);
            assert_eq!(attractions[0].name, "Red Fort");
            assert_eq!(attractions[1].name, "India Gate");
            assert!(message.contains("2 attractions"));
        }
        ViewAttractionsResponse::Empty { .. } => panic!("expected saved attractions"),
    }
}

#[test]
fn view_is_idempotent() {
    let mut context = TripContext::default();
    trip_session::add_attraction(&mut context, "Red Fort", "Delhi", "", "Historical");

    let first = serde_json::to_value(trip_session::view_attractions(&context)).unwrap();
    let second = serde_json::to_value(trip_session::view_attractions(&context)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_category_defaults_to_general() {
    let mut context = TripContext::default();
    trip_session::add_attraction(&mut context, "Baga Beach", "Goa", "", "");
    assert_eq!(context.saved_attractions[0].category, "General");
}

#[test]
fn clear_resets_the_collection_and_reports_the_prior_count() {
    let mut context = TripContext::default();
    trip_session::add_attraction(&mut context, "Red Fort", "Delhi", "", "Historical");
    trip_session::add_attraction(&mut context, "India Gate", "Delhi", "", "Landmark");

    let cleared = trip_session::clear_attractions(&mut context);
    assert_eq!(cleared.status, "success");
    assert!(cleared.message.contains("Cleared 2 attractions"));

    match trip_session::view_attractions(&context) {
        ViewAttractionsResponse::Empty { attractions, .. } => assert!(attractions.is_empty()),
        ViewAttractionsResponse::Success { .. } => panic!("expected empty status after clear"),
    }
}

#[actix_rt::test]
async fn generate_without_attractions_is_an_error() {
    let context = TripContext::default();
    let mut rng = StdRng::seed_from_u64(1);
    let response = trip_session::generate_final(
        &context,
        &GenerateItineraryParams::default(),
        &offline_weather(),
        &mut rng,
    )
    .await;

    match response {
        FinalItineraryResponse::Error { message } => {
            assert!(message.contains("No attractions to create itinerary from"))
        }
        FinalItineraryResponse::Success { .. } => panic!("expected error without attractions"),
    }
}

#[actix_rt::test]
async fn generate_resolves_city_and_first_selections_from_context() {
    let mut context = TripContext {
        to: Some("Goa".to_string()),
        start_date: Some("2025-11-15".to_string()),
        duration_days: Some(2),
        selected_hotels: vec![
            SelectionInput::Title("Beach Paradise Resort".to_string()),
            SelectionInput::Title("Backup Hotel".to_string()),
        ],
        selected_transport: vec![SelectionInput::Structured(BookingSelection {
            title: "Air India AI-682".to_string(),
            from: Some("Mumbai".to_string()),
            to: Some("Goa".to_string()),
            ..Default::default()
        })],
        ..Default::default()
    };
    trip_session::add_attraction(&mut context, "Baga Beach", "Goa", "Beach day", "Nature");

    let mut rng = StdRng::seed_from_u64(1);
    let response = trip_session::generate_final(
        &context,
        &GenerateItineraryParams::default(),
        &offline_weather(),
        &mut rng,
    )
    .await;

    match response {
        FinalItineraryResponse::Success {
            itinerary,
            suggestions,
            show_suggestions,
            formatted_itinerary,
            ..
        } => {
            assert_eq!(itinerary.trip_title, "2-Day Goa Trip");
            assert_eq!(itinerary.total_days, 2);
            // Only the first confirmed hotel counts.
            assert_eq!(itinerary.hotel, "Beach Paradise Resort");
            assert_eq!(itinerary.transport, "Air India AI-682");
            assert!(show_suggestions);
            // One card per booking plus one per day.
            assert_eq!(suggestions.len(), 4);
            assert!(formatted_itinerary.contains("Beach Paradise Resort"));
        }
        FinalItineraryResponse::Error { message } => panic!("expected success, got: {}", message),
    }
}

#[actix_rt::test]
async fn generate_params_override_context_values() {
    let mut context = TripContext {
        stay_city: Some("Jaipur".to_string()),
        duration_days: Some(5),
        ..Default::default()
    };
    trip_session::add_attraction(&mut context, "Hawa Mahal", "Jaipur", "", "Historical");

    let params = GenerateItineraryParams {
        start_date: Some("2025-12-01".to_string()),
        num_days: Some(1),
        preferences: None,
    };
    let mut rng = StdRng::seed_from_u64(1);
    let response =
        trip_session::generate_final(&context, &params, &offline_weather(), &mut rng).await;

    match response {
        FinalItineraryResponse::Success { itinerary, .. } => {
            assert_eq!(itinerary.total_days, 1);
            assert_eq!(itinerary.start_date, "2025-12-01");
            // `to` is absent, so the stay city wins.
            assert_eq!(itinerary.trip_title, "1-Day Jaipur Trip");
        }
        FinalItineraryResponse::Error { message } => panic!("expected success, got: {}", message),
    }
}

#[actix_rt::test]
async fn generate_falls_back_to_context_preferences() {
    let mut context = TripContext::default();
    context.apply(TripContextUpdate {
        to: Some("Goa".to_string()),
        preferences: Some("vegetarian food only".to_string()),
        ..Default::default()
    });
    trip_session::add_attraction(&mut context, "Baga Beach", "Goa", "", "Nature");

    let mut rng = StdRng::seed_from_u64(1);
    let response = trip_session::generate_final(
        &context,
        &GenerateItineraryParams::default(),
        &offline_weather(),
        &mut rng,
    )
    .await;

    match response {
        FinalItineraryResponse::Success { itinerary, .. } => {
            assert_eq!(itinerary.preferences, "vegetarian food only");
        }
        FinalItineraryResponse::Error { message } => panic!("expected success, got: {}", message),
    }

    // Explicit request preferences still win over the context value.
    let params = GenerateItineraryParams {
        preferences: Some("beach time".to_string()),
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    let response =
        trip_session::generate_final(&context, &params, &offline_weather(), &mut rng).await;

    match response {
        FinalItineraryResponse::Success { itinerary, .. } => {
            assert_eq!(itinerary.preferences, "beach time");
        }
        FinalItineraryResponse::Error { message } => panic!("expected success, got: {}", message),
    }
}

#[test]
fn selection_input_normalizes_strings_and_records() {
    let from_string: SelectionInput = serde_json::from_value(serde_json::json!("Beach Resort")).unwrap();
    let selection = from_string.into_selection();
    assert_eq!(selection.title, "Beach Resort");
    assert!(selection.location.is_none());

    let from_record: SelectionInput = serde_json::from_value(serde_json::json!({
        "title": "Air India AI-682",
        "from": "Mumbai",
        "to": "Goa",
        "rating": 4.2
    }))
    .unwrap();
    let selection = from_record.into_selection();
    assert_eq!(selection.title, "Air India AI-682");
    assert_eq!(selection.to.as_deref(), Some("Goa"));
    assert_eq!(selection.rating, Some(4.2));
}
