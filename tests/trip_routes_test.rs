use actix_web::{test, web, App};
use serde_json::json;

use tripflow_api::routes;
use tripflow_api::services::session_store::SessionStore;
use tripflow_api::services::weather_service::WeatherService;

macro_rules! test_app {
    () => {{
        let sessions = web::Data::new(SessionStore::new());
        let weather = web::Data::new(WeatherService::with_api_key(None));
        test::init_service(
            App::new()
                .app_data(sessions)
                .app_data(weather)
                .configure(routes::configure),
        )
        .await
    }};
}

macro_rules! create_session {
    ($app:expr) => {{
        let req = test::TestRequest::post().uri("/api/trips").to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        body["session_id"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_invalid_session_id_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/trips/not-a-uuid/attractions")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_unknown_session_is_not_found() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/trips/00000000-0000-4000-8000-000000000000/attractions")
        .set_json(&json!({ "attraction_name": "Baga Beach" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_generate_on_fresh_session_returns_tagged_error() {
    let app = test_app!();
    let session_id = create_session!(app);

    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{}/itinerary", session_id))
        .set_json(&json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("No attractions to create itinerary from"));
}

#[actix_web::test]
async fn test_full_trip_planning_flow() {
    let app = test_app!();
    let session_id = create_session!(app);

    // Set trip parameters and confirmed bookings, mixing plain-string and
    // structured selection shapes.
    let req = test::TestRequest::put()
        .uri(&format!("/api/trips/{}/context", session_id))
        .set_json(&json!({
            "to": "Goa",
            "start_date": "2025-11-15",
            "duration_days": 3,
            "selected_hotels": ["Beach Paradise Resort"],
            "selected_transport": [{
                "title": "Air India AI-682",
                "from": "Mumbai",
                "to": "Goa",
                "flight_number": "AI-682"
            }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // Save two attractions.
    for name in ["Fort Aguada", "Baga Beach"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/trips/{}/attractions", session_id))
            .set_json(&json!({ "attraction_name": name, "location": "Goa" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/trips/{}/attractions", session_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["attractions"].as_array().unwrap().len(), 2);
    assert_eq!(body["attractions"][0]["name"], "Fort Aguada");

    // Generate the final itinerary.
    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{}/itinerary", session_id))
        .set_json(&json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");

    let itinerary = &body["itinerary"];
    assert_eq!(itinerary["total_days"], 3);
    assert_eq!(itinerary["hotel"], "Beach Paradise Resort");
    assert_eq!(itinerary["transport"], "Air India AI-682");
    assert_eq!(itinerary["daily_schedule"].as_array().unwrap().len(), 3);

    // Day one starts with the arrival flight.
    let day_one = &itinerary["daily_schedule"][0]["activities"];
    assert_eq!(day_one[0]["activity_type"], "transport");
    assert_eq!(day_one[0]["time"], "08:00 AM");

    // Hotel card, transport card, and one card per day.
    let suggestions = body["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0]["type"], "hotel");
    assert_eq!(suggestions[1]["type"], "transport");
    assert_eq!(suggestions[2]["type"], "itinerary_day");
    // No credential is configured, so every weather snapshot is the
    // placeholder.
    assert_eq!(suggestions[0]["current_weather"]["condition"], "Partly Cloudy");
    assert_eq!(suggestions[2]["current_weather"]["icon"], "sun-cloud");

    // Clear and confirm the session is empty again.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/trips/{}/attractions", session_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("Cleared 2 attractions"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/trips/{}/attractions", session_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "empty");
}
