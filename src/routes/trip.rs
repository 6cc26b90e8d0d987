use actix_web::{web, HttpResponse, Responder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::models::trip_context::{GenerateItineraryParams, TripContextUpdate};
use crate::services::session_store::SessionStore;
use crate::services::trip_session;
use crate::services::weather_service::WeatherService;

#[derive(Debug, Deserialize, Serialize)]
pub struct AddAttractionRequest {
    pub attraction_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "General".to_string()
}

fn parse_session_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/*
    POST /api/trips
*/
pub async fn create_trip(store: web::Data<SessionStore>) -> impl Responder {
    let session_id = store.create();
    HttpResponse::Created().json(json!({ "session_id": session_id }))
}

/*
    PUT /api/trips/{id}/context
*/
pub async fn update_context(
    path: web::Path<String>,
    body: web::Json<TripContextUpdate>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Some(id) => id,
        None => return HttpResponse::BadRequest().body("Invalid session ID"),
    };

    let update = body.into_inner();
    match store.with_context(id, |context| context.apply(update)) {
        Some(()) => HttpResponse::Ok().json(json!({ "status": "success" })),
        None => HttpResponse::NotFound().body("Trip session not found"),
    }
}

/*
    POST /api/trips/{id}/attractions
*/
pub async fn add_attraction(
    path: web::Path<String>,
    body: web::Json<AddAttractionRequest>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Some(id) => id,
        None => return HttpResponse::BadRequest().body("Invalid session ID"),
    };

    let request = body.into_inner();
    let response = store.with_context(id, |context| {
        trip_session::add_attraction(
            context,
            &request.attraction_name,
            &request.location,
            &request.description,
            &request.category,
        )
    });

    match response {
        Some(response) => HttpResponse::Ok().json(response),
        None => HttpResponse::NotFound().body("Trip session not found"),
    }
}

/*
    GET /api/trips/{id}/attractions
*/
pub async fn view_attractions(
    path: web::Path<String>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Some(id) => id,
        None => return HttpResponse::BadRequest().body("Invalid session ID"),
    };

    match store.with_context(id, |context| trip_session::view_attractions(context)) {
        Some(response) => HttpResponse::Ok().json(response),
        None => HttpResponse::NotFound().body("Trip session not found"),
    }
}

/*
    DELETE /api/trips/{id}/attractions
*/
pub async fn clear_attractions(
    path: web::Path<String>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Some(id) => id,
        None => return HttpResponse::BadRequest().body("Invalid session ID"),
    };

    match store.with_context(id, trip_session::clear_attractions) {
        Some(response) => HttpResponse::Ok().json(response),
        None => HttpResponse::NotFound().body("Trip session not found"),
    }
}

/*
    POST /api/trips/{id}/itinerary
*/
pub async fn generate_itinerary(
    path: web::Path<String>,
    body: web::Json<GenerateItineraryParams>,
    store: web::Data<SessionStore>,
    weather: web::Data<WeatherService>,
) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Some(id) => id,
        None => return HttpResponse::BadRequest().body("Invalid session ID"),
    };

    // Snapshot the context so the store lock is not held across the weather
    // calls.
    let context = match store.snapshot(id) {
        Some(context) => context,
        None => return HttpResponse::NotFound().body("Trip session not found"),
    };

    let mut rng = StdRng::from_entropy();
    let response =
        trip_session::generate_final(&context, &body.into_inner(), weather.get_ref(), &mut rng)
            .await;

    HttpResponse::Ok().json(response)
}
