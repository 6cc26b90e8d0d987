use actix_web::web;

pub mod trip;

/// Route table shared by the server binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(|| async { "OK" }))
        .service(
            web::scope("/api").service(
                web::scope("/trips")
                    .route("", web::post().to(trip::create_trip))
                    .route("/{id}/context", web::put().to(trip::update_context))
                    .route("/{id}/attractions", web::post().to(trip::add_attraction))
                    .route("/{id}/attractions", web::get().to(trip::view_attractions))
                    .route(
                        "/{id}/attractions",
                        web::delete().to(trip::clear_attractions),
                    )
                    .route("/{id}/itinerary", web::post().to(trip::generate_itinerary)),
            ),
        );
}
