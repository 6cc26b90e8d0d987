pub mod formatter_service;
pub mod itinerary_builder;
pub mod restaurant_service;
pub mod session_store;
pub mod trip_session;
pub mod weather_service;
