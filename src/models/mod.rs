pub mod attraction;
pub mod booking;
pub mod itinerary;
pub mod responses;
pub mod restaurant;
pub mod trip_context;
pub mod weather;
