//! Restaurant Picker over a fixed per-city table.
//!
//! City matching is a case-insensitive substring check in either direction;
//! unknown cities fall back to a generic table, so a pick can never come up
//! empty. Selection is uniform sampling without replacement through the
//! caller's `Rng`, which keeps tests deterministic with a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::restaurant::Restaurant;

const KNOWN_CITIES: [&str; 5] = ["Mumbai", "Delhi", "Goa", "Bangalore", "Jaipur"];

/// Returns `min(count, table len)` restaurants for the city, no duplicates.
pub fn recommend_restaurants<R: Rng + ?Sized>(
    city: &str,
    count: usize,
    rng: &mut R,
) -> Vec<Restaurant> {
    let table = table_for_city(city);
    let take = count.min(table.len());
    table.choose_multiple(rng, take).cloned().collect()
}

fn table_for_city(city: &str) -> Vec<Restaurant> {
    let query = city.to_lowercase();

    for known in KNOWN_CITIES {
        let stored = known.to_lowercase();
        if stored.contains(&query) || query.contains(&stored) {
            return city_restaurants(known);
        }
    }

    default_restaurants()
}

fn entry(name: &str, cuisine: &str, price: &str, rating: f32, location: &str) -> Restaurant {
    Restaurant {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        price: price.to_string(),
        rating,
        location: location.to_string(),
    }
}

fn city_restaurants(city: &str) -> Vec<Restaurant> {
    match city {
        "Mumbai" => vec![
            entry("Trishna", "Seafood", "₹₹₹", 4.5, "Kala Ghoda"),
            entry("Britannia & Co", "Parsi", "₹₹", 4.3, "Ballard Estate"),
            entry("Bademiya", "Mughlai", "₹₹", 4.4, "Colaba"),
            entry("Leopold Cafe", "Continental", "₹₹", 4.2, "Colaba"),
            entry("Mahesh Lunch Home", "Seafood", "₹₹₹", 4.6, "Juhu"),
        ],
        "Delhi" => vec![
            entry("Karim's", "Mughlai", "₹₹", 4.5, "Jama Masjid"),
            entry("Indian Accent", "Modern Indian", "₹₹₹₹", 4.7, "Lodhi Road"),
            entry("Paranthe Wali Gali", "North Indian", "₹", 4.3, "Chandni Chowk"),
            entry("Bukhara", "North Indian", "₹₹₹₹", 4.8, "Chanakyapuri"),
            entry("SodaBottleOpenerWala", "Parsi", "₹₹", 4.4, "Khan Market"),
        ],
        "Goa" => vec![
            entry("Fisherman's Wharf", "Goan Seafood", "₹₹₹", 4.5, "Panjim"),
            entry("Vinayak Family Restaurant", "Goan", "₹₹", 4.3, "Assagao"),
            entry("Pousada by the Beach", "Continental", "₹₹₹", 4.6, "Calangute"),
            entry("Sublime", "Fusion", "₹₹₹₹", 4.7, "Morjim"),
            entry("Black Sheep Bistro", "European", "₹₹₹", 4.5, "Panjim"),
        ],
        "Bangalore" => vec![
            entry("MTR", "South Indian", "₹₹", 4.5, "Lalbagh"),
            entry("Koshy's", "Continental", "₹₹", 4.3, "MG Road"),
            entry("Karavalli", "Coastal Indian", "₹₹₹₹", 4.7, "UB City"),
            entry("Vidyarthi Bhavan", "South Indian", "₹", 4.4, "Basavanagudi"),
            entry("The Only Place", "Steakhouse", "₹₹₹", 4.5, "Museum Road"),
        ],
        "Jaipur" => vec![
            entry("Laxmi Mishthan Bhandar (LMB)", "Rajasthani", "₹₹", 4.4, "Johari Bazaar"),
            entry("Chokhi Dhani", "Rajasthani", "₹₹₹", 4.6, "Tonk Road"),
            entry("Suvarna Mahal", "Rajasthani Royal", "₹₹₹₹", 4.8, "Rambagh Palace"),
            entry("Rawat Mishthan Bhandar", "Sweets & Snacks", "₹", 4.5, "Sindhi Camp"),
            entry("Handi Restaurant", "Rajasthani", "₹₹", 4.3, "MI Road"),
        ],
        _ => default_restaurants(),
    }
}

fn default_restaurants() -> Vec<Restaurant> {
    vec![
        entry("Local Cafe", "Multi-Cuisine", "₹₹", 4.0, "City Center"),
        entry("Street Food Hub", "Street Food", "₹", 4.2, "Main Market"),
        entry("The Grand Restaurant", "Indian", "₹₹₹", 4.4, "Downtown"),
        entry("Cafe Delight", "Continental", "₹₹", 4.1, "Shopping District"),
        entry("Spice Route", "Indian", "₹₹", 4.3, "Near Hotel Area"),
    ]
}
