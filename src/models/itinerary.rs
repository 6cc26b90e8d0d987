use serde::{Deserialize, Serialize};

use crate::models::weather::DailyWeather;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Transport,
    Hotel,
    Meal,
    Attraction,
}

/// One entry in a day's schedule, pinned to a fixed wall-clock slot. No
/// conflict resolution or duration-based packing is performed.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduledActivity {
    pub time: String,
    pub activity_type: ActivityType,
    pub icon: String,
    pub name: String,
    pub description: String,
    pub details: String,
    pub location: String,
    pub estimated_duration: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DaySchedule {
    pub day: u32,
    pub date: String,
    pub day_name: String,
    pub weather: DailyWeather,
    pub activities: Vec<ScheduledActivity>,
}

/// The assembled trip plan. `total_days` always equals `daily_schedule.len()`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub trip_title: String,
    pub start_date: String,
    pub total_days: u32,
    pub total_attractions: usize,
    pub hotel: String,
    pub transport: String,
    pub preferences: String,
    pub daily_schedule: Vec<DaySchedule>,
}
