//! Weather Lookup backed by the OpenWeatherMap 5-day/3-hour forecast API.
//!
//! The lookup never fails: without an `OPENWEATHER_API_KEY` it returns a
//! static pleasant-weather placeholder, and any network or payload problem
//! degrades to an equivalent friendly fallback. One outbound request per
//! invocation when a key is configured; nothing is cached.

use std::{env, time::Duration};

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};
use serde::Deserialize;

use crate::models::weather::{DailyWeather, WeatherIcon};

const FORECAST_URL: &str = "http://api.openweathermap.org/data/2.5/forecast";
const COUNTRY_CODE: &str = "IN";
// Forecasts are always fetched for Indian cities, so sample dates and the
// noon tie-break use IST rather than UTC.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;
const FORECAST_SAMPLES: u32 = 40; // 5 days of 3-hour intervals
const REQUEST_TIMEOUT_SECS: u64 = 5;
const MS_TO_KMH: f64 = 3.6;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastSample>,
}

#[derive(Debug, Deserialize)]
struct ForecastSample {
    dt: i64,
    main: SampleMain,
    #[serde(default)]
    weather: Vec<SampleCondition>,
    wind: SampleWind,
}

#[derive(Debug, Deserialize)]
struct SampleMain {
    temp_min: f64,
    temp_max: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct SampleCondition {
    id: u32,
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct SampleWind {
    speed: f64,
}

pub struct WeatherService {
    http_client: reqwest::Client,
    api_key: Option<String>,
}

impl WeatherService {
    pub fn new() -> Self {
        Self::with_api_key(env::var("OPENWEATHER_API_KEY").ok().filter(|k| !k.is_empty()))
    }

    pub fn with_api_key(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            println!("OPENWEATHER_API_KEY not set. Weather lookups will return the default forecast.");
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http_client,
            api_key,
        }
    }

    /// Forecast for one city and calendar date. Always returns a value.
    pub async fn forecast(&self, city: &str, date: &str) -> DailyWeather {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => return DailyWeather::placeholder(),
        };

        match self.fetch_forecast(api_key, city, date).await {
            Ok(weather) => weather,
            Err(e) => {
                eprintln!("Weather API error for {}: {}", city, e);
                DailyWeather::degraded()
            }
        }
    }

    async fn fetch_forecast(
        &self,
        api_key: &str,
        city: &str,
        date: &str,
    ) -> Result<DailyWeather, Box<dyn std::error::Error>> {
        let target_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;

        let response = self
            .http_client
            .get(FORECAST_URL)
            .query(&[
                ("q", format!("{},{}", city, COUNTRY_CODE)),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
                ("cnt", FORECAST_SAMPLES.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(DailyWeather::unavailable());
        }

        let forecast: ForecastResponse = response.json().await?;

        let sample = match closest_sample(&forecast.list, target_date) {
            Some(sample) => sample,
            None => return Ok(DailyWeather::unavailable()),
        };
        let condition = match sample.weather.first() {
            Some(condition) => condition,
            None => return Ok(DailyWeather::unavailable()),
        };

        Ok(DailyWeather {
            temp: format!(
                "{}-{}°C",
                sample.main.temp_min.round() as i64,
                sample.main.temp_max.round() as i64
            ),
            condition: condition.main.clone(),
            description: capitalize(&condition.description),
            icon: icon_for(condition.id),
            humidity: Some(sample.main.humidity),
            wind: Some(((sample.wind.speed * MS_TO_KMH) * 10.0).round() as f32 / 10.0),
        })
    }
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the sample whose calendar date is closest to the target, preferring
/// the local-noon sample on ties.
fn closest_sample(samples: &[ForecastSample], target: NaiveDate) -> Option<&ForecastSample> {
    let ist = FixedOffset::east_opt(IST_OFFSET_SECS).unwrap();
    let mut best: Option<(&ForecastSample, i64)> = None;

    for sample in samples {
        let forecast_dt = match DateTime::from_timestamp(sample.dt, 0) {
            Some(dt) => dt.with_timezone(&ist),
            None => continue,
        };
        let diff = (forecast_dt.date_naive() - target).num_days().abs();

        match best {
            Some((_, best_diff)) if diff > best_diff => {}
            Some((_, best_diff)) if diff == best_diff && forecast_dt.hour() != 12 => {}
            _ => best = Some((sample, diff)),
        }
    }

    best.map(|(sample, _)| sample)
}

fn icon_for(condition_id: u32) -> WeatherIcon {
    match condition_id {
        id if id < 300 => WeatherIcon::Thunderstorm,
        id if id < 400 => WeatherIcon::Drizzle,
        id if id < 600 => WeatherIcon::Rain,
        id if id < 700 => WeatherIcon::Snow,
        id if id < 800 => WeatherIcon::Haze,
        800 => WeatherIcon::Clear,
        801 => WeatherIcon::SunCloud,
        id if id < 805 => WeatherIcon::Overcast,
        _ => WeatherIcon::Clear,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
