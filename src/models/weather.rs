use serde::{Deserialize, Serialize};

/// Icon buckets the client maps to weather artwork. Derived from the
/// provider's numeric condition ids via fixed range thresholds.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Haze,
    Clear,
    SunCloud,
    Overcast,
}

/// Coarse forecast for one trip day. Recomputed on every build; always
/// present, never null (placeholder when the provider is unavailable).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DailyWeather {
    pub temp: String,
    pub condition: String,
    pub description: String,
    pub icon: WeatherIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<f32>,
}

impl DailyWeather {
    /// Returned whenever no weather API credential is configured.
    pub fn placeholder() -> Self {
        Self {
            temp: "25-30°C".to_string(),
            condition: "Partly Cloudy".to_string(),
            description: "Pleasant weather expected".to_string(),
            icon: WeatherIcon::SunCloud,
            humidity: None,
            wind: None,
        }
    }

    /// Returned when the provider answered but had no usable sample.
    pub fn unavailable() -> Self {
        Self {
            temp: "25-30°C".to_string(),
            condition: "Check weather app".to_string(),
            description: "Weather forecast unavailable".to_string(),
            icon: WeatherIcon::SunCloud,
            humidity: None,
            wind: None,
        }
    }

    /// Returned on network errors, timeouts, or unparseable payloads.
    pub fn degraded() -> Self {
        Self {
            temp: "25-30°C".to_string(),
            condition: "Pleasant".to_string(),
            description: "Check weather app for latest updates".to_string(),
            icon: WeatherIcon::SunCloud,
            humidity: None,
            wind: None,
        }
    }
}
