//! Weather forecast types and the mock provider.
//!
//! A snapshot is synthesized per request and replaced wholesale by the
//! next one; nothing is persisted. The provider sits behind a trait so
//! a real API-backed implementation can be substituted without touching
//! any rendering or panel logic.

pub mod advice;
mod panel;
mod provider;

pub use advice::{optimal_times, OptimalTimes};
pub use panel::{PanelState, RequestToken, WeatherPanel};
pub use provider::{MockWeatherProvider, WeatherProvider};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather condition enumeration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    PartlyCloudy,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::PartlyCloudy,
    ];

    /// Display text, e.g. `Partly Cloudy`.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::PartlyCloudy => "Partly Cloudy",
        }
    }

    /// Icon tag for the condition.
    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Sunny => "sun",
            Condition::Cloudy => "cloud",
            Condition::Rainy => "cloud-rain",
            Condition::PartlyCloudy => "cloud-sun",
        }
    }
}

/// A synthesized forecast for one city, immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    /// Whole degrees Celsius, within [15, 30).
    pub temperature_c: i32,
    pub condition: Condition,
    /// Relative humidity percent, within [30, 80).
    pub humidity_pct: u8,
    /// Wind speed in km/h, within [5.0, 20.0).
    pub wind_kmh: f64,
    /// When the snapshot was produced.
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Icon tag derived from the condition.
    pub fn icon(&self) -> &'static str {
        self.condition.icon()
    }
}
