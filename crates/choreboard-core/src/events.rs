use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chore::EnergyLevel;
use crate::weather::Condition;

/// Every state change in the dashboard produces an Event.
/// Frontends render from the model and log or display these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ThemeChanged {
        tag: String,
        at: DateTime<Utc>,
    },
    ChoreAdded {
        id: u64,
        text: String,
        energy: EnergyLevel,
        at: DateTime<Utc>,
    },
    ChoreToggled {
        id: u64,
        completed: bool,
        at: DateTime<Utc>,
    },
    /// A forecast request was issued and the loading state shown.
    WeatherRequested {
        city: String,
        generation: u64,
        at: DateTime<Utc>,
    },
    /// A forecast result replaced the display.
    WeatherUpdated {
        city: String,
        condition: Condition,
        temperature_c: i32,
        at: DateTime<Utc>,
    },
    /// A stale forecast result arrived after a newer request and was dropped.
    WeatherDiscarded {
        city: String,
        generation: u64,
        at: DateTime<Utc>,
    },
}
