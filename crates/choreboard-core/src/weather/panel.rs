//! Forecast panel state with stale-response protection.
//!
//! Each request gets a generation token. A completion only installs its
//! snapshot when its token matches the latest issued generation, so a
//! slow earlier response can never overwrite a newer one. In-flight
//! requests are not cancelled; their completions simply miss.

use serde::{Deserialize, Serialize};

use super::WeatherSnapshot;
use crate::error::ValidationError;

/// Proof of which request a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What the forecast region currently shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PanelState {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight; the loading indicator is visible.
    Loading { city: String },
    /// The latest snapshot is on display.
    Loaded(WeatherSnapshot),
}

/// Tracks requests and the snapshot on display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPanel {
    generation: u64,
    state: PanelState,
}

impl WeatherPanel {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: PanelState::Idle,
        }
    }

    /// Start a request for the given city.
    ///
    /// The city is trimmed; empty input is rejected before anything is
    /// displayed. On success the panel switches to the loading state
    /// and the returned token identifies this request.
    pub fn begin_request(&mut self, city: &str) -> Result<RequestToken, ValidationError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ValidationError::EmptyInput { field: "city" });
        }
        self.generation += 1;
        self.state = PanelState::Loading {
            city: city.to_string(),
        };
        Ok(RequestToken(self.generation))
    }

    /// Install a snapshot for a finished request.
    ///
    /// Returns `true` when the snapshot was installed, `false` when the
    /// token was stale (a newer request has been issued since).
    pub fn complete(&mut self, token: RequestToken, snapshot: WeatherSnapshot) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.state = PanelState::Loaded(snapshot);
        true
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PanelState::Loading { .. })
    }

    /// The snapshot on display, if any.
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.state {
            PanelState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

impl Default for WeatherPanel {
    fn default() -> Self {
        Self::new()
    }
}
