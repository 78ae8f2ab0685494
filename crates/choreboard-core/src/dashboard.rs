//! The in-memory dashboard model.
//!
//! Holds the active theme, the session's chore list, and the forecast
//! panel. Rendering is a pure projection of this model (see `render`);
//! persistence is limited to the theme preference and is the caller's
//! job, driven by the `ThemeChanged` event.
//!
//! All handlers run to completion; the only suspension point is the
//! provider delay between `request_weather` and `install_weather`.

use chrono::Utc;

use crate::chore::ChoreList;
use crate::error::ValidationError;
use crate::events::Event;
use crate::storage::Preferences;
use crate::theme::ThemeState;
use crate::weather::{RequestToken, WeatherPanel, WeatherSnapshot};

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub theme: ThemeState,
    pub chores: ChoreList,
    pub weather: WeatherPanel,
}

impl Dashboard {
    /// Build the model, restoring the saved theme before anything is
    /// rendered.
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            theme: ThemeState::from_saved(prefs.theme()),
            chores: ChoreList::new(),
            weather: WeatherPanel::new(),
        }
    }

    /// Deterministic model for tests.
    pub fn with_seed(prefs: &Preferences, seed: u64) -> Self {
        Self {
            theme: ThemeState::from_saved(prefs.theme()),
            chores: ChoreList::with_seed(seed),
            weather: WeatherPanel::new(),
        }
    }

    /// Switch the active theme. The caller persists the tag when it
    /// sees the returned event.
    pub fn select_theme(&mut self, tag: &str) -> Event {
        self.theme.select(tag);
        Event::ThemeChanged {
            tag: tag.to_string(),
            at: Utc::now(),
        }
    }

    /// Add a chore from user text (trimmed; empty input is rejected).
    pub fn add_chore(&mut self, text: &str) -> Result<Event, ValidationError> {
        let chore = self.chores.add(text)?;
        Ok(Event::ChoreAdded {
            id: chore.id,
            text: chore.text.clone(),
            energy: chore.energy,
            at: Utc::now(),
        })
    }

    /// Flip a chore's completion state.
    pub fn toggle_chore(&mut self, id: u64) -> Result<Event, ValidationError> {
        let completed = self.chores.toggle(id)?;
        Ok(Event::ChoreToggled {
            id,
            completed,
            at: Utc::now(),
        })
    }

    /// Begin a forecast request; the panel shows its loading state
    /// immediately. The token must be handed back to `install_weather`
    /// together with the provider's snapshot.
    pub fn request_weather(
        &mut self,
        city: &str,
    ) -> Result<(RequestToken, Event), ValidationError> {
        let token = self.weather.begin_request(city)?;
        Ok((
            token,
            Event::WeatherRequested {
                city: city.trim().to_string(),
                generation: token.generation(),
                at: Utc::now(),
            },
        ))
    }

    /// Install a finished forecast. Stale results (a newer request was
    /// issued meanwhile) are dropped and reported as such.
    pub fn install_weather(&mut self, token: RequestToken, snapshot: WeatherSnapshot) -> Event {
        let city = snapshot.city.clone();
        let condition = snapshot.condition;
        let temperature_c = snapshot.temperature_c;
        if self.weather.complete(token, snapshot) {
            Event::WeatherUpdated {
                city,
                condition,
                temperature_c,
                at: Utc::now(),
            }
        } else {
            Event::WeatherDiscarded {
                city,
                generation: token.generation(),
                at: Utc::now(),
            }
        }
    }
}
