//! # Choreboard Core Library
//!
//! This library provides the core logic for the Choreboard household
//! dashboard. It implements a CLI-first philosophy where every widget is
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Model**: An explicit in-memory [`Dashboard`] (theme, chores,
//!   forecast panel); rendering is a pure projection of it
//! - **Storage**: TOML-based preferences holding the single persisted
//!   value, the selected theme tag
//! - **Weather**: A [`WeatherProvider`] seam with a bundled mock that
//!   synthesizes bounded data after a fixed delay
//! - **Calendar**: One-shot month-grid computation with today marking
//!
//! ## Key Components
//!
//! - [`Dashboard`]: The session model; every mutation yields an [`Event`]
//! - [`ChoreList`]: Checklist with monotonic ids and random energy tags
//! - [`WeatherPanel`]: Generation-token guard against stale responses
//! - [`Preferences`]: Theme preference persistence

pub mod calendar;
pub mod chore;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod render;
pub mod storage;
pub mod theme;
pub mod weather;

pub use calendar::{CalendarCell, MonthGrid};
pub use chore::{Chore, ChoreList, EnergyLevel};
pub use dashboard::Dashboard;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use storage::Preferences;
pub use theme::ThemeState;
pub use weather::{
    optimal_times, Condition, MockWeatherProvider, OptimalTimes, PanelState, RequestToken,
    WeatherPanel, WeatherProvider, WeatherSnapshot,
};
