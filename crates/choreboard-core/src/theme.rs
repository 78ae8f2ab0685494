//! Theme selection state.
//!
//! The selectable tag set is owned by the presentation layer; the core
//! only tracks the active tag and restores a previously saved one. A
//! saved value is applied verbatim -- it is NOT validated against the
//! known set, matching the behavior users already rely on.

use serde::{Deserialize, Serialize};

/// Tags the stock presentation ships selectors for.
pub const KNOWN_TAGS: [&str; 4] = ["default", "dark", "nature", "pastel"];

/// Theme applied when no preference has been saved.
pub const DEFAULT_TAG: &str = "default";

/// The currently active visual theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    active: String,
}

impl ThemeState {
    /// Restore from a saved preference, falling back to the default
    /// theme when none was saved. Unknown saved values are applied
    /// verbatim.
    pub fn from_saved(saved: Option<&str>) -> Self {
        Self {
            active: saved.unwrap_or(DEFAULT_TAG).to_string(),
        }
    }

    /// Switch to the given tag.
    pub fn select(&mut self, tag: &str) {
        self.active = tag.to_string();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether a tag is one the stock presentation knows about.
    pub fn is_known(tag: &str) -> bool {
        KNOWN_TAGS.contains(&tag)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::from_saved(None)
    }
}
