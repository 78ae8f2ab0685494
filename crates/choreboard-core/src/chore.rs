//! Chore checklist model.
//!
//! Entries live for the session only -- the checklist is never
//! persisted. Each accepted entry gets an id from a monotonically
//! increasing counter (never reused, so ids stay unique even if
//! deletion is added later) and an energy tag drawn uniformly at
//! random.

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Energy level randomly assigned to a new chore.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    /// Badge text, e.g. `Low Energy`.
    pub fn label(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "Low Energy",
            EnergyLevel::Medium => "Medium Energy",
            EnergyLevel::High => "High Energy",
        }
    }

    /// Style tag for the badge, e.g. `low-energy`.
    pub fn tag(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "low-energy",
            EnergyLevel::Medium => "medium-energy",
            EnergyLevel::High => "high-energy",
        }
    }

    fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => EnergyLevel::Low,
            1 => EnergyLevel::Medium,
            _ => EnergyLevel::High,
        }
    }
}

/// A single checklist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chore {
    /// Unique within the session; ids are never reused.
    pub id: u64,
    /// User-supplied text, already trimmed.
    pub text: String,
    pub energy: EnergyLevel,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Chore {
    /// Visual presentation of the row for the current completion state.
    pub fn row_style(&self) -> RowStyle {
        if self.completed {
            RowStyle {
                opacity: 0.6,
                strikethrough: true,
            }
        } else {
            RowStyle {
                opacity: 1.0,
                strikethrough: false,
            }
        }
    }
}

/// Visual style applied to a checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowStyle {
    pub opacity: f32,
    pub strikethrough: bool,
}

/// The session-scoped checklist.
#[derive(Debug, Clone)]
pub struct ChoreList {
    entries: Vec<Chore>,
    next_id: u64,
    rng: Mcg128Xsl64,
}

impl ChoreList {
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }

    /// Deterministic list for tests: energy assignment follows the seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Add a new entry from user text.
    ///
    /// The text is trimmed first; empty input is rejected. The new
    /// entry gets the next counter id and a random energy tag, and is
    /// appended after all existing entries.
    pub fn add(&mut self, text: &str) -> Result<&Chore, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyInput { field: "chore" });
        }

        let chore = Chore {
            id: self.next_id,
            text: text.to_string(),
            energy: EnergyLevel::random(&mut self.rng),
            completed: false,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        let idx = self.entries.len();
        self.entries.push(chore);
        Ok(&self.entries[idx])
    }

    /// Flip the completion state of an entry. Returns the new state.
    pub fn toggle(&mut self, id: u64) -> Result<bool, ValidationError> {
        let chore = self
            .entries
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ValidationError::UnknownChore { id })?;
        chore.completed = !chore.completed;
        Ok(chore.completed)
    }

    pub fn entries(&self) -> &[Chore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChoreList {
    fn default() -> Self {
        Self::new()
    }
}
