//! Optimal-time recommendations derived from the latest forecast.
//!
//! A fixed rule table maps condition and temperature to short texts for
//! the two activity slots. Rainy weather takes priority at any
//! temperature; hot sun pushes work to the morning; everything else
//! gets the moderate-conditions default.

use serde::{Deserialize, Serialize};

use super::Condition;

/// Recommendation texts for the two fixed activity slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalTimes {
    pub morning: &'static str,
    pub afternoon: &'static str,
}

/// Derive the morning/afternoon recommendations from a forecast.
pub fn optimal_times(condition: Condition, temperature_c: i32) -> OptimalTimes {
    if condition == Condition::Sunny && temperature_c > 25 {
        OptimalTimes {
            morning: "Cool temperatures, best for outdoor chores",
            afternoon: "Hot, better for indoor tasks with AC",
        }
    } else if condition == Condition::Rainy {
        OptimalTimes {
            morning: "Light rain expected, good for indoor chores",
            afternoon: "Heavier rain predicted, avoid outdoor tasks",
        }
    } else {
        OptimalTimes {
            morning: "Cool temperatures, high energy",
            afternoon: "Moderate temperatures, good light",
        }
    }
}
