//! The weather-provider seam and the bundled mock implementation.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

use super::{Condition, WeatherSnapshot};
use crate::error::Result;

/// Anything that can produce a forecast for a city name.
///
/// Implementations own their own latency and data source; callers only
/// see the returned snapshot.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Unique identifier (e.g. "mock").
    fn name(&self) -> &str;

    /// Produce a snapshot for the given city.
    async fn fetch(&self, city: &str) -> Result<WeatherSnapshot>;
}

/// Provider that synthesizes pseudo-random data after a fixed delay.
///
/// Temperature lands in [15, 30) °C, humidity in [30, 80) %, wind in
/// [5.0, 20.0) km/h, condition uniform over the four values.
pub struct MockWeatherProvider {
    delay: Duration,
    rng: Mutex<Mcg128Xsl64>,
}

impl MockWeatherProvider {
    /// Default simulated network latency.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(Mcg128Xsl64::seed_from_u64(rand::thread_rng().gen())),
        }
    }

    /// Deterministic provider for tests: data follows the seed.
    pub fn with_seed(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(Mcg128Xsl64::seed_from_u64(seed)),
        }
    }

    fn synthesize(&self, city: &str) -> WeatherSnapshot {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let condition = Condition::ALL[rng.gen_range(0..Condition::ALL.len())];
        WeatherSnapshot {
            city: city.to_string(),
            temperature_c: rng.gen_range(15..30),
            condition,
            humidity_pct: rng.gen_range(30..80),
            wind_kmh: rng.gen_range(5.0..20.0),
            fetched_at: Utc::now(),
        }
    }
}

impl Default for MockWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, city: &str) -> Result<WeatherSnapshot> {
        tokio::time::sleep(self.delay).await;
        Ok(self.synthesize(city))
    }
}
