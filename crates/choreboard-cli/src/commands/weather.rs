use std::time::Duration;

use choreboard_core::{render, MockWeatherProvider, WeatherPanel, WeatherProvider};

pub fn run(city: &str, delay_ms: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut panel = WeatherPanel::new();
    let token = panel.begin_request(city)?;

    // Loading indicator goes up before the simulated fetch starts.
    print!("{}", render::weather_panel(&panel));

    let provider = MockWeatherProvider::with_delay(Duration::from_millis(delay_ms));
    let rt = tokio::runtime::Runtime::new()?;
    let snapshot = rt.block_on(provider.fetch(city.trim()))?;

    panel.complete(token, snapshot);
    if let Some(snapshot) = panel.snapshot() {
        let times = choreboard_core::optimal_times(snapshot.condition, snapshot.temperature_c);
        print!("{}", render::weather_card(snapshot));
        print!("{}", render::optimal_times(&times));
    }
    Ok(())
}
