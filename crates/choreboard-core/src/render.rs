//! Text projections of the dashboard model.
//!
//! Every function here is pure: model values in, display text out. No
//! I/O and no mutation, so each widget can be tested without a
//! rendered surface.

use chrono::Local;

use crate::calendar::{MonthGrid, WEEKDAY_ABBREVS};
use crate::chore::{Chore, ChoreList};
use crate::weather::{OptimalTimes, PanelState, WeatherPanel, WeatherSnapshot};

/// Shown while a forecast request is in flight.
pub const LOADING_TEXT: &str = "Loading weather data...";

/// Render the month grid: header, weekday row, then weeks of day
/// cells. Today's cell is bracketed.
pub fn month_grid(grid: &MonthGrid) -> String {
    let mut out = String::new();
    out.push_str(&grid.header());
    out.push('\n');

    for name in WEEKDAY_ABBREVS {
        out.push_str(&format!("{name:>4}"));
    }
    out.push('\n');

    for (i, cell) in grid.cells.iter().enumerate() {
        let text = match cell.day {
            None => "    ".to_string(),
            Some(day) if cell.is_today => format!("[{day:>2}]"),
            Some(day) => format!(" {day:>2} "),
        };
        out.push_str(&text);
        if (i + 1) % 7 == 0 {
            out.push('\n');
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Render one checklist row: id, checkbox, text, energy badge.
/// Completed rows get struck-through text.
pub fn chore_row(chore: &Chore) -> String {
    let style = chore.row_style();
    let mark = if chore.completed { "x" } else { " " };
    let text = if style.strikethrough {
        format!("~~{}~~", chore.text)
    } else {
        chore.text.clone()
    };
    format!("{:>3} [{mark}] {text}  [{}]", chore.id, chore.energy.label())
}

/// Render the whole checklist.
pub fn chore_list(list: &ChoreList) -> String {
    if list.is_empty() {
        return "No chores yet. Add one below.\n".to_string();
    }
    let mut out = String::new();
    for chore in list.entries() {
        out.push_str(&chore_row(chore));
        out.push('\n');
    }
    out
}

/// Render a forecast card.
pub fn weather_card(snapshot: &WeatherSnapshot) -> String {
    let local = snapshot.fetched_at.with_timezone(&Local);
    format!(
        "{city}\n{condition} ({icon})\n{temp}°C\nHumidity: {humidity}%\nWind: {wind:.1} km/h\n{date}\nUpdated: {time}\n",
        city = snapshot.city,
        condition = snapshot.condition.label(),
        icon = snapshot.icon(),
        temp = snapshot.temperature_c,
        humidity = snapshot.humidity_pct,
        wind = snapshot.wind_kmh,
        date = local.format("%A, %b %-d"),
        time = local.format("%H:%M"),
    )
}

/// Render the forecast region for whatever the panel currently shows.
pub fn weather_panel(panel: &WeatherPanel) -> String {
    match panel.state() {
        PanelState::Idle => "Enter a city to see the forecast\n".to_string(),
        PanelState::Loading { city } => format!("{LOADING_TEXT} ({city})\n"),
        PanelState::Loaded(snapshot) => weather_card(snapshot),
    }
}

/// Render the two optimal-time slots.
pub fn optimal_times(times: &OptimalTimes) -> String {
    format!(
        "Morning: {}\nAfternoon: {}\n",
        times.morning, times.afternoon
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chore::ChoreList;
    use crate::weather::Condition;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn grid_marks_today_and_names_the_month() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let text = month_grid(&MonthGrid::new(today, today));
        assert!(text.starts_with("March 2025\n"));
        assert!(text.contains(" Sun Mon Tue Wed Thu Fri Sat\n"));
        assert!(text.contains("[14]"));
        assert_eq!(text.matches('[').count(), 1);
    }

    #[test]
    fn completed_rows_are_struck_through() {
        let mut list = ChoreList::with_seed(5);
        let id = list.add("Clean garage").unwrap().id;
        assert!(chore_row(&list.entries()[0]).contains("[ ] Clean garage"));

        list.toggle(id).unwrap();
        let row = chore_row(&list.entries()[0]);
        assert!(row.contains("[x] ~~Clean garage~~"));
        assert!(row.contains("Energy]"));
    }

    #[test]
    fn weather_card_shows_every_field() {
        let card = weather_card(&WeatherSnapshot {
            city: "Paris".to_string(),
            temperature_c: 22,
            condition: Condition::Rainy,
            humidity_pct: 55,
            wind_kmh: 12.34,
            fetched_at: Utc::now(),
        });
        assert!(card.contains("Paris"));
        assert!(card.contains("Rainy (cloud-rain)"));
        assert!(card.contains("22°C"));
        assert!(card.contains("Humidity: 55%"));
        assert!(card.contains("Wind: 12.3 km/h"));
        assert!(card.contains("Updated: "));
    }

    #[test]
    fn panel_projection_follows_its_state() {
        let mut panel = WeatherPanel::new();
        assert!(weather_panel(&panel).contains("Enter a city"));

        let token = panel.begin_request("Paris").unwrap();
        assert!(weather_panel(&panel).contains(LOADING_TEXT));

        panel.complete(
            token,
            WeatherSnapshot {
                city: "Paris".to_string(),
                temperature_c: 20,
                condition: Condition::Sunny,
                humidity_pct: 40,
                wind_kmh: 9.0,
                fetched_at: Utc::now(),
            },
        );
        assert!(weather_panel(&panel).contains("Sunny (sun)"));
    }
}
