//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.
//! They run against the dev data directory so a developer's real
//! preferences are left alone.

use std::process::Command;
use std::sync::Mutex;

/// Theme tests share one preferences file; serialize them.
static THEME_LOCK: Mutex<()> = Mutex::new(());

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "choreboard-cli", "--"])
        .args(args)
        .env("CHOREBOARD_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_date_prints_long_form() {
    let (stdout, _, code) = run_cli(&["date"]);
    assert_eq!(code, 0, "date failed");
    // "Weekday, Month D, YYYY" has exactly two commas.
    assert_eq!(stdout.trim().matches(',').count(), 2, "{stdout:?}");
}

#[test]
fn test_calendar_prints_month_grid() {
    let (stdout, _, code) = run_cli(&["calendar"]);
    assert_eq!(code, 0, "calendar failed");
    assert!(stdout.contains("Sun Mon Tue Wed Thu Fri Sat"));
    assert!(stdout.contains('['), "today should be marked: {stdout:?}");
}

#[test]
fn test_theme_set_then_get() {
    let _guard = THEME_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (_, _, code) = run_cli(&["theme", "set", "dark"]);
    assert_eq!(code, 0, "theme set failed");

    let (stdout, _, code) = run_cli(&["theme", "get"]);
    assert_eq!(code, 0, "theme get failed");
    assert_eq!(stdout.trim(), "dark");
}

#[test]
fn test_theme_set_unknown_tag_is_stored_with_a_hint() {
    let _guard = THEME_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (stdout, stderr, code) = run_cli(&["theme", "set", "solarized-zebra"]);
    assert_eq!(code, 0, "unknown tags are still accepted");
    assert_eq!(stdout.trim(), "ok");
    assert!(stderr.contains("not a stock theme"), "{stderr:?}");
}

#[test]
fn test_theme_list_names_stock_tags() {
    let (stdout, _, code) = run_cli(&["theme", "list"]);
    assert_eq!(code, 0, "theme list failed");
    assert!(stdout.contains("default"));
    assert!(stdout.contains("dark"));
}

#[test]
fn test_chore_add() {
    let (stdout, _, code) = run_cli(&["chore", "add", "Clean garage"]);
    assert_eq!(code, 0, "chore add failed");
    assert!(stdout.contains("Chore added: 1"));
    assert!(stdout.contains("Clean garage"));
    assert!(stdout.contains("Energy]"));
}

#[test]
fn test_chore_add_rejects_blank_text() {
    let (_, stderr, code) = run_cli(&["chore", "add", "   "]);
    assert_ne!(code, 0, "blank chore should be rejected");
    assert!(stderr.contains("chore"), "{stderr:?}");
}

#[test]
fn test_weather_shows_loading_then_result() {
    let (stdout, _, code) = run_cli(&["weather", "Paris", "--delay-ms", "10"]);
    assert_eq!(code, 0, "weather failed");
    assert!(stdout.contains("Loading weather data..."));
    assert!(stdout.contains("Paris"));
    assert!(stdout.contains("°C"));
    assert!(stdout.contains("Morning:"));
    assert!(stdout.contains("Afternoon:"));
}

#[test]
fn test_weather_rejects_blank_city() {
    let (_, stderr, code) = run_cli(&["weather", "  ", "--delay-ms", "10"]);
    assert_ne!(code, 0, "blank city should be rejected");
    assert!(stderr.contains("city"), "{stderr:?}");
}
