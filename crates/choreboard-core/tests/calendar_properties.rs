//! Property tests for month-grid construction.

use chrono::NaiveDate;
use choreboard_core::MonthGrid;
use proptest::prelude::*;

/// Month length computed independently of the library (Gregorian rules).
fn expected_days(year: i32, month: u32) -> u32 {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        _ => 28,
    }
}

proptest! {
    #[test]
    fn day_cell_count_matches_month_length(year in 1900i32..2400, month in 1u32..=12) {
        let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let elsewhere = NaiveDate::from_ymd_opt(1899, 1, 1).unwrap();
        let grid = MonthGrid::new(date, elsewhere);

        prop_assert_eq!(grid.days_in_month, expected_days(year, month));
        prop_assert_eq!(grid.day_cell_count() as u32, grid.days_in_month);
        prop_assert_eq!(grid.cells.len() as u32, grid.first_day_offset + grid.days_in_month);
        prop_assert!(grid.first_day_offset < 7);
    }

    #[test]
    fn exactly_one_today_cell_inside_the_month(
        year in 1900i32..2400,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let today = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let grid = MonthGrid::new(today, today);
        let marked = grid.cells.iter().filter(|c| c.is_today).count();
        prop_assert_eq!(marked, 1);
        prop_assert_eq!(grid.today_cell().unwrap().day, Some(day));
    }

    #[test]
    fn no_today_cell_for_a_different_month(year in 1900i32..2399, month in 1u32..=12) {
        let date = NaiveDate::from_ymd_opt(year, month, 15).unwrap();
        // Same day number, one year later: day/month match but year differs.
        let today = NaiveDate::from_ymd_opt(year + 1, month, 15).unwrap();
        let grid = MonthGrid::new(date, today);
        prop_assert!(grid.today_cell().is_none());
    }
}
