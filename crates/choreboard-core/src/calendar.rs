//! Month-grid construction and date formatting.
//!
//! The grid is computed once from a reference date and never mutated:
//! a header label, seven fixed weekday abbreviations, leading blank
//! cells up to the weekday of the 1st, then one cell per day of the
//! month. Exactly one cell is marked as today when the grid's month
//! matches the reference "today".

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed weekday abbreviations, Sunday-first.
pub const WEEKDAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Format a date in long form, e.g. `Friday, March 14, 2025`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Long-form rendering of the current local date.
pub fn today_long_date() -> String {
    long_date(Local::now().date_naive())
}

/// One slot in the month grid: either a leading blank or a day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Day of month (1-based), or `None` for a leading blank cell.
    pub day: Option<u32>,
    /// True for the single cell matching today's day/month/year.
    pub is_today: bool,
}

/// A computed month view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    /// Month number, 1 (January) through 12 (December).
    pub month: u32,
    /// Weekday index of the 1st of the month, 0=Sunday .. 6=Saturday.
    pub first_day_offset: u32,
    /// Number of days in the month.
    pub days_in_month: u32,
    /// Leading blanks followed by day cells 1..=days_in_month.
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Build the grid for the month containing `date`, marking `today`
    /// if it falls inside that month.
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        let year = date.year();
        let month = date.month();

        let first = date.with_day(1).unwrap_or(date);
        let first_day_offset = first.weekday().num_days_from_sunday();
        let days_in_month = days_in_month(year, month);

        let mut cells = Vec::with_capacity((first_day_offset + days_in_month) as usize);
        for _ in 0..first_day_offset {
            cells.push(CalendarCell {
                day: None,
                is_today: false,
            });
        }
        for day in 1..=days_in_month {
            let is_today =
                day == today.day() && month == today.month() && year == today.year();
            cells.push(CalendarCell {
                day: Some(day),
                is_today,
            });
        }

        Self {
            year,
            month,
            first_day_offset,
            days_in_month,
            cells,
        }
    }

    /// Grid for the current local month.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self::new(today, today)
    }

    /// Header label, e.g. `March 2025`.
    pub fn header(&self) -> String {
        // %B needs a full date; the 1st always exists.
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1);
        match first {
            Some(d) => format!("{} {}", d.format("%B"), self.year),
            None => format!("{} {}", self.month, self.year),
        }
    }

    /// Number of non-blank day cells.
    pub fn day_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.day.is_some()).count()
    }

    /// The cell marked as today, if the grid's month contains it.
    pub fn today_cell(&self) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.is_today)
    }
}

/// Days in the given month via the "0th day of next month" technique:
/// the predecessor of the 1st of the following month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_counts_cover_every_month_length() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2000, 2), 29); // divisible by 400
        assert_eq!(days_in_month(1900, 2), 28); // divisible by 100 only
        assert_eq!(days_in_month(2025, 12), 31); // year rollover
    }

    #[test]
    fn first_day_offset_is_sunday_indexed() {
        // 2025-03-01 is a Saturday.
        let grid = MonthGrid::new(date(2025, 3, 1), date(2025, 3, 14));
        assert_eq!(grid.first_day_offset, 6);
        // 2024-09-01 is a Sunday.
        let grid = MonthGrid::new(date(2024, 9, 15), date(2025, 1, 1));
        assert_eq!(grid.first_day_offset, 0);
    }

    #[test]
    fn exactly_one_today_cell_in_current_month() {
        let today = date(2025, 3, 14);
        let grid = MonthGrid::new(today, today);
        let marked: Vec<_> = grid.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].day, Some(14));
    }

    #[test]
    fn no_today_cell_outside_current_month() {
        let grid = MonthGrid::new(date(2025, 4, 1), date(2025, 3, 14));
        assert!(grid.today_cell().is_none());
    }

    #[test]
    fn blank_cells_precede_day_cells() {
        let grid = MonthGrid::new(date(2025, 3, 1), date(2025, 3, 1));
        assert_eq!(grid.cells.len(), 6 + 31);
        assert!(grid.cells[..6].iter().all(|c| c.day.is_none()));
        assert_eq!(grid.cells[6].day, Some(1));
        assert_eq!(grid.day_cell_count(), 31);
    }

    #[test]
    fn header_names_month_and_year() {
        let grid = MonthGrid::new(date(2025, 3, 1), date(2025, 3, 1));
        assert_eq!(grid.header(), "March 2025");
    }

    #[test]
    fn long_date_format() {
        assert_eq!(long_date(date(2025, 3, 14)), "Friday, March 14, 2025");
        assert_eq!(long_date(date(2026, 1, 2)), "Friday, January 2, 2026");
    }
}
