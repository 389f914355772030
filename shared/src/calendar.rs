//! Calendar domain logic for the holiday dashboard.
//!
//! Everything here is pure: the month grid is a function of the displayed
//! month, the holiday catalog and "today", so the UI only has to draw it.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Holiday, HolidayCatalog, DATE_FORMAT};

/// Six rows of seven days, whatever the month length
pub const GRID_CELLS: usize = 42;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Displayed calendar month. `month0` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    month0: u32,
}

impl MonthCursor {
    /// `None` when `month0` is not in 0..=11
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        (month0 < 12).then_some(Self { year, month0 })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Month of the local clock
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// January wraps back to December of the previous year
    pub fn previous(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self { month0: self.month0 - 1, ..self }
        }
    }

    /// December wraps forward to January of the next year
    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self { month0: self.month0 + 1, ..self }
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month0)
    }

    /// Header text such as "May 2025"
    pub fn title(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

/// One day of the rendered grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub in_current_month: bool,
    pub is_today: bool,
    pub holiday: Option<Holiday>,
}

impl DayCell {
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    /// CSS classes for the cell, in the order the stylesheet expects
    pub fn css_classes(&self) -> String {
        let mut classes = vec!["calendar-day"];
        if !self.in_current_month {
            classes.push("other-month");
        }
        if self.is_today {
            classes.push("today");
        }
        if self.is_holiday() {
            classes.push("holiday");
        }
        classes.join(" ")
    }
}

/// Build the 42 cells of `cursor`'s month, starting on the Sunday on or before
/// the first of the month.
///
/// Holidays are looked up in the catalog entry of each cell's own year, so the
/// leading/trailing days of neighbouring years are annotated too. When the
/// catalog holds several holidays on one date the first one stored wins.
///
/// Months whose six weeks do not fit in chrono's date range yield no cells.
pub fn build_month_grid(cursor: MonthCursor, catalog: &HolidayCatalog, today: NaiveDate) -> Vec<DayCell> {
    let Some(start) = grid_start(cursor) else {
        log::warn!("Month {} is outside the supported date range", cursor.title());
        return Vec::new();
    };

    start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let key = date.format(DATE_FORMAT).to_string();
            DayCell {
                date,
                day_of_month: date.day(),
                in_current_month: date.year() == cursor.year && date.month0() == cursor.month0,
                is_today: date == today,
                holiday: catalog.find(date.year(), &key).cloned(),
            }
        })
        .collect()
}

/// First cell of the grid, if all 42 days are representable
fn grid_start(cursor: MonthCursor) -> Option<NaiveDate> {
    let first = cursor.first_day()?;
    let lead = i64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_signed(Duration::days(lead))?;
    start.checked_add_signed(Duration::days(GRID_CELLS as i64 - 1))?;
    Some(start)
}

/// English month name for a zero-based month index
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("Invalid")
}

/// Long form used across the UI, e.g. "Thursday, May 1, 2025". Strings that
/// are not ISO dates are returned unchanged.
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(d) => format!("{}, {} {}, {}", d.format("%A"), month_name(d.month0()), d.day(), d.year()),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn may_2025() -> MonthCursor {
        MonthCursor::new(2025, 4).unwrap()
    }

    #[test]
    fn test_every_month_has_42_cells_starting_on_sunday() {
        let catalog = HolidayCatalog::new();
        let today = ymd(2025, 1, 1);

        for year in [1999, 2000, 2024, 2025, 2100] {
            for month0 in 0..12 {
                let cursor = MonthCursor::new(year, month0).unwrap();
                let grid = build_month_grid(cursor, &catalog, today);

                assert_eq!(grid.len(), GRID_CELLS, "{}", cursor.title());
                assert_eq!(grid[0].date.weekday(), Weekday::Sun);

                let first = cursor.first_day().unwrap();
                let last = cursor.next().first_day().unwrap().pred_opt().unwrap();
                assert!(grid.first().unwrap().date <= first);
                assert!(grid.last().unwrap().date >= last);

                for pair in grid.windows(2) {
                    assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
                }
            }
        }
    }

    #[test]
    fn test_in_current_month_flags_match_requested_month() {
        let catalog = HolidayCatalog::new();
        let cursor = MonthCursor::new(2024, 1).unwrap(); // February, leap year
        let grid = build_month_grid(cursor, &catalog, ymd(2024, 2, 10));

        let in_month: Vec<_> = grid.iter().filter(|c| c.in_current_month).collect();
        assert_eq!(in_month.len(), 29);
        for cell in &in_month {
            assert_eq!(cell.date.month0(), 1);
            assert_eq!(cell.date.year(), 2024);
        }
        for cell in grid.iter().filter(|c| !c.in_current_month) {
            assert_ne!(cell.date.month0(), 1);
        }
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_days() {
        // June 1st 2025 is a Sunday
        let cursor = MonthCursor::new(2025, 5).unwrap();
        let grid = build_month_grid(cursor, &HolidayCatalog::new(), ymd(2025, 6, 1));
        assert_eq!(grid[0].date, ymd(2025, 6, 1));
        assert!(grid[0].in_current_month);
        assert!(grid[0].is_today);
        assert_eq!(grid.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_holiday_matches_only_its_own_cell() {
        let catalog: HolidayCatalog =
            [(2025, vec![Holiday::new("2025-05-01", "Día del Trabajador")])].into_iter().collect();
        let grid = build_month_grid(may_2025(), &catalog, ymd(2025, 1, 1));

        let marked: Vec<_> = grid.iter().filter(|c| c.is_holiday()).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, ymd(2025, 5, 1));
        assert_eq!(marked[0].holiday.as_ref().unwrap().name, "Día del Trabajador");
        assert_eq!(marked[0].css_classes(), "calendar-day holiday");
    }

    #[test]
    fn test_first_stored_holiday_wins_on_duplicate_dates() {
        let catalog: HolidayCatalog = [(
            2025,
            vec![
                Holiday::new("2025-05-25", "Revolución de Mayo"),
                Holiday::new("2025-05-25", "Duplicate"),
            ],
        )]
        .into_iter()
        .collect();
        let grid = build_month_grid(may_2025(), &catalog, ymd(2025, 1, 1));
        let cell = grid.iter().find(|c| c.date == ymd(2025, 5, 25)).unwrap();
        assert_eq!(cell.holiday.as_ref().unwrap().name, "Revolución de Mayo");
    }

    #[test]
    fn test_boundary_cells_use_their_own_year() {
        let catalog: HolidayCatalog = [
            (2025, vec![Holiday::new("2025-12-25", "Navidad")]),
            (2026, vec![Holiday::new("2026-01-01", "Año Nuevo")]),
        ]
        .into_iter()
        .collect();
        let december = MonthCursor::new(2025, 11).unwrap();
        let grid = build_month_grid(december, &catalog, ymd(2025, 12, 31));

        let new_year = grid.iter().find(|c| c.date == ymd(2026, 1, 1)).unwrap();
        assert!(!new_year.in_current_month);
        assert_eq!(new_year.holiday.as_ref().unwrap().name, "Año Nuevo");
        assert_eq!(new_year.css_classes(), "calendar-day other-month holiday");

        let today = grid.iter().find(|c| c.is_today).unwrap();
        assert_eq!(today.date, ymd(2025, 12, 31));
    }

    #[test]
    fn test_navigation_wraps_years() {
        let january = MonthCursor::new(2025, 0).unwrap();
        let back = january.previous();
        assert_eq!((back.year, back.month0()), (2024, 11));

        let december = MonthCursor::new(2025, 11).unwrap();
        let forward = december.next();
        assert_eq!((forward.year, forward.month0()), (2026, 0));

        assert_eq!(may_2025().next().previous(), may_2025());
    }

    #[test]
    fn test_grid_at_date_range_edges_is_full_or_empty() {
        let catalog = HolidayCatalog::new();
        let today = ymd(2025, 1, 1);

        let earliest = MonthCursor::new(NaiveDate::MIN.year(), 0).unwrap();
        let grid = build_month_grid(earliest, &catalog, today);
        assert!(grid.is_empty() || grid.len() == GRID_CELLS);

        // December of the last year always spills past the end of the range
        let latest = MonthCursor::new(NaiveDate::MAX.year(), 11).unwrap();
        assert!(build_month_grid(latest, &catalog, today).is_empty());

        let before_latest = MonthCursor::new(NaiveDate::MAX.year(), 10).unwrap();
        let grid = build_month_grid(before_latest, &catalog, today);
        assert!(grid.is_empty() || grid.len() == GRID_CELLS);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(MonthCursor::new(2025, 12).is_none());
    }

    #[test]
    fn test_names_and_formatting() {
        assert_eq!(may_2025().title(), "May 2025");
        assert_eq!(month_name(12), "Invalid");
        assert_eq!(format_long_date("2025-05-01"), "Thursday, May 1, 2025");
        assert_eq!(format_long_date("not a date"), "not a date");
    }
}
