//! Calendar windows used to filter expenses by date
//!
//! Pure calendar math with no I/O. Month and year arguments are expected to be
//! validated by the caller; out-of-range values yield `None` instead of a
//! window rather than an error.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// An inclusive `[start, end]` timestamp range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Window {
    /// Create a window from explicit bounds
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// First instant through 23:59:59 of the last day of the month
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last = next_month - Duration::days(1);

        Some(Self::new(start_of_day(first), end_of_day(last)))
    }

    /// Jan 1 00:00:00 through Dec 31 23:59:59
    pub fn year(year: i32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(Self::new(start_of_day(first), end_of_day(last)))
    }

    /// The last `days` calendar days including today, ending now
    pub fn last_n_days(days: u32) -> Option<Self> {
        Self::last_n_days_from(Local::now().naive_local(), days)
    }

    /// The last `days` calendar days ending at `now`
    ///
    /// The start is midnight of the day `days - 1` days before `now`, so a
    /// one-day window covers the remainder of today only. `None` when the
    /// start would fall before the earliest representable date.
    pub fn last_n_days_from(now: NaiveDateTime, days: u32) -> Option<Self> {
        let back = Duration::days(i64::from(days.saturating_sub(1)));
        let first = now.date().checked_sub_signed(back)?;
        Some(Self::new(start_of_day(first), now))
    }

    /// The month containing today
    pub fn current_month() -> Option<Self> {
        let today = Local::now().date_naive();
        Self::month(today.year(), today.month())
    }

    /// Check whether a timestamp lies within the window (inclusive)
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at <= self.end
    }

    /// Human-readable label: "February 2024", "Jan - Mar 2024", "Dec 2023 - Jan 2024"
    pub fn label(&self) -> String {
        if self.start.year() == self.end.year() {
            if self.start.month() == self.end.month() {
                self.start.format("%B %Y").to_string()
            } else {
                format!(
                    "{} - {} {}",
                    self.start.format("%b"),
                    self.end.format("%b"),
                    self.start.year()
                )
            }
        } else {
            format!(
                "{} - {}",
                self.start.format("%b %Y"),
                self.end.format("%b %Y")
            )
        }
    }
}

/// `(start, end)` of a month, see [`Window::month`]
pub fn month_range(year: i32, month: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    Window::month(year, month).map(|w| (w.start, w.end))
}

/// `(start, end)` of a year, see [`Window::year`]
pub fn year_range(year: i32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    Window::year(year).map(|w| (w.start, w.end))
}

/// `(start, end)` of the last `days` days, see [`Window::last_n_days`]
pub fn last_n_days(days: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    Window::last_n_days(days).map(|w| (w.start, w.end))
}

/// True iff both year and month match
pub fn is_same_month(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::seconds(1)
}
