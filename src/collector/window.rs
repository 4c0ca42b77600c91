//! Date windows bounding individual backend queries
//!
//! Windows are inclusive on both ends at the backend's date granularity:
//! `merged:2023-01-01..2023-02-01` matches anything merged on either
//! boundary date. Bisection therefore advances the second half's start by
//! one second past the midpoint so a merge at the midpoint instant belongs
//! to exactly one half. This assumes merge timestamps are no finer than one
//! second, which holds for the GitHub API.

use chrono::{DateTime, Duration, Months, Utc};
use std::fmt;

/// A closed date interval bounding one backend query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when the window cannot be split further at date granularity.
    pub fn is_sub_day(&self) -> bool {
        self.duration() < Duration::days(1)
    }

    /// Splits the window at its midpoint.
    ///
    /// The second half starts one second after the midpoint to avoid
    /// double-counting the midpoint instant.
    pub fn bisect(&self) -> (DateWindow, DateWindow) {
        let midpoint = self.start + self.duration() / 2;
        (
            DateWindow::new(self.start, midpoint),
            DateWindow::new(midpoint + Duration::seconds(1), self.end),
        )
    }

    /// Renders the window as the backend's `merged:START..END` filter.
    pub fn as_merged_filter(&self) -> String {
        format!(
            "merged:{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Partitions `[since, until)` into successive windows of one calendar
/// month, the last window truncated to `until`.
pub fn month_windows(since: DateTime<Utc>, until: DateTime<Utc>) -> Vec<DateWindow> {
    let mut windows = Vec::new();
    let mut current = since;

    while current < until {
        let end = current
            .checked_add_months(Months::new(1))
            .unwrap_or(until)
            .min(until);
        windows.push(DateWindow::new(current, end));
        current = end;
    }

    windows
}
