//! Game calendar and age formatting.
//!
//! The stable runs on whole days. A year is 365 days and, for display
//! only, a month is 30.

use serde::Serialize;

/// Days in a game year.
pub const DAYS_PER_YEAR: u32 = 365;

/// Days in a display month.
pub const DAYS_PER_MONTH: u32 = 30;

/// Day counter for a stable. Day 1 is the first day of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GameCalendar {
    day: u32,
}

impl GameCalendar {
    /// A calendar on day 1.
    pub const fn new() -> Self {
        Self { day: 1 }
    }

    /// Current day.
    pub const fn day(self) -> u32 {
        self.day
    }

    /// Whether the night after today ends a year, ageing every horse.
    pub const fn is_year_end(self) -> bool {
        self.day.saturating_add(1) % DAYS_PER_YEAR == 0
    }

    /// Move to the next day.
    pub const fn advance(&mut self) {
        self.day = self.day.saturating_add(1);
    }
}

impl Default for GameCalendar {
    fn default() -> Self {
        Self::new()
    }
}

/// An age in days split into years, months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AgeBreakdown {
    /// Whole years.
    pub years: u32,
    /// Whole months after the years.
    pub months: u32,
    /// Remaining days.
    pub days: u32,
}

impl AgeBreakdown {
    /// Split `total_days`.
    pub const fn from_days(total_days: u32) -> Self {
        let remainder = total_days % DAYS_PER_YEAR;
        Self {
            years: total_days / DAYS_PER_YEAR,
            months: remainder / DAYS_PER_MONTH,
            days: remainder % DAYS_PER_MONTH,
        }
    }
}

/// Human-readable age such as `1 year, 2 months, 3 days`. Zero parts are
/// left out and an age of zero days reads `newborn`.
pub fn format_detailed_age(total_days: u32) -> String {
    let age = AgeBreakdown::from_days(total_days);
    let parts: Vec<String> = [
        (age.years, "year"),
        (age.months, "month"),
        (age.days, "day"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, unit)| {
        if count == 1 {
            format!("{count} {unit}")
        } else {
            format!("{count} {unit}s")
        }
    })
    .collect();

    if parts.is_empty() {
        "newborn".to_owned()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown() {
        assert_eq!(AgeBreakdown::from_days(0), AgeBreakdown::default());
        assert_eq!(
            AgeBreakdown::from_days(365 + 60 + 3),
            AgeBreakdown {
                years: 1,
                months: 2,
                days: 3
            }
        );
        // Days 360..365 are a twelfth month.
        assert_eq!(AgeBreakdown::from_days(362).months, 12);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_detailed_age(0), "newborn");
        assert_eq!(format_detailed_age(1), "1 day");
        assert_eq!(format_detailed_age(45), "1 month, 15 days");
        assert_eq!(format_detailed_age(365 + 60 + 3), "1 year, 2 months, 3 days");
        assert_eq!(format_detailed_age(730), "2 years");
    }

    #[test]
    fn year_end_falls_on_day_364() {
        let mut calendar = GameCalendar::new();
        assert_eq!(calendar.day(), 1);
        let mut year_ends = Vec::new();
        for _ in 0..800 {
            if calendar.is_year_end() {
                year_ends.push(calendar.day());
            }
            calendar.advance();
        }
        assert_eq!(year_ends, [364, 729]);
    }
}
