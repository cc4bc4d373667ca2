//! Calendar date-range helpers shared by the day, week, and month windows.
//!
//! All of the bucketing rules live here so that every consumer agrees on
//! them: weeks start on Monday, and a month spans its first through last
//! calendar day inclusive. The helpers are deterministic given a reference
//! date; "today" is always supplied by the caller.

use time::{Date, Duration, Month};

use crate::Error;

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a range spanning `start` through `end`, inclusive on both ends.
    ///
    /// # Errors
    /// Returns [Error::InvalidRange] if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// The range that covers a single day.
    pub fn single_day(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The first day of the range.
    pub fn start(self) -> Date {
        self.start
    }

    /// The last day of the range.
    pub fn end(self) -> Date {
        self.end
    }

    /// Whether `date` falls within the range, inclusive on both ends.
    pub fn contains(self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day in the range in chronological order, for view layers that
    /// paint one cell per day.
    pub fn days(self) -> impl Iterator<Item = Date> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |date| {
            let next = date.next_day()?;
            (next <= end).then_some(next)
        })
    }
}

/// The Monday-through-Sunday week containing `date`.
pub fn week_of(date: Date) -> DateRange {
    let weekday_number = date.weekday().number_from_monday() as i64;
    let start = date - Duration::days(weekday_number - 1);

    DateRange {
        start,
        end: start + Duration::days(6),
    }
}

/// The first through last calendar day of the month containing `date`.
pub fn month_of(date: Date) -> DateRange {
    let year = date.year();
    let month = date.month();

    DateRange {
        start: Date::from_calendar_date(year, month, 1).expect("invalid month start date"),
        end: Date::from_calendar_date(year, month, last_day_of_month(year, month))
            .expect("invalid month end date"),
    }
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
