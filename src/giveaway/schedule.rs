use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};
use rand::Rng;
use std::fmt;

use crate::utils::validation::validate_number_range;

/// Inclusive range of numbers participants may pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    min: i64,
    max: i64,
}

impl NumberRange {
    pub fn new(min: i64, max: i64) -> Result<Self> {
        validate_number_range(min, max)?;
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Picks a number uniformly from the range, bounds included.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.min..=self.max)
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Weekly draw slot: a weekday and a time of day, both in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSchedule {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

impl DrawSchedule {
    pub fn new(weekday: Weekday, time: NaiveTime) -> Self {
        Self { weekday, time }
    }

    /// Returns the next draw instant strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let days_ahead = (7 + self.weekday.num_days_from_monday()
            - today.weekday().num_days_from_monday())
            % 7;

        let mut candidate = (today + Duration::days(i64::from(days_ahead)))
            .and_time(self.time)
            .and_utc();

        if candidate <= now {
            candidate += Duration::days(7);
        }

        candidate
    }
}

impl fmt::Display for DrawSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "every {:?} at {} UTC", self.weekday, self.time.format("%H:%M"))
    }
}
