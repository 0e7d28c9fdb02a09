use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A wall-clock time of day (hour 0–23, minute 0–59).
/// No date, no timezone. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Build a time of day, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidTime(format!("{}:{}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn total_minutes(&self) -> i32 {
        i32::from(self.hour) * 60 + i32::from(self.minute)
    }

    /// Parse `HH:MM` (a single-digit hour is accepted too).
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| AppError::InvalidTime(s.to_string()))?;
        Ok(Self::from(t))
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
