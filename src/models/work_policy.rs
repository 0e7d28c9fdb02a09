use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Required total working duration for one day.
///
/// The default is 8h30m. The policy is an explicit value handed to the
/// calculator, so alternative durations can be injected from the config
/// file or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkPolicy {
    hours: u16,
    minutes: u8,
}

impl Default for WorkPolicy {
    fn default() -> Self {
        Self {
            hours: 8,
            minutes: 30,
        }
    }
}

impl WorkPolicy {
    /// Longest accepted policy: a whole day.
    pub const MAX_TOTAL_MINUTES: u32 = 24 * 60;

    /// Build a policy, folding minutes >= 60 into the hours.
    pub fn new(hours: u8, minutes: u8) -> Self {
        Self {
            hours: u16::from(hours) + u16::from(minutes) / 60,
            minutes: minutes % 60,
        }
    }

    pub fn hours(&self) -> u16 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }

    /// Policy from a total number of minutes, at most [`Self::MAX_TOTAL_MINUTES`].
    fn from_total_minutes(total: u32) -> Option<Self> {
        if total > Self::MAX_TOTAL_MINUTES {
            return None;
        }
        Some(Self {
            hours: u16::try_from(total / 60).ok()?,
            minutes: u8::try_from(total % 60).ok()?,
        })
    }

    /// Parse a duration written as `8h30m`, `8h`, `45m` or `08:30`.
    /// Durations longer than 24h are rejected.
    pub fn parse(s: &str) -> AppResult<Self> {
        let input = s.trim().to_lowercase();
        let invalid = || AppError::InvalidDuration(s.to_string());

        let clock =
            Regex::new(r"^(\d{1,2}):(\d{2})$").map_err(|e| AppError::Other(e.to_string()))?;
        let (h, m): (u32, u32) = if let Some(caps) = clock.captures(&input) {
            let h = caps[1].parse().map_err(|_| invalid())?;
            let m = caps[2].parse().map_err(|_| invalid())?;
            if m > 59 {
                return Err(invalid());
            }
            (h, m)
        } else {
            let units = Regex::new(r"^(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?$")
                .map_err(|e| AppError::Other(e.to_string()))?;
            let caps = units.captures(&input).ok_or_else(invalid)?;
            let (h, m) = (caps.get(1), caps.get(2));
            if h.is_none() && m.is_none() {
                return Err(invalid());
            }
            let h = match h {
                Some(v) => v.as_str().parse().map_err(|_| invalid())?,
                None => 0,
            };
            let m = match m {
                Some(v) => v.as_str().parse().map_err(|_| invalid())?,
                None => 0,
            };
            (h, m)
        };

        h.checked_mul(60)
            .and_then(|hm| hm.checked_add(m))
            .and_then(Self::from_total_minutes)
            .ok_or_else(invalid)
    }
}

impl FromStr for WorkPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WorkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            write!(f, "{}h", self.hours)
        } else {
            write!(f, "{}h{:02}m", self.hours, self.minutes)
        }
    }
}
