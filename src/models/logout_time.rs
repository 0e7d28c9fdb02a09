use super::time_of_day::TimeOfDay;
use crate::utils::formatting::mins2readable;
use serde::{Serialize, Serializer};
use std::fmt;

/// Signed (hours, minutes) still to be worked.
///
/// `minutes` is always in 0..=59 after the borrow step; `hours` carries the
/// sign and is negative when the completed time exceeds the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub hours: i32,
    pub minutes: u8,
}

impl Remaining {
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }

    /// True when the completed time already covers the whole policy.
    pub fn is_over_completed(&self) -> bool {
        self.total_minutes() < 0
    }
}

/// Signed `HH`h `MM`m of the whole delta, e.g. `-00h 30m` for (-1h, 30m).
impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mins2readable(self.total_minutes(), false, false))
    }
}

/// Result of the logout calculation.
///
/// Hours are NOT wrapped modulo 24: they may exceed 23 or be negative.
/// Use [`LogoutTime::wrapped`] to get the wall-clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutTime {
    pub hours: i32,
    pub minutes: u8,
}

impl LogoutTime {
    /// The logout time folded into a single 24h day.
    pub fn wrapped(&self) -> TimeOfDay {
        let total = (i64::from(self.hours) * 60 + i64::from(self.minutes)).rem_euclid(24 * 60);
        // rem_euclid keeps the value in 0..1440, both components are in range
        let hour = u8::try_from(total / 60).unwrap_or(0);
        let minute = u8::try_from(total % 60).unwrap_or(0);
        TimeOfDay::new(hour, minute).unwrap_or(TimeOfDay::MIDNIGHT)
    }

    /// True when the raw hours fall outside 0..=23.
    pub fn is_out_of_day(&self) -> bool {
        !(0..=23).contains(&self.hours)
    }

    /// `HH:MM`, wrapped into the day when `wrap` is set.
    pub fn format(&self, wrap: bool) -> String {
        if wrap {
            self.wrapped().to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for LogoutTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hours < 0 { "-" } else { "" };
        write!(f, "{}{:02}:{:02}", sign, self.hours.abs(), self.minutes)
    }
}

impl Serialize for LogoutTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
