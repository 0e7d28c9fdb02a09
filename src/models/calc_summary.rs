use crate::models::logout_time::{LogoutTime, Remaining};
use crate::models::time_of_day::TimeOfDay;
use serde::Serialize;

/// Everything the front ends show for one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalcSummary {
    pub completed: TimeOfDay,
    pub last_break: TimeOfDay,
    /// Policy in its short form, e.g. `8h30m`
    pub policy: String,
    #[serde(serialize_with = "serialize_remaining")]
    pub remaining: Remaining,
    /// Signed total of `remaining`, negative when over-completed
    pub remaining_minutes: i64,
    pub logout: LogoutTime,
    pub logout_wrapped: TimeOfDay,
    pub over_completed: bool,
}

fn serialize_remaining<S: serde::Serializer>(r: &Remaining, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(r)
}
