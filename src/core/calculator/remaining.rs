use crate::models::logout_time::Remaining;
use crate::models::time_of_day::TimeOfDay;
use crate::models::work_policy::WorkPolicy;

/// Remaining = policy - completed, with a minute borrow.
///
/// The result is not clamped: a completed time above the policy gives
/// negative hours.
pub fn remaining(completed: TimeOfDay, policy: &WorkPolicy) -> Remaining {
    let mut minutes = i32::from(policy.minutes()) - i32::from(completed.minute());
    let mut hours = i32::from(policy.hours()) - i32::from(completed.hour());

    // borrow
    if minutes < 0 {
        minutes += 60;
        hours -= 1;
    }

    Remaining {
        hours,
        // 0..=59 after the borrow
        minutes: u8::try_from(minutes).unwrap_or(0),
    }
}
