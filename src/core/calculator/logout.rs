use crate::core::calculator::remaining::remaining;
use crate::models::logout_time::LogoutTime;
use crate::models::time_of_day::TimeOfDay;
use crate::models::work_policy::WorkPolicy;

/// Logout = last break + (policy - completed).
///
/// Pure and deterministic. Hours are left unwrapped (no modulo 24).
pub fn compute_logout_time(
    completed: TimeOfDay,
    last_break: TimeOfDay,
    policy: &WorkPolicy,
) -> LogoutTime {
    let rem = remaining(completed, policy);

    let mut minutes = u32::from(last_break.minute()) + u32::from(rem.minutes);
    let mut hours = i32::from(last_break.hour()) + rem.hours;

    // carry
    if minutes >= 60 {
        minutes -= 60;
        hours += 1;
    }

    LogoutTime {
        hours,
        // 0..=59 after the carry
        minutes: u8::try_from(minutes).unwrap_or(0),
    }
}
