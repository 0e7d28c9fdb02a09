use crate::core::calculator::{compute_logout_time, remaining, require_inputs};
use crate::errors::AppResult;
use crate::models::calc_summary::CalcSummary;
use crate::models::time_of_day::TimeOfDay;
use crate::models::work_policy::WorkPolicy;

pub struct Core;

impl Core {
    /// Validate the inputs and build the full summary of one calculation.
    pub fn build_summary(
        completed: Option<TimeOfDay>,
        last_break: Option<TimeOfDay>,
        policy: &WorkPolicy,
    ) -> AppResult<CalcSummary> {
        let (completed, last_break) = require_inputs(completed, last_break)?;

        let rem = remaining(completed, policy);
        let logout = compute_logout_time(completed, last_break, policy);

        Ok(CalcSummary {
            completed,
            last_break,
            policy: policy.to_string(),
            remaining: rem,
            remaining_minutes: rem.total_minutes(),
            logout,
            logout_wrapped: logout.wrapped(),
            over_completed: rem.is_over_completed(),
        })
    }
}
