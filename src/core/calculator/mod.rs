//! Logout-time calculation: remaining time and resulting clock time.

pub mod logout;
pub mod remaining;

pub use logout::compute_logout_time;
pub use remaining::remaining;

use crate::errors::MissingInputError;
use crate::models::logout_time::LogoutTime;
use crate::models::time_of_day::TimeOfDay;
use crate::models::work_policy::WorkPolicy;

/// Unwrap both inputs or report which ones are missing.
pub fn require_inputs(
    completed: Option<TimeOfDay>,
    last_break: Option<TimeOfDay>,
) -> Result<(TimeOfDay, TimeOfDay), MissingInputError> {
    match (completed, last_break) {
        (Some(c), Some(b)) => Ok((c, b)),
        (c, b) => Err(MissingInputError::from_presence(c.is_some(), b.is_some())
            .unwrap_or(MissingInputError::Both)),
    }
}

/// Check that both inputs are present, then compute.
/// The calculation is not invoked when an input is missing.
pub fn validate_and_compute(
    completed: Option<TimeOfDay>,
    last_break: Option<TimeOfDay>,
    policy: &WorkPolicy,
) -> Result<LogoutTime, MissingInputError> {
    let (c, b) = require_inputs(completed, last_break)?;
    Ok(compute_logout_time(c, b, policy))
}

/// Same as [`validate_and_compute`] with the default 8h30m policy.
pub fn validate_and_compute_default(
    completed: Option<TimeOfDay>,
    last_break: Option<TimeOfDay>,
) -> Result<LogoutTime, MissingInputError> {
    validate_and_compute(completed, last_break, &WorkPolicy::default())
}
