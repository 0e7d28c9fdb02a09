//! Time utilities: parsing optional HH:MM arguments.

use crate::errors::AppResult;
use crate::models::time_of_day::TimeOfDay;

/// Parse an optional `HH:MM` argument. `None` stays `None`; a present but
/// malformed value is an error.
pub fn parse_optional_time(input: Option<&str>) -> AppResult<Option<TimeOfDay>> {
    input.map(TimeOfDay::parse).transpose()
}
