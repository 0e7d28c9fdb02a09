//! Interactive calculation session.
//!
//! Holds the two inputs, the last result and the last error. The front end
//! owns the instance and re-reads it after every command.

use crate::core::calculator::validate_and_compute;
use crate::errors::MissingInputError;
use crate::models::logout_time::LogoutTime;
use crate::models::time_of_day::TimeOfDay;
use crate::models::work_policy::WorkPolicy;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    PartiallyFilled,
    Ready,
    Computed,
    Invalid,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Empty => "empty",
            SessionState::PartiallyFilled => "partially filled",
            SessionState::Ready => "ready",
            SessionState::Computed => "computed",
            SessionState::Invalid => "invalid",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    policy: WorkPolicy,
    completed: Option<TimeOfDay>,
    last_break: Option<TimeOfDay>,
    result: Option<LogoutTime>,
    error: Option<MissingInputError>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(WorkPolicy::default())
    }
}

impl Session {
    pub fn new(policy: WorkPolicy) -> Self {
        Self {
            policy,
            completed: None,
            last_break: None,
            result: None,
            error: None,
        }
    }

    pub fn policy(&self) -> &WorkPolicy {
        &self.policy
    }

    pub fn completed(&self) -> Option<TimeOfDay> {
        self.completed
    }

    pub fn last_break(&self) -> Option<TimeOfDay> {
        self.last_break
    }

    pub fn result(&self) -> Option<LogoutTime> {
        self.result
    }

    pub fn error(&self) -> Option<MissingInputError> {
        self.error
    }

    /// Set (`Some`) or clear (`None`) the completed working time.
    /// A previous result or error no longer matches the inputs and is dropped.
    pub fn set_completed(&mut self, time: Option<TimeOfDay>) {
        self.completed = time;
        self.clear_outcome();
    }

    /// Set (`Some`) or clear (`None`) the last break time.
    pub fn set_last_break(&mut self, time: Option<TimeOfDay>) {
        self.last_break = time;
        self.clear_outcome();
    }

    /// Run the calculation on the current inputs.
    ///
    /// On success the result is stored and any error cleared; on a missing
    /// input the error is stored and no result is kept.
    pub fn calculate(&mut self) -> Result<LogoutTime, MissingInputError> {
        let outcome = validate_and_compute(self.completed, self.last_break, &self.policy);
        match outcome {
            Ok(t) => {
                self.result = Some(t);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e);
            }
        }
        outcome
    }

    /// Back to the initial state. The policy is kept.
    pub fn reset(&mut self) {
        self.completed = None;
        self.last_break = None;
        self.clear_outcome();
    }

    pub fn state(&self) -> SessionState {
        if self.error.is_some() {
            return SessionState::Invalid;
        }
        if self.result.is_some() {
            return SessionState::Computed;
        }
        match (self.completed.is_some(), self.last_break.is_some()) {
            (false, false) => SessionState::Empty,
            (true, true) => SessionState::Ready,
            _ => SessionState::PartiallyFilled,
        }
    }

    /// Text to show: the formatted result or the error message.
    pub fn output(&self, wrap: bool) -> Option<String> {
        if let Some(e) = &self.error {
            return Some(e.to_string());
        }
        self.result.map(|r| r.format(wrap))
    }

    fn clear_outcome(&mut self) {
        self.result = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Option<TimeOfDay> {
        Some(TimeOfDay::parse(s).unwrap())
    }

    #[test]
    fn walks_through_the_states() {
        let mut s = Session::default();
        assert_eq!(s.state(), SessionState::Empty);

        s.set_completed(t("00:00"));
        assert_eq!(s.state(), SessionState::PartiallyFilled);

        s.set_last_break(t("09:00"));
        assert_eq!(s.state(), SessionState::Ready);

        let out = s.calculate().unwrap();
        assert_eq!(out.to_string(), "17:30");
        assert_eq!(s.state(), SessionState::Computed);
        assert_eq!(s.output(false).as_deref(), Some("17:30"));
    }

    #[test]
    fn calculate_with_missing_input_is_invalid() {
        let mut s = Session::default();
        s.set_last_break(t("09:00"));

        assert_eq!(s.calculate(), Err(MissingInputError::Completed));
        assert_eq!(s.state(), SessionState::Invalid);
        assert!(s.result().is_none());
        assert_eq!(
            s.output(false).unwrap(),
            MissingInputError::Completed.to_string()
        );

        let mut empty = Session::default();
        assert_eq!(empty.calculate(), Err(MissingInputError::Both));
        assert_eq!(empty.state(), SessionState::Invalid);
    }

    #[test]
    fn error_replaces_previous_result() {
        let mut s = Session::default();
        s.set_completed(t("08:00"));
        s.set_last_break(t("12:00"));
        s.calculate().unwrap();

        s.set_completed(None);
        assert_eq!(s.state(), SessionState::PartiallyFilled);
        assert!(s.calculate().is_err());
        assert!(s.result().is_none());
    }

    #[test]
    fn success_clears_previous_error() {
        let mut s = Session::default();
        let _ = s.calculate();
        assert_eq!(s.state(), SessionState::Invalid);

        s.set_completed(t("08:00"));
        s.set_last_break(t("12:00"));
        assert_eq!(s.state(), SessionState::Ready);
        assert_eq!(s.calculate().unwrap().to_string(), "12:30");
        assert!(s.error().is_none());
    }

    #[test]
    fn reset_from_any_state_is_a_fresh_session() {
        let policy = WorkPolicy::new(7, 0);
        let fresh = Session::new(policy);

        let mut s = Session::new(policy);
        s.set_completed(t("00:00"));
        s.set_last_break(t("09:00"));
        s.calculate().unwrap();
        s.reset();
        assert_eq!(s, fresh);
        assert_eq!(s.state(), SessionState::Empty);
        assert!(s.completed().is_none() && s.last_break().is_none());
        assert!(s.result().is_none() && s.error().is_none());

        let _ = s.calculate();
        s.reset();
        assert_eq!(s, fresh);
    }

    #[test]
    fn repeated_calculation_is_idempotent() {
        let mut s = Session::default();
        s.set_completed(t("07:45"));
        s.set_last_break(t("12:00"));
        let first = s.calculate();
        let second = s.calculate();
        assert_eq!(first, second);
        assert_eq!(s.state(), SessionState::Computed);
    }
}
