//! Form state for the scheduler.
//!
//! [`FormState`] is an immutable value; every control edit produces a new
//! value through [`FormState::apply`], which the component swaps into its
//! signal in one step.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::timezones::parse_timezone;
use crate::types::{Frequency, SubmissionPayload, TransportMode};
use crate::DEFAULT_TIMEZONE;

/// Current value of every editable field.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub frequency: Option<Frequency>,
    pub transport_mode: Option<TransportMode>,
    pub timezone: Tz,
}

/// A single control edit.
#[derive(Clone, Debug, PartialEq)]
pub enum FormEdit {
    Start(DateTime<Utc>),
    End(DateTime<Utc>),
    Frequency(Option<Frequency>),
    TransportMode(Option<TransportMode>),
    Timezone(Tz),
}

impl FormState {
    /// Defaults: both ends of the window at `now`, UTC, nothing selected.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            start: now,
            end: now,
            frequency: None,
            transport_mode: None,
            timezone: parse_timezone(DEFAULT_TIMEZONE).unwrap_or(Tz::UTC),
        }
    }

    /// Return the state with one field replaced. No cross-field checks.
    pub fn apply(&self, edit: FormEdit) -> Self {
        let mut next = self.clone();
        match edit {
            FormEdit::Start(start) => next.start = start,
            FormEdit::End(end) => next.end = end,
            FormEdit::Frequency(frequency) => next.frequency = frequency,
            FormEdit::TransportMode(mode) => next.transport_mode = mode,
            FormEdit::Timezone(timezone) => next.timezone = timezone,
        }
        next
    }

    /// Whether the window is reversed. Allowed, but shown in the summary.
    pub fn ends_before_start(&self) -> bool {
        self.end < self.start
    }

    /// Build the outbound payload around the decoded file text.
    pub fn to_payload(&self, file: String) -> SubmissionPayload {
        SubmissionPayload {
            file,
            start_date_time: self.start,
            end_date_time: self.end,
            frequency: self.frequency,
            transport_mode: self.transport_mode,
            timezone: self.timezone,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults() {
        let state = FormState::new(now());
        assert_eq!(state.start, now());
        assert_eq!(state.end, now());
        assert_eq!(state.frequency, None);
        assert_eq!(state.transport_mode, None);
        assert_eq!(state.timezone, Tz::UTC);
    }

    #[test]
    fn test_apply_replaces_one_field() {
        let state = FormState::new(now());
        let next = state.apply(FormEdit::Frequency(Some(Frequency::Every60)));

        assert_eq!(next.frequency, Some(Frequency::Every60));
        assert_eq!(state.frequency, None);
        assert_eq!(next.start, state.start);
        assert_eq!(next.timezone, state.timezone);
    }

    #[test]
    fn test_apply_can_clear_selection() {
        let state = FormState::new(now())
            .apply(FormEdit::TransportMode(Some(TransportMode::Bus)))
            .apply(FormEdit::TransportMode(None));
        assert_eq!(state.transport_mode, None);
    }

    #[test]
    fn test_reversed_window_is_kept() {
        let state = FormState::new(now()).apply(FormEdit::End(now() - Duration::hours(1)));
        assert!(state.ends_before_start());
        assert_eq!(state.end, now() - Duration::hours(1));
    }

    #[test]
    fn test_timezone_edit_keeps_instants() {
        let state = FormState::new(now()).apply(FormEdit::Timezone(Tz::Asia__Tokyo));
        assert_eq!(state.start, now());
        assert_eq!(state.timezone, Tz::Asia__Tokyo);
    }

    #[test]
    fn test_to_payload_copies_fields() {
        let state = FormState::new(now())
            .apply(FormEdit::Frequency(Some(Frequency::Every15)))
            .apply(FormEdit::TransportMode(Some(TransportMode::Walking)));

        let payload = state.to_payload("x,y".into());
        assert_eq!(payload.file, "x,y");
        assert_eq!(payload.start_date_time, now());
        assert_eq!(payload.frequency, Some(Frequency::Every15));
        assert_eq!(payload.transport_mode, Some(TransportMode::Walking));
        assert_eq!(payload.timezone, Tz::UTC);
    }
}
