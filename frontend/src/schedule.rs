//! Sampling schedule summary.
//!
//! Mirrors how the scheduling service expands a submission into runs: one
//! run at the start, then one every `frequency` minutes up to the end.

use chrono::{DateTime, Utc};

use crate::form::FormState;
use crate::types::Frequency;

/// Number of runs in `[start, end]`, or `None` when the window is reversed.
pub fn sample_count(start: DateTime<Utc>, end: DateTime<Utc>, frequency: Frequency) -> Option<u64> {
    if end < start {
        return None;
    }
    let seconds = (end - start).num_seconds() as u64;
    let step = u64::from(frequency.minutes()) * 60;
    Some(seconds / step + 1)
}

/// One-line description of the schedule for the summary card.
pub fn summary_line(form: &FormState) -> String {
    let Some(frequency) = form.frequency else {
        return "Select a frequency to see the schedule".to_string();
    };
    match sample_count(form.start, form.end, frequency) {
        Some(1) => "1 run scheduled".to_string(),
        Some(count) => format!("{} runs scheduled, {}", count, frequency.label().to_lowercase()),
        None => "End precedes start".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormEdit;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_count_inclusive_of_both_ends() {
        let end = start() + Duration::hours(2);
        assert_eq!(sample_count(start(), end, Frequency::Every15), Some(9));
        assert_eq!(sample_count(start(), end, Frequency::Every30), Some(5));
        assert_eq!(sample_count(start(), end, Frequency::Every60), Some(3));
    }

    #[test]
    fn test_sample_count_partial_interval_rounds_down() {
        let end = start() + Duration::minutes(44);
        assert_eq!(sample_count(start(), end, Frequency::Every15), Some(3));
    }

    #[test]
    fn test_sample_count_zero_width_window() {
        assert_eq!(sample_count(start(), start(), Frequency::Every30), Some(1));
    }

    #[test]
    fn test_sample_count_reversed_window() {
        let end = start() - Duration::minutes(1);
        assert_eq!(sample_count(start(), end, Frequency::Every15), None);
    }

    #[test]
    fn test_summary_line() {
        let form = FormState::new(start());
        assert_eq!(summary_line(&form), "Select a frequency to see the schedule");

        let form = form.apply(FormEdit::Frequency(Some(Frequency::Every30)));
        assert_eq!(summary_line(&form), "1 run scheduled");

        let form = form.apply(FormEdit::End(start() + Duration::hours(1)));
        assert_eq!(summary_line(&form), "3 runs scheduled, every 30 minutes");

        let form = form.apply(FormEdit::End(start() - Duration::hours(1)));
        assert_eq!(summary_line(&form), "End precedes start");
    }
}
