//! Timezone catalog and wall-clock conversions.
//!
//! The catalog is a pure function of the instant it is built for, so the
//! offsets shown in the select are those in force at that instant.

use chrono::{DateTime, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

use crate::error::{FormError, FormResult};
use crate::types::TimezoneOption;

/// Format accepted and produced by `<input type="datetime-local">`.
const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Same format with seconds, which browsers emit when `step` < 60.
const LOCAL_INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Build the timezone select options, one per catalog entry, in catalog order.
pub fn timezone_options(now: DateTime<Utc>) -> Vec<TimezoneOption> {
    TZ_VARIANTS
        .iter()
        .map(|tz| TimezoneOption {
            label: format!("{} ({})", tz.name(), offset_label(tz, now)),
            value: tz.name().to_string(),
        })
        .collect()
}

/// UTC offset of `tz` at `now`, as `+HH:MM` / `-HH:MM`.
pub fn offset_label(tz: &Tz, now: DateTime<Utc>) -> String {
    let seconds = tz.offset_from_utc_datetime(&now.naive_utc()).fix().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Resolve a catalog identifier.
pub fn parse_timezone(id: &str) -> FormResult<Tz> {
    id.parse::<Tz>()
        .map_err(|_| FormError::UnknownTimezone(id.to_string()))
}

/// Render an instant's UTC wall-clock fields for a `datetime-local` input.
///
/// The selected timezone is not applied: the scheduling service reads these
/// digits as wall-clock time in that timezone itself.
pub fn to_local_input(instant: DateTime<Utc>) -> String {
    instant.naive_utc().format(LOCAL_INPUT_FORMAT).to_string()
}

/// Read a `datetime-local` value back as UTC wall-clock fields.
pub fn from_local_input(value: &str) -> FormResult<DateTime<Utc>> {
    let value = value.trim();
    let naive = NaiveDateTime::parse_from_str(value, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, LOCAL_INPUT_FORMAT_SECONDS))
        .map_err(|_| FormError::InvalidDateTime(value.to_string()))?;

    Ok(Utc.from_utc_datetime(&naive))
}
