//! Application configuration.
//!
//! Centralized configuration for the scheduler form. Everything is
//! compiled in; there is no runtime configuration source.

/// Distance-matrix scheduling endpoint.
///
/// Receives the JSON submission payload via `POST`.
pub const SUBMIT_URL: &str =
    "https://vv7s6jncp0.execute-api.us-east-2.amazonaws.com/prod/distance_matrix";

/// Application name shown in the hero section and logs.
pub const APP_NAME: &str = "Distance Matrix Scheduler";

/// File types offered by the upload picker.
///
/// Advisory only: whatever file is chosen is read as raw text.
pub const ACCEPTED_FILE_TYPES: &str = ".csv";

/// Timezone selected when the form first renders.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Blocking alert shown when Send is clicked without a file.
pub const MISSING_FILE_MESSAGE: &str = "Please select a file.";
