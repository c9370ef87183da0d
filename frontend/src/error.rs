//! Error types for the scheduler form.
//!
//! - [`FormError`] - field decoding errors (date/time inputs, timezone ids)
//! - [`SubmitError`] - file decoding and HTTP submission errors
//!
//! Neither error ever reaches the user as a dialog: field errors drop the
//! edit, submission errors are written to the console.

use thiserror::Error;

// =============================================================================
// Field Errors
// =============================================================================

/// Errors while decoding a form control's value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Value from a `datetime-local` input could not be parsed.
    #[error("Invalid date/time value: {0:?}")]
    InvalidDateTime(String),

    /// Identifier not present in the timezone catalog.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors along the read-then-send submission path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The selected file could not be decoded as text.
    #[error("Failed to read file: {0}")]
    Read(String),

    /// The payload could not be encoded as a request body.
    #[error("Failed to build request: {0}")]
    Encode(String),

    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for field decoding.
pub type FormResult<T> = Result<T, FormError>;

/// Result type for submission steps.
pub type SubmitResult<T> = Result<T, SubmitError>;
