//! UI Components for the scheduler.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`SubmissionForm`] - Whole form plus the Send button
//! - [`UploadCard`] - CSV file picker
//! - [`TimezoneSelect`], [`DateTimeField`], [`FrequencySelect`],
//!   [`TransportModeSelect`] - field controls
//! - [`ScheduleSummary`] - Run count for the chosen window

mod hero;
mod footer;
mod upload;
mod fields;
mod summary;
mod scheduler;

pub use hero::*;
pub use footer::*;
pub use upload::*;
pub use fields::*;
pub use summary::*;
pub use scheduler::*;
