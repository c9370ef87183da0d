//! Distance Matrix Scheduler - Frontend Rust/Leptos Application
//!
//! A WebAssembly form that uploads a CSV of locations together with a
//! sampling window, frequency, transport mode and timezone to the
//! distance-matrix scheduling endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── SubmissionForm                                         │
//! │      ├── UploadCard (CSV picker)                            │
//! │      ├── Timezone / Start / End / Frequency / Mode fields   │
//! │      ├── Send button                                        │
//! │      └── ScheduleSummary                                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint and UI constants
//! - [`error`] - Field and submission error types
//! - [`types`] - Selector values, timezone options, payload
//! - [`form`] - Immutable form state and edits
//! - [`timezones`] - Timezone catalog and wall-clock conversion
//! - [`schedule`] - Run count for the sampling window
//! - [`components`] - UI components
//! - [`services`] - Submission orchestration and browser adapters

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod form;
pub mod timezones;
pub mod schedule;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{FormError, FormResult, SubmitError, SubmitResult};

// Types
pub use types::{
    // Selectors
    Frequency, TransportMode,
    // Catalog
    TimezoneOption,
    // Submission
    SubmissionPayload, SubmissionStatus,
};

// Form
pub use form::{FormEdit, FormState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and the panic hook, then mount the app.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <SubmissionForm/>
        </div>

        <Footer/>
    }
}
