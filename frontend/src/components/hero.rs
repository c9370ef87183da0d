//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Upload a CSV of locations, pick a time window, a frequency and a transport mode. "
                "Distance-matrix runs are scheduled for every interval in the window."
            </p>
        </div>
    }
}
