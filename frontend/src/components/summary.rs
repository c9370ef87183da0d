//! Schedule summary card.

use leptos::*;

use crate::form::FormState;
use crate::schedule::summary_line;
use crate::timezones::to_local_input;

#[component]
pub fn ScheduleSummary(form: ReadSignal<FormState>) -> impl IntoView {
    let window = move || {
        form.with(|f| {
            format!(
                "{} → {} ({})",
                to_local_input(f.start).replace('T', " "),
                to_local_input(f.end).replace('T', " "),
                f.timezone.name(),
            )
        })
    };

    view! {
        <div class="card summary-card">
            <div class="summary-title">"Schedule"</div>
            <div class="summary-window">{window}</div>
            <div
                class="summary-line"
                class:warning=move || form.with(|f| f.ends_before_start())
            >
                {move || form.with(summary_line)}
            </div>
        </div>
    }
}
