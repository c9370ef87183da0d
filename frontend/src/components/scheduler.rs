//! The submission form: file picker, field controls, Send button.

use leptos::*;

use super::{
    DateTimeField, FrequencySelect, ScheduleSummary, TimezoneSelect, TransportModeSelect,
    UploadCard, WindowBound,
};
use crate::form::FormState;
use crate::services::{BrowserAlert, BrowserFile, HttpSender, Submitter};
use crate::types::SubmissionStatus;
use crate::SUBMIT_URL;

#[component]
pub fn SubmissionForm() -> impl IntoView {
    let (form, set_form) = create_signal(FormState::default());
    let (status, set_status) = create_signal(SubmissionStatus::Idle);
    let file_input = create_node_ref::<html::Input>();

    let on_send = move |_| {
        if status.get_untracked().is_busy() {
            return;
        }

        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(BrowserFile);
        // Payload uses the fields as they were when Send was clicked.
        let snapshot = form.get_untracked();

        spawn_local(async move {
            let submitter = Submitter::new(HttpSender::new(SUBMIT_URL), BrowserAlert);
            let outcome = submitter
                .submit(file.as_ref(), &snapshot, move |s| set_status.set(s))
                .await;
            log::debug!("Submission finished: {:?}", outcome);
        });
    };

    view! {
        <div class="form-grid">
            <div class="form-column">
                <UploadCard file_input=file_input/>

                <div class="card fields-card">
                    <TimezoneSelect form=form set_form=set_form/>
                    <DateTimeField
                        label="Start Date & Time"
                        bound=WindowBound::Start
                        form=form
                        set_form=set_form
                    />
                    <DateTimeField
                        label="End Date & Time"
                        bound=WindowBound::End
                        form=form
                        set_form=set_form
                    />
                    <FrequencySelect form=form set_form=set_form/>
                    <TransportModeSelect form=form set_form=set_form/>

                    <button
                        class="send-button"
                        on:click=on_send
                        disabled=move || status.get().is_busy()
                    >
                        {move || match status.get() {
                            SubmissionStatus::Idle => "Send ➤",
                            SubmissionStatus::Reading => "⏳ Reading file...",
                            SubmissionStatus::Sending => "⏳ Sending...",
                        }}
                    </button>
                </div>
            </div>

            <div class="summary-column">
                <ScheduleSummary form=form/>
            </div>
        </div>
    }
}
