//! CSV file picker card.
//!
//! Holds the `<input type="file">` the Send button reads from. The file
//! itself is not read here; only its name is shown.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::ACCEPTED_FILE_TYPES;

#[component]
pub fn UploadCard(
    /// Reference to the file input, read on submit
    file_input: NodeRef<html::Input>,
) -> impl IntoView {
    let (file_name, set_file_name) = create_signal(None::<String>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let name = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| file.name());

        if let Some(name) = &name {
            log::info!("📄 Selected file: {}", name);
        }
        set_file_name.set(name);
    };

    view! {
        <div class="card upload-card">
            <div class="upload-icon">"📄"</div>
            <div class="upload-text">
                {move || file_name.get().unwrap_or_else(|| "No file selected".to_string())}
            </div>
            <label class="upload-button">
                "Upload file"
                <input
                    type="file"
                    accept=ACCEPTED_FILE_TYPES
                    style="display:none"
                    node_ref=file_input
                    on:change=on_file_change
                />
            </label>
        </div>
    }
}
