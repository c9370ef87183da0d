//! Submission orchestration: read the selected file, then post the payload.
//!
//! The browser pieces (file decoding, HTTP, alert dialog) sit behind small
//! traits so the sequencing can be driven without a DOM.

use crate::error::{SubmitError, SubmitResult};
use crate::form::FormState;
use crate::types::{SubmissionPayload, SubmissionStatus};
use crate::MISSING_FILE_MESSAGE;

/// A selected file that can be decoded as text.
#[allow(async_fn_in_trait)]
pub trait TextSource {
    async fn read_text(&self) -> SubmitResult<String>;
}

/// Delivers a payload to the scheduling endpoint.
#[allow(async_fn_in_trait)]
pub trait PayloadSender {
    async fn send(&self, payload: &SubmissionPayload) -> SubmitResult<()>;
}

/// Blocking user notification.
pub trait Alert {
    fn alert(&self, message: &str);
}

/// How a submission ended. Never surfaced to the user except `MissingFile`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No file selected; nothing was read or sent.
    MissingFile,
    /// The file could not be decoded; nothing was sent.
    ReadFailed(SubmitError),
    /// The request failed or was rejected.
    SendFailed(SubmitError),
    /// The endpoint accepted the payload.
    Sent,
}

/// Sequences one submission: presence check, decode, build, send.
pub struct Submitter<S, A> {
    sender: S,
    alert: A,
}

impl<S: PayloadSender, A: Alert> Submitter<S, A> {
    pub fn new(sender: S, alert: A) -> Self {
        Self { sender, alert }
    }

    /// Run a submission against the form snapshot taken at click time.
    ///
    /// Failures are logged and absorbed; `on_status` sees `Reading`,
    /// `Sending` (if the read succeeded) and finally `Idle`.
    pub async fn submit<F, C>(&self, file: Option<&F>, form: &FormState, on_status: C) -> SubmitOutcome
    where
        F: TextSource,
        C: Fn(SubmissionStatus),
    {
        let Some(file) = file else {
            log::warn!("⚠️ Send clicked without a file");
            self.alert.alert(MISSING_FILE_MESSAGE);
            return SubmitOutcome::MissingFile;
        };

        on_status(SubmissionStatus::Reading);
        let outcome = match file.read_text().await {
            Err(e) => {
                log::error!("❌ Error reading file: {}", e);
                SubmitOutcome::ReadFailed(e)
            }
            Ok(text) => {
                on_status(SubmissionStatus::Sending);
                let payload = form.to_payload(text);
                match self.sender.send(&payload).await {
                    Ok(()) => {
                        log::info!("📤 Submission sent ({} bytes of CSV)", payload.file.len());
                        SubmitOutcome::Sent
                    }
                    Err(e) => {
                        log::error!("❌ Error sending request: {}", e);
                        SubmitOutcome::SendFailed(e)
                    }
                }
            }
        };
        on_status(SubmissionStatus::Idle);
        outcome
    }
}
