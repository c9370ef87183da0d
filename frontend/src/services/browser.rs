//! Browser implementations of the submission seams.

use gloo_net::http::Request;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use super::submit::{Alert, PayloadSender, TextSource};
use crate::error::{SubmitError, SubmitResult};
use crate::types::SubmissionPayload;

/// Posts payloads as JSON with `gloo-net`.
pub struct HttpSender {
    url: String,
}

impl HttpSender {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl PayloadSender for HttpSender {
    async fn send(&self, payload: &SubmissionPayload) -> SubmitResult<()> {
        let request = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SubmitError::Status {
                status: response.status(),
                body,
            });
        }

        Ok(())
    }
}

/// A file picked through `<input type="file">`.
pub struct BrowserFile(pub File);

impl TextSource for BrowserFile {
    async fn read_text(&self) -> SubmitResult<String> {
        let text = JsFuture::from(self.0.text())
            .await
            .map_err(|e| SubmitError::Read(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| SubmitError::Read("file content is not text".to_string()))
    }
}

/// `window.alert`.
pub struct BrowserAlert;

impl Alert for BrowserAlert {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}
