//! Report upload flow.
//!
//! A report file goes straight to the gateway as multipart form data. On
//! success the response replaces the stored view-model wholesale; on failure
//! the stored view-model is left untouched. Either way the user gets a
//! chat-style notification.

use serde_json::Value;
use tracing::warn;

use crate::chat::Transcript;
use crate::gateway::Gateway;
use crate::store::SessionStore;

pub const UPLOAD_OK_MESSAGE: &str = "Report processed successfully. The dashboard has been \
     updated with detailed insights. Would you like to view it now?";
pub const UPLOAD_FAILED_MESSAGE: &str =
    "Unable to process the report right now. Please try again or check your connection.";

#[derive(Debug, PartialEq)]
pub enum UploadOutcome {
    /// The stored view-model was fully replaced with this document.
    Replaced(Value),
    /// Nothing was written; the previous view-model still stands.
    Failed,
}

impl UploadOutcome {
    pub fn notification(&self) -> &'static str {
        match self {
            UploadOutcome::Replaced(_) => UPLOAD_OK_MESSAGE,
            UploadOutcome::Failed => UPLOAD_FAILED_MESSAGE,
        }
    }
}

/// Submit a report file and replace the stored view-model on success.
///
/// This is a full overwrite, not a merge: a processed report is treated as a
/// fresh analysis that supersedes the bootstrap-time document.
pub async fn process(
    gateway: &Gateway,
    store: &SessionStore,
    file_name: &str,
    bytes: Vec<u8>,
) -> UploadOutcome {
    let document = match gateway.upload_report(file_name, bytes).await {
        Ok(document) => document,
        Err(err) => {
            warn!(%err, file_name, "report upload failed; keeping previous view-model");
            return UploadOutcome::Failed;
        }
    };

    if let Err(err) = store.set_view_model(&document) {
        warn!(%err, "could not persist processed report");
        return UploadOutcome::Failed;
    }
    UploadOutcome::Replaced(document)
}

/// Upload a report and append the outcome notification to the transcript.
pub async fn process_with_notification(
    gateway: &Gateway,
    store: &SessionStore,
    transcript: &mut Transcript,
    file_name: &str,
    bytes: Vec<u8>,
) -> UploadOutcome {
    let outcome = process(gateway, store, file_name, bytes).await;
    transcript.push_assistant(outcome.notification());
    outcome
}
