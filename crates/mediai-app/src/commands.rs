//! Commands invoked by the presentation layer.
//!
//! Errors are flattened to strings for display. Display delays run outside
//! every lock.

use std::time::Duration;

use mediai_analysis::report::AnalysisReport;
use mediai_analysis::upload::{FileKind, UploadedFile};
use mediai_auth::session::SessionState;
use mediai_core::models::chat::ChatMessage;
use mediai_core::models::user::UserRecord;
use uuid::Uuid;

use crate::state::AppState;

pub async fn restore_session(state: &AppState) -> Result<SessionState, String> {
    Ok(state.session.lock().await.restore())
}

pub async fn current_session(state: &AppState) -> Result<SessionState, String> {
    Ok(state.session.lock().await.state())
}

pub async fn sign_in(state: &AppState) -> Result<UserRecord, String> {
    state
        .session
        .lock()
        .await
        .sign_in()
        .map_err(|e| e.to_string())
}

pub async fn sign_out(state: &AppState) -> Result<(), String> {
    state.session.lock().await.sign_out();
    Ok(())
}

pub async fn chat_messages(state: &AppState) -> Result<Vec<ChatMessage>, String> {
    Ok(state.chat.lock().await.messages().to_vec())
}

/// Post a user message and, after the configured delay, the assistant
/// reply. Returns `None` for blank input, which is not recorded.
pub async fn send_chat_message(
    state: &AppState,
    text: String,
) -> Result<Option<ChatMessage>, String> {
    if state.chat.lock().await.push_user(&text).is_none() {
        return Ok(None);
    }

    let reply = state.responder.classify(&text).to_string();
    tokio::time::sleep(Duration::from_millis(state.config.chat_reply_delay_ms)).await;

    Ok(Some(state.chat.lock().await.push_assistant(&reply)))
}

pub async fn list_uploads(state: &AppState) -> Result<Vec<UploadedFile>, String> {
    Ok(state.uploads.lock().await.files().to_vec())
}

pub async fn add_upload(
    state: &AppState,
    name: String,
    kind: FileKind,
    content_type: Option<String>,
) -> Result<UploadedFile, String> {
    state
        .uploads
        .lock()
        .await
        .add(&name, kind, content_type.as_deref())
        .cloned()
        .map_err(|e| e.to_string())
}

pub async fn remove_upload(state: &AppState, id: Uuid) -> Result<bool, String> {
    Ok(state.uploads.lock().await.remove(id))
}

/// Run the demo analysis over the queued files.
///
/// An empty queue fails immediately; otherwise the configured delay
/// elapses before the report is produced.
pub async fn start_analysis(state: &AppState) -> Result<AnalysisReport, String> {
    if state.uploads.lock().await.is_empty() {
        return Err(mediai_analysis::error::AnalysisError::NoFiles.to_string());
    }

    tracing::info!(delay_ms = state.config.analysis_delay_ms, "analyzing documents");
    tokio::time::sleep(Duration::from_millis(state.config.analysis_delay_ms)).await;

    let uploads = state.uploads.lock().await;
    mediai_analysis::report::analyze(&uploads).map_err(|e| e.to_string())
}
