use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A single message in the assistant chat transcript.
///
/// Lives only in memory for the lifetime of one chat session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: ChatSender,
    pub timestamp: jiff::Timestamp,
}

impl ChatMessage {
    pub fn new(sender: ChatSender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: jiff::Timestamp::now(),
        }
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatSender {
    User,
    Assistant,
}
