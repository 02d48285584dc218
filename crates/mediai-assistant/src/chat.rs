//! In-memory chat transcript.

use mediai_core::models::chat::{ChatMessage, ChatSender};

use crate::responder::TopicResponder;
use crate::rules;

/// Ordered, append-only transcript for one chat session. Not persisted.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A new session opened by the assistant greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatSender::Assistant, rules::GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message. Whitespace-only input is ignored and yields
    /// `None`; otherwise the text is kept as typed.
    pub fn push_user(&mut self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.push(ChatSender::User, text))
    }

    pub fn push_assistant(&mut self, text: &str) -> ChatMessage {
        self.push(ChatSender::Assistant, text)
    }

    /// Append the user message and the responder's reply in one step.
    /// Returns the reply, or `None` when the input was ignored.
    pub fn respond(&mut self, responder: &TopicResponder, text: &str) -> Option<ChatMessage> {
        self.push_user(text)?;
        let reply = responder.classify(text).to_string();
        Some(self.push_assistant(&reply))
    }

    fn push(&mut self, sender: ChatSender, text: &str) -> ChatMessage {
        let message = ChatMessage::new(sender, text);
        self.messages.push(message.clone());
        message
    }
}
