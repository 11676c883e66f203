//! Chat message model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sender {
    #[serde(rename = "You")]
    User,
    Assistant,
    System,
}

impl Sender {
    pub fn display_name(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "Assistant",
            Sender::System => "System",
        }
    }

    /// Suffix used in the `message-*` CSS class
    pub fn css_name(&self) -> &'static str {
        match self {
            Sender::User => "you",
            Sender::Assistant => "assistant",
            Sender::System => "system",
        }
    }
}

/// A single transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    /// Markdown source
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            sender,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Sender::System, content)
    }

    /// Wall-clock time shown in the message header
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_names() {
        assert_eq!(Sender::User.display_name(), "You");
        assert_eq!(Sender::User.css_name(), "you");
        assert_eq!(Sender::System.css_name(), "system");
    }

    #[test]
    fn test_user_sender_serializes_as_you() {
        assert_eq!(serde_json::to_value(Sender::User).unwrap(), "You");
        assert_eq!(serde_json::to_value(Sender::Assistant).unwrap(), "Assistant");
    }

    #[test]
    fn test_time_label_format() {
        let msg = ChatMessage::assistant("hi");
        let label = msg.time_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }
}
