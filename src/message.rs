use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Shown when a structured response carries no usable text field.
pub const UNPARSED_RESPONSE_FALLBACK: &str = "Received a response but couldn't parse it properly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
    System,
}

impl Sender {
    pub fn display_name(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "Chatty",
            Sender::System => "System",
        }
    }
}

/// Message content as delivered by the backend: either a plain string or a
/// structured object carrying at least a `text` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Structured(StructuredContent),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuredContent {
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MessageContent {
    pub fn from_text(text: impl Into<String>) -> Self {
        MessageContent::Text(text.into())
    }

    /// The unformatted source text every export works from. A structured
    /// object without a `text` field yields the fixed fallback string.
    pub fn text(&self) -> &str {
        match self {
            MessageContent::Text(text) => text,
            MessageContent::Structured(content) => {
                content.text.as_deref().unwrap_or(UNPARSED_RESPONSE_FALLBACK)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: MessageContent,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: MessageContent) -> Self {
        ChatMessage {
            sender,
            content,
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, MessageContent::from_text(text))
    }

    pub fn assistant(content: MessageContent) -> Self {
        Self::new(Sender::Assistant, content)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Sender::System, MessageContent::from_text(text))
    }

    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through_unchanged() {
        let content = MessageContent::from_text("Hello\nWorld");
        assert_eq!(content.text(), "Hello\nWorld");
    }

    #[test]
    fn test_structured_text_field_is_used() {
        let content: MessageContent =
            serde_json::from_str(r#"{"text": "from the backend", "score": 3}"#).unwrap();
        assert_eq!(content.text(), "from the backend");
    }

    #[test]
    fn test_structured_without_text_falls_back() {
        let content: MessageContent = serde_json::from_str(r#"{"score": 3}"#).unwrap();
        assert_eq!(content.text(), UNPARSED_RESPONSE_FALLBACK);
    }

    #[test]
    fn test_json_string_deserializes_as_plain_text() {
        let content: MessageContent = serde_json::from_str(r#""just a string""#).unwrap();
        assert_eq!(content, MessageContent::Text("just a string".to_string()));
    }

    #[test]
    fn test_sender_display_names() {
        assert_eq!(Sender::User.display_name(), "You");
        assert_eq!(Sender::Assistant.display_name(), "Chatty");
    }
}
