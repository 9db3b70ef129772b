//! # Message Model
//!
//! The shape of a single chat turn. Pure data — all behavior lives in
//! [`crate::core::action`].

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single transcript entry.
///
/// The `id` is a rendering key only — transcript order is insertion order,
/// never id order. The `timestamp` is display-only (hour:minute label) and
/// is never used for ordering or persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content)
    }

    /// Hour:minute label rendered next to the bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_sender() {
        assert_eq!(Message::user("hi").sender, Sender::User);
        assert_eq!(Message::assistant("hello").sender, Sender::Assistant);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Message::user("same text");
        let b = Message::user("same text");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_time_label_is_hour_minute() {
        let label = Message::user("x").time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }

    #[test]
    fn test_content_preserves_newlines() {
        let msg = Message::assistant("line one\n\nline two");
        assert_eq!(msg.content, "line one\n\nline two");
    }
}
