use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChatRole {
    User,
    Character,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Character => "character",
        }
    }

    pub fn is_user(self) -> bool {
        self == ChatRole::User
    }

    pub fn is_character(self) -> bool {
        self == ChatRole::Character
    }
}

impl AsRef<str> for ChatRole {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for ChatRole {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(ChatRole::User),
            "character" => Ok(ChatRole::Character),
            _ => Err(format!("invalid chat role: {value}")),
        }
    }
}

impl TryFrom<String> for ChatRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<ChatRole> for String {
    fn from(value: ChatRole) -> Self {
        value.as_str().to_string()
    }
}

/// A single entry in a character's thread.
///
/// `author_name` is the display label captured when the message was created;
/// it deliberately does not track later identity changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub author_name: String,
}

impl Message {
    pub fn new(role: ChatRole, content: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
            author_name: author_name.into(),
        }
    }

    pub fn user(content: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content, author_name)
    }

    pub fn character(content: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self::new(ChatRole::Character, content, author_name)
    }

    pub fn is_user(&self) -> bool {
        self.role.is_user()
    }

    pub fn is_character(&self) -> bool {
        self.role.is_character()
    }

    /// Short clock label for display next to the bubble.
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_strings() {
        for role in [ChatRole::User, ChatRole::Character] {
            assert_eq!(ChatRole::try_from(role.as_str()), Ok(role));
        }
    }

    #[test]
    fn invalid_role_strings_are_rejected() {
        assert!(ChatRole::try_from("assistant").is_err());
        assert!(ChatRole::try_from("").is_err());
    }

    #[test]
    fn constructors_set_role_and_author() {
        let sent = Message::user("hello", "Frodo");
        assert!(sent.is_user());
        assert_eq!(sent.author_name, "Frodo");

        let reply = Message::character("you shall not pass", "Gandalf");
        assert!(reply.is_character());
        assert_eq!(reply.author_name, "Gandalf");
    }

    #[test]
    fn timestamp_label_is_hours_and_minutes() {
        let message = Message::user("hi", "You");
        let label = message.timestamp_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }

    #[test]
    fn messages_survive_serialization() {
        let message = Message::character("elementary", "Sherlock");
        let json = serde_json::to_string(&message).unwrap();
        let restored: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, message);
    }
}
