//! Per-character message threads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::message::Message;

/// Ordered message history per character id.
///
/// Threads are created lazily (an absent id reads as an empty thread) and are
/// never removed here; dropping a character from the registry does not
/// cascade into its history. Serialized as a bare id-to-array object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationStore {
    threads: HashMap<String, Vec<Message>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to the end of `character_id`'s thread.
    ///
    /// Content that is empty after trimming is rejected without touching the
    /// store. This is the only mutation; existing messages are never edited
    /// or deleted.
    pub fn append(&mut self, character_id: &str, message: Message) -> bool {
        if message.content.trim().is_empty() {
            return false;
        }
        self.threads
            .entry(character_id.to_string())
            .or_default()
            .push(message);
        true
    }

    /// Full history for `character_id`, oldest first; empty if none exists.
    pub fn read(&self, character_id: &str) -> &[Message] {
        self.threads
            .get(character_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn thread_len(&self, character_id: &str) -> usize {
        self.read(character_id).len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_then_read_yields_the_message_last() {
        let mut store = ConversationStore::new();
        assert!(store.append("gandalf", Message::user("hello", "You")));
        assert!(store.append("gandalf", Message::character("greetings", "Gandalf")));

        let thread = store.read("gandalf");
        assert_eq!(thread.len(), 2);
        assert_eq!(thread.last().unwrap().content, "greetings");
    }

    #[test]
    fn absent_threads_read_as_empty() {
        let store = ConversationStore::new();
        assert!(store.read("nobody").is_empty());
        assert_eq!(store.thread_len("nobody"), 0);
    }

    #[test]
    fn whitespace_only_content_is_rejected() {
        let mut store = ConversationStore::new();
        assert!(!store.append("gandalf", Message::user("   \n", "You")));
        assert!(store.read("gandalf").is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn repeated_reads_are_stable() {
        let mut store = ConversationStore::new();
        store.append("sherlock", Message::user("a case", "You"));
        let first: Vec<Message> = store.read("sherlock").to_vec();
        let second: Vec<Message> = store.read("sherlock").to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn threads_are_independent() {
        let mut store = ConversationStore::new();
        store.append("gandalf", Message::user("hello", "You"));
        assert!(store.read("sherlock").is_empty());
        assert_eq!(store.thread_len("gandalf"), 1);
    }
}
