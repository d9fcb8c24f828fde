//! The hosting shell, modelled as an injectable capability.
//!
//! A Telegram Mini App runs inside a shell that may offer a messaging bridge
//! back to the bot, the current user's identity, and a theme palette. It may
//! also offer none of these, as in a plain browser tab. Every
//! capability on [`HostEnvironment`] therefore has a no-op default, and
//! [`DetachedHost`] is the zero-implementation: with it the controller
//! behaves identically except that no payload ever leaves the process.

pub mod theme;

use serde::{Deserialize, Serialize};

pub use theme::ThemePalette;

/// Identity of the person driving the hosting shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub display_name: String,
}

/// Record handed to the host messaging bridge when a message is sent.
///
/// Wire keys follow the bridge's convention (`userId`/`chatId`); identity
/// fields are omitted entirely when the host provides none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub character: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

/// Capabilities a hosting shell may provide.
pub trait HostEnvironment {
    /// Startup handshake; invoked once when the controller finishes loading.
    fn ready(&self) {}

    /// Current user descriptor, when the host knows who is driving.
    fn user(&self) -> Option<HostUser> {
        None
    }

    /// Chat the mini-app was launched from, when the host exposes one.
    fn chat_id(&self) -> Option<i64> {
        None
    }

    /// Host color palette; `None` falls back to [`ThemePalette::default`].
    fn theme(&self) -> Option<ThemePalette> {
        None
    }

    /// Best-effort, fire-and-forget hand-off of `payload` to the host
    /// channel. At-most-once; no acknowledgement, retry, or ordering
    /// guarantee, and local state never depends on the outcome.
    fn send_data(&self, _payload: &OutboundMessage) {}
}

/// Stand-in used when running outside any hosting shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedHost;

impl HostEnvironment for DetachedHost {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_omits_absent_identity_fields() {
        let payload = OutboundMessage {
            character: "Gandalf".to_string(),
            text: "hello".to_string(),
            user_id: None,
            chat_id: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"character":"Gandalf","text":"hello"}"#);
    }

    #[test]
    fn payload_uses_camel_case_identity_keys() {
        let payload = OutboundMessage {
            character: "Sherlock".to_string(),
            text: "a case".to_string(),
            user_id: Some(7),
            chat_id: Some(99),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""userId":7"#));
        assert!(json.contains(r#""chatId":99"#));
    }

    #[test]
    fn payload_parses_without_identity_keys() {
        let payload: OutboundMessage =
            serde_json::from_str(r#"{"character":"Gandalf","text":"hello"}"#).unwrap();
        assert_eq!(payload.user_id, None);
        assert_eq!(payload.chat_id, None);
    }

    #[test]
    fn detached_host_provides_nothing() {
        let host = DetachedHost;
        assert!(host.user().is_none());
        assert!(host.chat_id().is_none());
        assert!(host.theme().is_none());
    }
}
