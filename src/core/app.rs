//! Application controller.
//!
//! [`App`] owns the registry, the conversation store, the active selection,
//! the draft buffer, and the pending UI signals; its methods are the only
//! mutation API. Reads are pure projections of this struct. Every mutation
//! ends with an explicit whole-snapshot save through the injected
//! [`SnapshotStore`], and every host interaction goes through the injected
//! [`HostEnvironment`], so both can be substituted in tests.

use tracing::debug;

use crate::core::character::{Character, CharacterRegistry};
use crate::core::constants::{
    CHARACTERS_KEY, DEFAULT_AVATAR, DEFAULT_PROMPT, FALLBACK_USER_NAME, MESSAGES_KEY,
};
use crate::core::conversation::ConversationStore;
use crate::core::message::Message;
use crate::host::{HostEnvironment, OutboundMessage, ThemePalette};
use crate::storage::{load_snapshot, save_snapshot, SnapshotStore};

/// Fields the presentation layer solicits for a new character.
///
/// Soliciting is entirely a presentation concern; the controller receives
/// the fields as typed and applies the placeholder defaults itself.
#[derive(Debug, Clone, Default)]
pub struct NewCharacter {
    pub name: String,
    pub prompt: Option<String>,
    pub avatar: Option<String>,
}

impl NewCharacter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Presentation intents that originate inside the controller.
///
/// The presentation layer drains these with [`App::take_signals`] after each
/// intent it raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiSignal {
    /// Close the character roster panel, raised after a successful addition.
    CloseRoster,
}

pub struct App {
    registry: CharacterRegistry,
    conversations: ConversationStore,
    active_id: Option<String>,
    draft: String,
    signals: Vec<UiSignal>,
    store: Box<dyn SnapshotStore>,
    host: Box<dyn HostEnvironment>,
}

impl App {
    /// Load persisted state and signal readiness to the host.
    ///
    /// Both snapshots fail open: an absent or unparsable registry falls back
    /// to the built-in set, an absent or unparsable conversation map to
    /// empty. The first registry entry becomes the active selection.
    pub fn start(store: Box<dyn SnapshotStore>, host: Box<dyn HostEnvironment>) -> Self {
        let registry = load_snapshot::<CharacterRegistry>(store.as_ref(), CHARACTERS_KEY)
            .unwrap_or_else(CharacterRegistry::builtin);
        let conversations =
            load_snapshot::<ConversationStore>(store.as_ref(), MESSAGES_KEY).unwrap_or_default();
        let active_id = registry.first_id().map(str::to_string);

        host.ready();

        Self {
            registry,
            conversations,
            active_id,
            draft: String::new(),
            signals: Vec::new(),
            store,
            host,
        }
    }

    /// Add a character to the roster and make it the active selection.
    ///
    /// A name that is empty after trimming aborts with no state change.
    /// Omitted or blank prompt/avatar fields take the placeholder defaults.
    /// Returns the allocated id, which may carry a disambiguation suffix.
    pub fn add_character(&mut self, new: NewCharacter) -> Option<String> {
        let name = new.name.trim();
        if name.is_empty() {
            debug!("Rejecting character with an empty name");
            return None;
        }

        let prompt = new
            .prompt
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());
        let avatar = new
            .avatar
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

        let id = self.registry.allocate_id(name);
        self.registry.push(Character {
            id: id.clone(),
            name: name.to_string(),
            avatar,
            prompt,
        });
        save_snapshot(self.store.as_mut(), CHARACTERS_KEY, &self.registry);

        self.active_id = Some(id.clone());
        self.signals.push(UiSignal::CloseRoster);
        Some(id)
    }

    /// Make `id` the active selection; unknown ids are a no-op.
    pub fn select_character(&mut self, id: &str) -> bool {
        if self.registry.contains(id) {
            self.active_id = Some(id.to_string());
            true
        } else {
            debug!(id = %id, "Ignoring selection of unknown character");
            false
        }
    }

    /// Append a user message to the active thread and notify the host.
    ///
    /// Rejected (no state change) when no character is active or the text is
    /// empty after trimming. The snapshot is persisted before the bridge
    /// hand-off, so local success never depends on the host channel.
    pub fn send_message(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some((active_id, character_name)) = self.active_target() else {
            debug!("Rejecting send with no active character");
            return false;
        };

        let author_name = self.user_display_name();
        self.conversations
            .append(&active_id, Message::user(trimmed, author_name));
        save_snapshot(self.store.as_mut(), MESSAGES_KEY, &self.conversations);

        let payload = OutboundMessage {
            character: character_name,
            text: trimmed.to_string(),
            user_id: self.host.user().map(|u| u.id),
            chat_id: self.host.chat_id(),
        };
        self.host.send_data(&payload);
        true
    }

    /// Record an externally generated answer on the active character's
    /// behalf. Nothing is synthesized locally and nothing reaches the
    /// bridge; the author label is the character's name at append time.
    pub fn record_character_reply(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some((active_id, character_name)) = self.active_target() else {
            debug!("Rejecting reply with no active character");
            return false;
        };

        self.conversations
            .append(&active_id, Message::character(trimmed, character_name));
        save_snapshot(self.store.as_mut(), MESSAGES_KEY, &self.conversations);
        true
    }

    /// The in-progress input buffer.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send the draft buffer; cleared only when the send succeeds, so a
    /// rejected draft stays editable.
    pub fn send_draft(&mut self) -> bool {
        let draft = std::mem::take(&mut self.draft);
        if self.send_message(&draft) {
            true
        } else {
            self.draft = draft;
            false
        }
    }

    pub fn characters(&self) -> &[Character] {
        self.registry.characters()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_character(&self) -> Option<&Character> {
        self.active_id
            .as_deref()
            .and_then(|id| self.registry.find(id))
    }

    /// The active thread, oldest first; empty when nothing is selected.
    pub fn messages(&self) -> &[Message] {
        self.active_id
            .as_deref()
            .map(|id| self.conversations.read(id))
            .unwrap_or(&[])
    }

    pub fn messages_for(&self, id: &str) -> &[Message] {
        self.conversations.read(id)
    }

    /// Drain the pending presentation signals.
    pub fn take_signals(&mut self) -> Vec<UiSignal> {
        std::mem::take(&mut self.signals)
    }

    /// Host palette, or the built-in defaults when the host supplies none.
    pub fn theme(&self) -> ThemePalette {
        self.host.theme().unwrap_or_default()
    }

    /// Display name stamped on outgoing messages.
    pub fn user_display_name(&self) -> String {
        self.host
            .user()
            .map(|u| u.display_name)
            .unwrap_or_else(|| FALLBACK_USER_NAME.to_string())
    }

    fn active_target(&self) -> Option<(String, String)> {
        let id = self.active_id.as_deref()?;
        let character = self.registry.find(id)?;
        Some((id.to_string(), character.name.clone()))
    }
}
