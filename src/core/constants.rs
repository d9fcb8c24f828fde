//! Shared constants used across the crate.

/// Snapshot key holding the ordered character registry.
pub const CHARACTERS_KEY: &str = "characters";

/// Snapshot key holding the character-id-to-thread mapping.
pub const MESSAGES_KEY: &str = "messages";

/// Behavioral prompt applied when a character is created without one.
pub const DEFAULT_PROMPT: &str = "You are a character.";

/// Avatar reference applied when a character is created without one.
pub const DEFAULT_AVATAR: &str = "https://placehold.co/40x40";

/// Author label for user messages when the host provides no identity.
pub const FALLBACK_USER_NAME: &str = "You";

/// Base id used when a display name contains no ASCII alphanumerics.
pub const FALLBACK_ID_BASE: &str = "character";
