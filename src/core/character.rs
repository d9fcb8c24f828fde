//! Character records and the insertion-ordered registry.
//!
//! A character is an addressable persona: a stable id, a display name, an
//! avatar reference, and a free-text behavioral prompt. The prompt is carried
//! in state but never interpreted here; whatever agent answers on the
//! character's behalf consumes it.

use serde::{Deserialize, Serialize};

use crate::core::constants::FALLBACK_ID_BASE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub prompt: String,
}

/// Derive a stable id from a display name: lower-case, stripped to `[a-z0-9]`.
///
/// Names with no ASCII alphanumerics at all (punctuation-only, non-Latin
/// scripts) fall back to a fixed base that [`CharacterRegistry::allocate_id`]
/// disambiguates like any other collision.
pub fn suggest_character_id(name: &str) -> String {
    let id: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if id.is_empty() {
        FALLBACK_ID_BASE.to_string()
    } else {
        id
    }
}

/// The set of addressable personas, in insertion order.
///
/// Serialized as a bare array of [`Character`] records; the same shape is
/// used for the embedded built-in set and for the persisted snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterRegistry {
    characters: Vec<Character>,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default set shipped with the binary, used whenever no
    /// persisted registry is available.
    pub fn builtin() -> Self {
        const BUILTIN: &str = include_str!("../builtin_characters.json");

        serde_json::from_str(BUILTIN).expect("Failed to parse builtin_characters.json")
    }

    /// Derive an id for `name` that is free in this registry.
    ///
    /// On collision the id is disambiguated with the smallest decimal suffix
    /// starting at 2 (`frodo`, `frodo2`, `frodo3`, ...), so a new character
    /// can never silently alias an existing character's thread.
    pub fn allocate_id(&self, name: &str) -> String {
        let base = suggest_character_id(name);
        if !self.contains(&base) {
            return base;
        }
        let mut suffix = 2usize;
        loop {
            let candidate = format!("{base}{suffix}");
            if !self.contains(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    pub fn push(&mut self, character: Character) {
        self.characters.push(character);
    }

    pub fn find(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn first_id(&self) -> Option<&str> {
        self.characters.first().map(|c| c.id.as_str())
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
