//! Causerie is the conversation-state core of a chat-style Telegram Mini App:
//! a roster of user-defined characters and one message thread per character,
//! persisted locally and optionally forwarded to the hosting shell's bot.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the character registry, the per-character conversation
//!   store, and the [`core::app::App`] controller whose operations are the
//!   only way state mutates.
//! - [`storage`] defines the snapshot persistence contract and ships a
//!   file-backed store and an in-memory store; every mutation ends with a
//!   whole-snapshot save through it.
//! - [`host`] models the hosting shell (messaging bridge, user identity,
//!   theme palette) as an injectable capability with a detached default, so
//!   the crate behaves identically outside any shell.
//!
//! There is no presentation layer here: an embedding front-end renders
//! projections of [`core::app::App`] and raises intents through its methods.

pub mod core;
pub mod host;
pub mod logging;
pub mod storage;
pub mod utils;
