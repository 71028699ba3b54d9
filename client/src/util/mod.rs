//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (location, body
//! class, clipboard) and pure string work (markdown, embed snippet) from page
//! and component logic to improve reuse and testability.

pub mod clipboard;
pub mod embed;
pub mod embed_mode;
pub mod markdown;
pub mod page;
pub mod text;
