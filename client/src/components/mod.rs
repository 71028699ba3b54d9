//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the question page's surfaces while reading shared
//! `QaState` from Leptos context. Actions are passed in as callbacks so the
//! page stays the only place that starts async work.

pub mod chat_view;
pub mod embed_panel;
pub mod status_line;
