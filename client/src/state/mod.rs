//! Client-side state for the question/answer page.
//!
//! DESIGN
//! ======
//! The page has one owner of mutable state, `qa::QaState`, provided to
//! components through a Leptos `RwSignal` context.

pub mod qa;
