//! Networking for the answer endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single question POST and `types` defines its response
//! and error shapes.

pub mod api;
pub mod types;
