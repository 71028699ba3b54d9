//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod ask;
