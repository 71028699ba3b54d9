//! Embed-mode presentation marker.
//!
//! When the page is loaded with `embed=1` the `embed-mode` class is added to
//! `<body>` so the stylesheet can hide the form chrome and the embed panel.
//! The class is never removed. Requires a browser environment.

#[cfg(test)]
#[path = "embed_mode_test.rs"]
mod embed_mode_test;

/// Class added to `<body>` in embed mode.
pub const BODY_CLASS: &str = "embed-mode";

/// Query flag value that turns embed mode on.
pub const EMBED_FLAG: &str = "1";

/// Whether the raw `embed` query value enables embed mode.
pub fn is_enabled(raw: Option<&str>) -> bool {
    raw == Some(EMBED_FLAG)
}

/// Add [`BODY_CLASS`] to `<body>` when `enabled`.
///
/// Returns `true` if the marker was applied.
pub fn apply(enabled: bool) -> bool {
    if !enabled {
        return false;
    }
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return false;
        };
        body.class_list().add_1(BODY_CLASS).is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}
