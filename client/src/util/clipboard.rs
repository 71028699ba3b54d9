//! Clipboard helpers for the copy buttons.
//!
//! Text selection is pure and tested; the write goes through the async
//! browser clipboard API and is a failing no-op on the server.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use super::text::js_trim;

/// Pick the text to copy from an element.
///
/// An input-like `value` wins when non-empty, otherwise the element's
/// displayed text is used. Returns `None` when the chosen text is blank.
pub fn copy_source_text(value: Option<&str>, displayed: Option<&str>) -> Option<String> {
    let text = value
        .filter(|v| !v.is_empty())
        .or(displayed)
        .unwrap_or_default();
    if js_trim(text).is_empty() {
        return None;
    }
    Some(text.to_owned())
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string if the clipboard is unavailable or the browser
/// rejects the write.
pub async fn write_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let clipboard = window
            .navigator()
            .clipboard()
            .ok_or_else(|| "clipboard unavailable".to_owned())?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard not available on server".to_owned())
    }
}
