//! Text helpers matching browser string semantics.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Trim the way `String.prototype.trim` does.
///
/// Unicode whitespace plus U+FEFF, which `str::trim` keeps.
pub fn js_trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
