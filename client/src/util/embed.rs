//! Embed snippet derivation.
//!
//! The snippet is an `<iframe>` tag pointing back at this page with the
//! current question and `embed=1` in the query string. It is a pure function
//! of the input text and the page location, so repeated calls with the same
//! input produce identical output.

#[cfg(test)]
#[path = "embed_test.rs"]
mod embed_test;

use url::form_urlencoded;

use super::page::PageLocation;
use super::text::js_trim;

/// Question used in the snippet when the input box is empty.
pub const PLACEHOLDER_QUESTION: &str = "在这里输入问题";

const IFRAME_STYLE: &str =
    "width:100%;max-width:720px;height:480px;border:1px solid #e5e7eb;border-radius:12px;";
const IFRAME_TITLE: &str = "RAG助手";

/// Iframe markup plus the URL used for the live preview.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedSnippet {
    pub iframe: String,
    pub preview_src: String,
}

/// Build the embed URL for `question` at `location`.
pub fn embed_src(location: &PageLocation, question: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("question", question)
        .append_pair("embed", "1")
        .finish();
    format!("{}?{query}", location.base())
}

/// Derive the snippet from raw input-box text.
pub fn build_snippet(location: &PageLocation, input: &str) -> EmbedSnippet {
    let trimmed = js_trim(input);
    let question = if trimmed.is_empty() { PLACEHOLDER_QUESTION } else { trimmed };
    let src = embed_src(location, question);
    let iframe = format!(r#"<iframe src="{src}" style="{IFRAME_STYLE}" title="{IFRAME_TITLE}"></iframe>"#);
    EmbedSnippet { iframe, preview_src: src }
}
