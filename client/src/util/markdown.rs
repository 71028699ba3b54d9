//! Markdown rendering for assistant answers.
//!
//! Answers arrive as markdown and are shown as HTML inside the assistant
//! bubble. Single newlines are kept as line breaks so multi-line answers keep
//! their layout.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Shown when there is nothing to render.
pub const EMPTY_CONTENT: &str = "暂无内容";

/// Render `markdown` to an HTML string.
///
/// Empty input renders [`EMPTY_CONTENT`] instead.
pub fn render_markdown_html(markdown: &str) -> String {
    let source = if markdown.is_empty() { EMPTY_CONTENT } else { markdown };

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Raw HTML from the endpoint is dropped; soft breaks become <br />.
    let parser = Parser::new_ext(source, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::SoftBreak => Some(Event::HardBreak),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
