use super::*;

#[test]
fn bold_markdown_renders_strong_element() {
    let html = render_markdown_html("**hi**");
    assert!(html.contains("<strong>hi</strong>"), "got {html}");
}

#[test]
fn empty_markdown_renders_placeholder() {
    assert_eq!(render_markdown_html(""), format!("<p>{EMPTY_CONTENT}</p>\n"));
}

#[test]
fn single_newlines_become_line_breaks() {
    let html = render_markdown_html("first\nsecond");
    assert_eq!(html, "<p>first<br />\nsecond</p>\n");
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
    assert!(html.contains("after"));
}

#[test]
fn tables_are_enabled() {
    let html = render_markdown_html("| a | b |\n| --- | --- |\n| 1 | 2 |");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>1</td>"));
}

#[test]
fn plain_chinese_text_is_wrapped_in_paragraph() {
    assert_eq!(render_markdown_html("未返回 answer 字段"), "<p>未返回 answer 字段</p>\n");
}
