use super::*;

fn location() -> PageLocation {
    PageLocation::new("https://x", "/y")
}

#[test]
fn embed_src_appends_question_then_embed_flag() {
    assert_eq!(embed_src(&location(), "foo"), "https://x/y?question=foo&embed=1");
}

#[test]
fn embed_src_form_encodes_question() {
    assert_eq!(
        embed_src(&location(), "a b&c=d"),
        "https://x/y?question=a+b%26c%3Dd&embed=1"
    );
}

#[test]
fn embed_src_percent_encodes_non_ascii() {
    assert_eq!(embed_src(&location(), "问"), "https://x/y?question=%E9%97%AE&embed=1");
}

#[test]
fn snippet_iframe_uses_src_and_title() {
    let snippet = build_snippet(&location(), "foo");
    assert_eq!(snippet.preview_src, "https://x/y?question=foo&embed=1");
    assert_eq!(
        snippet.iframe,
        "<iframe src=\"https://x/y?question=foo&embed=1\" \
         style=\"width:100%;max-width:720px;height:480px;border:1px solid #e5e7eb;border-radius:12px;\" \
         title=\"RAG助手\"></iframe>"
    );
}

#[test]
fn snippet_trims_input() {
    let snippet = build_snippet(&location(), "  foo \n");
    assert_eq!(snippet.preview_src, "https://x/y?question=foo&embed=1");
}

#[test]
fn snippet_uses_placeholder_for_blank_input() {
    let snippet = build_snippet(&location(), "   ");
    assert_eq!(snippet.preview_src, embed_src(&location(), PLACEHOLDER_QUESTION));
}

#[test]
fn snippet_is_idempotent() {
    let first = build_snippet(&location(), "foo");
    let second = build_snippet(&location(), "foo");
    assert_eq!(first, second);
}

#[test]
fn snippet_treats_byte_order_mark_as_blank() {
    let snippet = build_snippet(&location(), "\u{feff} ");
    assert_eq!(snippet.preview_src, embed_src(&location(), PLACEHOLDER_QUESTION));
}
