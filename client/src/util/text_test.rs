use super::*;

#[test]
fn strips_ascii_and_unicode_whitespace() {
    assert_eq!(js_trim("  hi\n\t"), "hi");
    assert_eq!(js_trim("\u{3000}问\u{a0}"), "问");
}

#[test]
fn strips_byte_order_mark() {
    assert_eq!(js_trim("\u{feff}"), "");
    assert_eq!(js_trim("\u{feff} foo \u{feff}"), "foo");
}

#[test]
fn keeps_inner_whitespace() {
    assert_eq!(js_trim(" a  b "), "a  b");
}
