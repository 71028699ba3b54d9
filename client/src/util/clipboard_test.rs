use super::*;

#[test]
fn value_is_preferred_over_displayed_text() {
    assert_eq!(copy_source_text(Some("value"), Some("shown")), Some("value".to_owned()));
}

#[test]
fn empty_value_falls_back_to_displayed_text() {
    assert_eq!(copy_source_text(Some(""), Some("shown")), Some("shown".to_owned()));
    assert_eq!(copy_source_text(None, Some("shown")), Some("shown".to_owned()));
}

#[test]
fn blank_text_is_not_copied() {
    assert_eq!(copy_source_text(None, None), None);
    assert_eq!(copy_source_text(Some(""), Some("  \n\t")), None);
    assert_eq!(copy_source_text(Some("   "), None), None);
}

#[test]
fn copied_text_is_not_trimmed() {
    assert_eq!(copy_source_text(None, Some(" hi \n")), Some(" hi \n".to_owned()));
}

#[test]
fn byte_order_mark_only_text_is_blank() {
    assert_eq!(copy_source_text(None, Some("\u{feff}\n")), None);
}
