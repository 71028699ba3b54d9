use super::*;

#[test]
fn muted_status_uses_base_class() {
    assert_eq!(status_class(&StatusLine::muted("等待提交")), "status");
}

#[test]
fn error_status_adds_error_modifier() {
    assert_eq!(status_class(&StatusLine::error("接口返回 500")), "status status--error");
}
