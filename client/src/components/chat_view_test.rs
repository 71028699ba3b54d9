use super::*;

#[test]
fn pending_bubble_shows_typing_marks() {
    assert_eq!(assistant_bubble_class(&AssistantReply::Pending), "bubble ai typing");
}

#[test]
fn rendered_bubble_drops_typing_class() {
    assert_eq!(assistant_bubble_class(&AssistantReply::Rendered("<p>x</p>".into())), "bubble ai");
}

#[test]
fn failed_bubble_is_flagged() {
    let class = assistant_bubble_class(&AssistantReply::Failed("接口返回 500".into()));
    assert!(class.contains("bubble--failed"));
    assert!(!class.contains("typing"));
}
