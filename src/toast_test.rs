use super::*;

#[test]
fn from_tag_accepts_exact_tags_only() {
    assert_eq!(Severity::from_tag("success"), Some(Severity::Success));
    assert_eq!(Severity::from_tag("error"), Some(Severity::Error));
    assert_eq!(Severity::from_tag("warning"), Some(Severity::Warning));
    assert_eq!(Severity::from_tag("Error"), None);
    assert_eq!(Severity::from_tag("info"), None);
}

#[test]
fn as_tag_matches_from_tag() {
    for severity in [Severity::Success, Severity::Error, Severity::Warning] {
        assert_eq!(Severity::from_tag(severity.as_tag()), Some(severity));
    }
}

#[test]
fn unknown_tag_falls_back_to_success_icon() {
    assert_eq!(icon_for_tag("info"), "fa-check-circle");
    assert_eq!(icon_for_tag(""), "fa-check-circle");
    assert_eq!(icon_for_tag("warning"), "fa-exclamation-triangle");
}

#[test]
fn toast_element_carries_tag_class_and_icon() {
    let el = toast_element(&UiConfig::default(), "Saved", "error");
    assert_eq!(el.tag, "div");
    assert!(el.has_class("toast"));
    assert!(el.has_class("error"));
    let icon = el.find(&|e: &Element| e.tag == "i").unwrap();
    assert!(icon.has_class("fas"));
    assert!(icon.has_class("fa-times-circle"));
    assert_eq!(el.text_content(), "Saved");
}

#[test]
fn toast_element_keeps_unrecognized_tag_as_class() {
    let el = toast_element(&UiConfig::default(), "Heads up", "info");
    assert!(el.has_class("info"));
    let icon = el.find(&|e: &Element| e.tag == "i").unwrap();
    assert!(icon.has_class("fa-check-circle"));
}

#[test]
fn toast_element_renders_message_literally() {
    let el = toast_element(&UiConfig::default(), "<script>x</script>", "success");
    let span = el.find(&|e: &Element| e.tag == "span").unwrap();
    assert_eq!(span.text.as_deref(), Some("<script>x</script>"));
    assert!(span.children.is_empty());
}

#[test]
fn toast_element_accepts_empty_message() {
    let el = toast_element(&UiConfig::default(), "", "success");
    assert_eq!(el.text_content(), "");
}
