use super::*;
use crate::dom::{Element, MemoryDom};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn core() -> UiCore<MemoryDom> {
    UiCore::new(MemoryDom::new())
}

fn alert(text: &str) -> Element {
    Element::new("div").with_class("alert alert-success").with_text(text)
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn show_toast_attaches_one_toast() {
    let mut ui = core();
    let toast = ui.show_toast("Saved", "success", None).unwrap();
    assert_eq!(ui.dom().count_class("toast"), 1);
    let el = ui.dom().get(toast.node).unwrap();
    assert!(el.has_class("success"));
    assert_eq!(el.text_content(), "Saved");
    assert_eq!(ui.active_toast(), Some(toast));
}

#[test]
fn new_toast_replaces_previous_one() {
    let mut ui = core();
    let first = ui.show_toast("one", "success", None).unwrap();
    let second = ui.show_toast("two", "warning", None).unwrap();
    assert_eq!(ui.dom().count_class("toast"), 1);
    assert!(!ui.dom().contains(first.node));
    assert!(ui.dom().contains(second.node));
    assert!(!ui.is_pending(first.timer));
}

#[test]
fn new_toast_removes_toast_rendered_by_page() {
    let mut ui = core();
    let stale = ui.dom_mut().append(&Element::new("div").with_class("toast error")).unwrap();
    ui.show_toast("fresh", "success", None).unwrap();
    assert!(!ui.dom().contains(stale));
    assert_eq!(ui.dom().count_class("toast"), 1);
}

#[test]
fn unknown_tag_still_renders_with_success_icon() {
    let mut ui = core();
    let toast = ui.show_toast("fyi", "info", None).unwrap();
    let el = ui.dom().get(toast.node).unwrap();
    assert!(el.has_class("info"));
    assert!(el.find(&|e: &Element| e.has_class("fa-check-circle")).is_some());
}

#[test]
fn toast_is_removed_between_duration_and_exit_window() {
    let mut ui = core();
    let toast = ui.show_toast("bye", "success", Some(ms(1000))).unwrap();

    ui.advance(ms(999));
    assert!(ui.dom().contains(toast.node));
    assert_eq!(ui.dom().style_of(toast.node, "animation"), None);

    ui.advance(ms(1));
    assert!(ui.dom().contains(toast.node));
    assert_eq!(ui.dom().style_of(toast.node, "animation"), Some("slideOutRight 0.3s ease"));

    ui.advance(ms(299));
    assert!(ui.dom().contains(toast.node));

    ui.advance(ms(1));
    assert!(!ui.dom().contains(toast.node));
    assert_eq!(ui.active_toast(), None);
    assert_eq!(ui.pending_timers(), 0);
}

#[test]
fn default_duration_is_three_seconds() {
    let mut ui = core();
    let toast = ui.show_toast("default", "success", None).unwrap();
    ui.advance(ms(3299));
    assert!(ui.dom().contains(toast.node));
    ui.advance(ms(1));
    assert!(ui.dom().is_empty());
}

#[test]
fn zero_duration_starts_exit_immediately() {
    let mut ui = core();
    let toast = ui.show_toast("flash", "success", Some(Duration::ZERO)).unwrap();
    assert_eq!(ui.advance(Duration::ZERO), 1);
    assert_eq!(ui.dom().style_of(toast.node, "animation"), Some("slideOutRight 0.3s ease"));
    assert!(ui.dom().contains(toast.node));
}

#[test]
fn cancelling_toast_timer_keeps_it_visible() {
    let mut ui = core();
    let toast = ui.show_toast("sticky", "warning", None).unwrap();
    assert!(ui.cancel(toast.timer));
    ui.advance(ms(60_000));
    assert!(ui.dom().contains(toast.node));
}

#[test]
fn fire_runs_exit_ahead_of_schedule() {
    let mut ui = core();
    let toast = ui.show_toast("now", "success", None).unwrap();
    assert!(ui.fire(toast.timer));
    assert!(!ui.fire(toast.timer));
    assert_eq!(ui.now(), ms(3000));
    assert_eq!(ui.dom().style_of(toast.node, "animation"), Some("slideOutRight 0.3s ease"));
    let removal = ui.active_toast().unwrap().timer;
    assert!(ui.fire(removal));
    assert!(!ui.dom().contains(toast.node));
}

#[test]
fn replaced_toast_timers_do_not_touch_successor() {
    let mut ui = core();
    ui.show_toast("first", "success", Some(ms(1000))).unwrap();
    ui.advance(ms(500));
    let second = ui.show_toast("second", "success", Some(ms(1000))).unwrap();

    ui.advance(ms(600));
    assert!(ui.dom().contains(second.node));
    assert_eq!(ui.dom().style_of(second.node, "animation"), None);

    ui.advance(ms(400));
    assert_eq!(ui.dom().style_of(second.node, "animation"), Some("slideOutRight 0.3s ease"));
}

#[test]
fn replacing_toast_during_exit_cancels_pending_removal() {
    let mut ui = core();
    ui.show_toast("first", "success", Some(ms(100))).unwrap();
    ui.advance(ms(100));
    assert_eq!(ui.pending_timers(), 1);
    ui.show_toast("second", "success", None).unwrap();
    assert_eq!(ui.pending_timers(), 1);
}

#[test]
fn unbounded_toast_duration_does_not_overflow_clock() {
    let mut ui = core();
    ui.advance(ms(1));
    let toast = ui.show_toast("forever", "success", Some(Duration::MAX)).unwrap();
    ui.advance(ms(86_400_000));
    assert!(ui.dom().contains(toast.node));
    assert!(ui.is_pending(toast.timer));
    ui.advance(Duration::MAX);
    assert!(!ui.is_pending(toast.timer));
}

// =============================================================
// Loading overlay
// =============================================================

#[test]
fn show_loading_uses_default_message() {
    let mut ui = core();
    let node = ui.show_loading(None).unwrap();
    let el = ui.dom().get(node).unwrap();
    assert_eq!(el.id.as_deref(), Some("loading-overlay"));
    assert!(el.has_class("message-overlay"));
    assert!(el.find(&|e: &Element| e.has_class("message-box")).is_some());
    let spinner = el.find(&|e: &Element| e.has_class("spinner")).unwrap();
    assert!(spinner.has_class("spinner-lg"));
    assert_eq!(spinner.style_value("margin"), Some("0 auto 1rem"));
    let p = el.find(&|e: &Element| e.tag == "p").unwrap();
    assert_eq!(p.style_value("color"), Some("#6b7280"));
    assert_eq!(el.text_content(), "Loading...");
}

#[test]
fn show_then_hide_leaves_no_overlay() {
    let mut ui = core();
    ui.show_loading(Some("Uploading...")).unwrap();
    assert!(ui.hide_loading());
    assert!(ui.dom().is_empty());
}

#[test]
fn hide_without_show_is_noop() {
    let mut ui = core();
    ui.dom_mut().append(&alert("keep me")).unwrap();
    assert!(!ui.hide_loading());
    assert_eq!(ui.dom().len(), 1);
}

#[test]
fn second_show_loading_replaces_overlay() {
    let mut ui = core();
    let first = ui.show_loading(Some("first")).unwrap();
    let second = ui.show_loading(Some("second")).unwrap();
    assert!(!ui.dom().contains(first));
    assert_eq!(ui.dom().count_class("message-overlay"), 1);
    assert_eq!(ui.dom().get(second).unwrap().text_content(), "second");
    assert!(ui.hide_loading());
    assert!(ui.dom().is_empty());
}

#[test]
fn hide_loading_leaves_toast_and_its_timer_alone() {
    let mut ui = core();
    let toast = ui.show_toast("busy", "success", None).unwrap();
    ui.show_loading(None).unwrap();
    ui.hide_loading();
    assert!(ui.dom().contains(toast.node));
    assert!(ui.is_pending(toast.timer));
}

#[test]
fn configured_loading_message_and_id_are_used() {
    let config = UiConfig {
        loading_message: "Please wait".to_owned(),
        overlay_id: "busy".to_owned(),
        ..UiConfig::default()
    };
    let mut ui = UiCore::with_config(MemoryDom::new(), config);
    let node = ui.show_loading(None).unwrap();
    let el = ui.dom().get(node).unwrap();
    assert_eq!(el.id.as_deref(), Some("busy"));
    assert_eq!(el.text_content(), "Please wait");
}

// =============================================================
// Flash messages
// =============================================================

#[test]
fn flash_messages_fade_then_disappear() {
    let mut ui = core();
    let a = ui.dom_mut().append(&alert("a")).unwrap();
    let b = ui.dom_mut().append(&alert("b")).unwrap();
    let c = ui.dom_mut().append(&alert("c")).unwrap();
    let other = ui.dom_mut().append(&Element::new("div").with_class("card")).unwrap();

    let dismissals = ui.init_flash_messages();
    assert_eq!(dismissals.iter().map(|d| d.node).collect::<Vec<_>>(), vec![a, b, c]);

    ui.advance(ms(4999));
    assert_eq!(ui.dom().count_class("alert"), 3);

    ui.advance(ms(1));
    for node in [a, b, c] {
        assert_eq!(ui.dom().style_of(node, "opacity"), Some("0"));
        assert_eq!(ui.dom().style_of(node, "transition"), Some("opacity 0.3s ease"));
    }

    ui.advance(ms(300));
    assert_eq!(ui.dom().count_class("alert"), 0);
    assert!(ui.dom().contains(other));
}

#[test]
fn flash_scan_ignores_later_messages() {
    let mut ui = core();
    ui.dom_mut().append(&alert("early")).unwrap();
    ui.init_flash_messages();
    let late = ui.dom_mut().append(&alert("late")).unwrap();
    ui.advance(ms(10_000));
    assert_eq!(ui.dom().len(), 1);
    assert!(ui.dom().contains(late));
}

#[test]
fn cancelling_one_flash_keeps_only_that_message() {
    let mut ui = core();
    ui.dom_mut().append(&alert("a")).unwrap();
    ui.dom_mut().append(&alert("b")).unwrap();
    let dismissals = ui.init_flash_messages();
    assert!(ui.cancel(dismissals[1].timer));
    ui.advance(ms(5300));
    assert_eq!(ui.dom().len(), 1);
    assert!(ui.dom().contains(dismissals[1].node));
}

#[test]
fn flash_without_messages_schedules_nothing() {
    let mut ui = core();
    assert!(ui.init_flash_messages().is_empty());
    assert_eq!(ui.pending_timers(), 0);
}

#[test]
fn flash_removed_early_is_ignored_by_timers() {
    let mut ui = core();
    let a = ui.dom_mut().append(&alert("a")).unwrap();
    ui.init_flash_messages();
    ui.dom_mut().remove(a);
    assert_eq!(ui.advance(ms(5300)), 2);
    assert!(ui.dom().is_empty());
}

// =============================================================
// Clipboard reporting and timer plumbing
// =============================================================

#[test]
fn report_copy_success_shows_success_toast() {
    let mut ui = core();
    let toast = ui.report_copy(Ok(())).unwrap();
    let el = ui.dom().get(toast.node).unwrap();
    assert!(el.has_class("success"));
    assert_eq!(el.text_content(), "Copied to clipboard!");
}

#[test]
fn report_copy_failure_shows_error_toast() {
    let mut ui = core();
    let toast = ui.report_copy(Err(ClipboardError::Rejected("denied".to_owned()))).unwrap();
    let el = ui.dom().get(toast.node).unwrap();
    assert!(el.has_class("error"));
    assert!(el.find(&|e: &Element| e.has_class("fa-times-circle")).is_some());
    assert_eq!(el.text_content(), "Failed to copy");
}

#[test]
fn take_scheduled_reports_relative_delays() {
    let mut ui = core();
    let toast = ui.show_toast("t", "success", Some(ms(1200))).unwrap();
    assert_eq!(ui.take_scheduled(), vec![(toast.timer, ms(1200))]);
    ui.fire(toast.timer);
    let scheduled = ui.take_scheduled();
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].1, ms(300));
}

#[test]
fn custom_timings_drive_schedule() {
    let config = UiConfig { toast_duration_ms: 50, toast_exit_ms: 10, ..UiConfig::default() };
    let mut ui = UiCore::with_config(MemoryDom::new(), config);
    let toast = ui.notify("quick", Severity::Warning).unwrap();
    ui.advance(ms(59));
    assert!(ui.dom().contains(toast.node));
    ui.advance(ms(1));
    assert!(ui.dom().is_empty());
}
