use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use htmldom::{collect_focusable, Dispatch, Element, FocusState, Key, UserEvent};

fn form() -> Element {
    Element::div()
        .child(Element::button().key("first"))
        .child(Element::button().key("disabled").disabled(true))
        .child(Element::anchor("/docs").key("link"))
        .child(Element::span().key("plain"))
        .child(Element::div().key("tabbable").attr("tabindex", "0"))
        .child(Element::button().key("skipped").attr("tabindex", "-1"))
}

// ============================================================================
// Focus Collection
// ============================================================================

#[test]
fn test_collect_focusable_skips_disabled_and_plain() {
    assert_eq!(collect_focusable(&form()), vec!["first", "link", "tabbable"]);
}

#[test]
fn test_hidden_subtree_not_focusable() {
    let root = Element::div()
        .child(Element::div().attr("aria-hidden", "true").child(Element::button()));
    assert!(collect_focusable(&root).is_empty());
}

// ============================================================================
// Tab Navigation
// ============================================================================

#[test]
fn test_focus_next_wraps() {
    let root = form();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("first".to_string()));
    assert_eq!(focus.focus_next(&root), Some("link".to_string()));
    assert_eq!(focus.focus_next(&root), Some("tabbable".to_string()));
    assert_eq!(focus.focus_next(&root), Some("first".to_string()));
}

#[test]
fn test_focus_prev_from_start_goes_to_last() {
    let root = form();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev(&root), Some("tabbable".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("link".to_string()));
}

#[test]
fn test_blur() {
    let mut focus = FocusState::new();
    assert!(!focus.blur());
    focus.focus("first");
    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// User Events
// ============================================================================

#[test]
fn test_user_tab_then_enter_activates() {
    let count = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&count);
    let root = Element::div().child(Element::button().key("go").on_click(move |_| {
        handle.fetch_add(1, Ordering::SeqCst);
    }));

    let mut user = UserEvent::new();
    user.tab(&root);
    assert_eq!(user.focused(), Some("go"));
    assert_eq!(user.keyboard(&root, Key::Enter), Dispatch::Handled);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_user_click_focuses_target() {
    let root = Element::div().child(Element::button().key("go"));
    let mut user = UserEvent::new();

    user.click(&root, "go");
    assert_eq!(user.focused(), Some("go"));
}

#[test]
fn test_user_keyboard_without_focus_is_ignored() {
    let root = Element::div().child(Element::button().key("go"));
    let mut user = UserEvent::new();
    assert_eq!(user.keyboard(&root, Key::Enter), Dispatch::Ignored);
}
