use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use htmldom::{
    Dispatch, Element, Event, Key, Role, UserEvent, dispatch, get_by_role, role_of, to_html,
};
use slate::button::{Custom, MARKER_ATTR, MARKER_VALUE, SlotProps};
use slate::icons::Icon;
use slate::{Button, Size, Variant};

fn counter() -> (Arc<AtomicUsize>, impl Fn(&Event) + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&count);
    (count, move |_: &Event| {
        handle.fetch_add(1, Ordering::SeqCst);
    })
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_renders_with_default_props() {
    let root = Button::new().text("Click me").build();

    let button = get_by_role(&root, Role::Button, Some("Click me")).unwrap();
    assert_eq!(button.tag, "button");
    assert_eq!(button.get_attr("type"), Some("button"));
    assert!(button.has_class("bg-primary"));
    assert!(button.has_class("h-9"));
}

#[test]
fn test_renders_with_custom_class() {
    let root = Button::new().class("custom-class").text("Button").build();
    assert!(root.has_class("custom-class"));
    assert_eq!(root.classes.iter().last(), Some("custom-class"));
}

#[test]
fn test_caller_class_overrides_conflicting_size() {
    let root = Button::new().class("h-12 px-8").text("Tall").build();

    assert!(root.has_class("h-12"));
    assert!(!root.has_class("h-9"));
    assert!(!root.has_class("px-4"));
    // Modified padding is a different slot and survives
    assert!(root.has_class("has-[>svg]:px-3"));
}

#[test]
fn test_caller_can_override_type() {
    let root = Button::new().attr("type", "submit").text("Send").build();
    assert_eq!(root.get_attr("type"), Some("submit"));
}

#[test]
fn test_marker_cannot_be_overridden() {
    let root = Button::new().attr(MARKER_ATTR, "other").build();
    assert_eq!(root.get_attr(MARKER_ATTR), Some(MARKER_VALUE));
}

// ============================================================================
// Disabled
// ============================================================================

#[test]
fn test_renders_as_disabled() {
    let root = Button::new().disabled(true).text("Disabled Button").build();

    assert!(root.disabled);
    assert!(to_html(&root).contains(" disabled"));
    assert!(root.has_class("disabled:opacity-50"));
}

#[test]
fn test_calls_on_click_when_clicked() {
    let (count, handler) = counter();
    let root = Button::new().on_click(handler).text("Click me").build();

    let mut user = UserEvent::new();
    assert_eq!(user.click(&root, &root.key), Dispatch::Handled);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_does_not_call_on_click_when_disabled() {
    let (count, handler) = counter();
    let root = Button::new()
        .on_click(handler)
        .disabled(true)
        .text("Disabled")
        .build();

    let mut user = UserEvent::new();
    assert_eq!(user.click(&root, &root.key), Dispatch::Suppressed);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_disabled_attribute_disables_button() {
    let (count, handler) = counter();
    let root = Button::new()
        .attr("disabled", "")
        .on_click(handler)
        .text("Off")
        .build();

    assert!(root.disabled);
    assert!(to_html(&root).contains(" disabled "));
    assert_eq!(dispatch(&root, &Event::click(root.key.clone())), Dispatch::Suppressed);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_disabled_attribute_on_slotted_child() {
    let (count, handler) = counter();
    let root = Button::new()
        .on_click(handler)
        .as_child(Element::anchor("/x").attr("disabled", "").text_content("Off"))
        .build();

    assert_eq!(dispatch(&root, &Event::click(root.key.clone())), Dispatch::Suppressed);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_disabled_applies_to_every_variant() {
    for variant in Variant::ALL {
        let root = Button::new().variant(variant).disabled(true).build();
        assert!(root.disabled, "{variant} should be disabled");
        assert!(root.has_class("disabled:pointer-events-none"));
    }
}

// ============================================================================
// Variants
// ============================================================================

#[test]
fn test_variant_key_tokens() {
    let cases = [
        (Variant::Default, "bg-primary"),
        (Variant::Destructive, "bg-destructive"),
        (Variant::Outline, "border"),
        (Variant::Secondary, "bg-secondary"),
        (Variant::Ghost, "hover:bg-accent"),
        (Variant::Link, "text-primary"),
    ];

    for (variant, token) in cases {
        let root = Button::new().variant(variant).text(variant.as_str()).build();
        assert!(root.has_class(token), "{variant} should have {token}");
    }
}

// ============================================================================
// Sizes
// ============================================================================

#[test]
fn test_size_key_tokens() {
    let cases = [
        (Size::Sm, "h-8"),
        (Size::Default, "h-9"),
        (Size::Lg, "h-10"),
        (Size::Icon, "size-9"),
        (Size::IconSm, "size-8"),
        (Size::IconLg, "size-10"),
    ];

    for (size, token) in cases {
        let root = Button::new()
            .size(size)
            .child(Element::span().text_content("🎯"))
            .build();
        assert!(root.has_class(token), "{size} should have {token}");
    }
}

#[test]
fn test_icon_sizes_have_no_height_or_padding() {
    for size in [Size::Icon, Size::IconSm, Size::IconLg] {
        let root = Button::new().size(size).build();
        assert!(
            !root.classes.iter().any(|c| c.starts_with("h-") || c.starts_with("px-")),
            "{size} should be square"
        );
    }
}

#[test]
fn test_destructive_small_scenario() {
    let (count, handler) = counter();
    let root = Button::new()
        .variant(Variant::Destructive)
        .size(Size::Sm)
        .disabled(false)
        .on_click(handler)
        .text("Delete")
        .build();

    assert!(root.has_class("bg-destructive"));
    assert!(root.has_class("h-8"));
    assert_eq!(dispatch(&root, &Event::click(root.key.clone())), Dispatch::Handled);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

// ============================================================================
// As Child
// ============================================================================

#[test]
fn test_as_child_renders_anchor() {
    let root = Button::new()
        .as_child(Element::anchor("/test").text_content("Link Button"))
        .build();

    let link = get_by_role(&root, Role::Link, Some("Link Button")).unwrap();
    assert_eq!(link.get_attr("href"), Some("/test"));
    assert_eq!(role_of(&root), Role::Link);
    assert!(get_by_role(&root, Role::Button, None).is_err());
}

#[test]
fn test_as_child_keeps_button_styles() {
    let root = Button::new()
        .variant(Variant::Destructive)
        .as_child(Element::anchor("/test").text_content("Link"))
        .build();

    assert!(root.has_class("bg-destructive"));
    assert_eq!(root.get_attr(MARKER_ATTR), Some(MARKER_VALUE));
    assert!(!root.has_attr("type"));
}

#[test]
fn test_as_child_classes_come_last_and_win() {
    let root = Button::new()
        .as_child(
            Element::anchor("/x")
                .class("bg-emerald-600 underline")
                .text_content("Go"),
        )
        .build();

    assert!(!root.has_class("bg-primary"));
    let tokens: Vec<_> = root.classes.iter().collect();
    assert_eq!(&tokens[tokens.len() - 2..], &["bg-emerald-600", "underline"]);
}

#[test]
fn test_as_child_keeps_child_attributes() {
    let root = Button::new()
        .attr("title", "from button")
        .attr("rel", "from button")
        .as_child(
            Element::anchor("https://example.com")
                .attr("rel", "noopener noreferrer")
                .attr("target", "_blank"),
        )
        .build();

    assert_eq!(root.get_attr("rel"), Some("noopener noreferrer"));
    assert_eq!(root.get_attr("target"), Some("_blank"));
    assert_eq!(root.get_attr("title"), Some("from button"));
}

#[test]
fn test_as_child_composes_handlers_child_first() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));
    let child_log = Arc::clone(&order);
    let button_log = Arc::clone(&order);

    let root = Button::new()
        .on_click(move |_| button_log.lock().unwrap().push("button"))
        .as_child(
            Element::anchor("/x").on_click(move |_| child_log.lock().unwrap().push("child")),
        )
        .build();

    assert_eq!(dispatch(&root, &Event::click(root.key.clone())), Dispatch::Handled);
    assert_eq!(*order.lock().unwrap(), vec!["child", "button"]);
}

#[test]
fn test_as_child_disabled_suppresses_and_marks_aria() {
    let (count, handler) = counter();
    let root = Button::new()
        .disabled(true)
        .on_click(handler)
        .as_child(Element::anchor("/x").text_content("Nope"))
        .build();

    assert_eq!(dispatch(&root, &Event::click(root.key.clone())), Dispatch::Suppressed);
    assert_eq!(count.load(Ordering::SeqCst), 0);
    let html = to_html(&root);
    assert!(html.contains(r#"aria-disabled="true""#));
    assert!(!html.contains(" disabled "));
}

#[test]
fn test_custom_render_target() {
    let root = Button::new()
        .variant(Variant::Secondary)
        .text("More")
        .render_as(Custom(|props: SlotProps| {
            Element::new("summary")
                .classes(props.classes)
                .children(props.content)
        }));

    assert_eq!(root.tag, "summary");
    assert!(root.has_class("bg-secondary"));
    assert_eq!(root.inner_text(), "More");
}

// ============================================================================
// Accessibility
// ============================================================================

#[test]
fn test_has_marker_attribute() {
    let root = Button::new().text("Button").build();
    let button = get_by_role(&root, Role::Button, None).unwrap();
    assert_eq!(button.get_attr("data-slot"), Some("button"));
}

#[test]
fn test_aria_invalid_passthrough() {
    let root = Button::new().attr("aria-invalid", "true").text("Invalid").build();

    assert_eq!(root.get_attr("aria-invalid"), Some("true"));
    assert!(root.has_class("aria-invalid:ring-destructive/20"));
}

#[test]
fn test_invalid_helper() {
    let root = Button::new().invalid(true).build();
    assert_eq!(root.get_attr("aria-invalid"), Some("true"));
}

#[test]
fn test_focus_visible_classes() {
    let root = Button::new().text("Focus Me").build();
    assert!(root.has_class("focus-visible:ring-ring/50"));
}

#[test]
fn test_icon_is_hidden_from_name() {
    let root = Button::new().icon(Icon::Download).text("Download").build();
    assert!(get_by_role(&root, Role::Button, Some("Download")).is_ok());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_keyboard_navigation() {
    let (count, handler) = counter();
    let root = Element::div().child(Button::new().on_click(handler).text("Click me").build());
    let key = get_by_role(&root, Role::Button, Some("Click me"))
        .unwrap()
        .key
        .clone();

    let mut user = UserEvent::new();
    user.click(&root, &key);
    user.keyboard(&root, Key::Tab);
    user.keyboard(&root, Key::Enter);

    // Click, then Enter on the same (only) focusable button
    assert_eq!(user.focused(), Some(key.as_str()));
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_space_activates_native_button() {
    let (count, handler) = counter();
    let root = Button::new().on_click(handler).build();

    dispatch(&root, &Event::key(root.key.clone(), Key::SPACE));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_identical_config_renders_identically() {
    let make = || {
        Button::new()
            .variant(Variant::Outline)
            .size(Size::Lg)
            .class("w-full")
            .attr("aria-invalid", "true")
            .icon(Icon::Mail)
            .text("Send")
    };

    assert_eq!(to_html(&make().build()), to_html(&make().build()));

    let builder = make();
    assert_eq!(to_html(&builder.clone().build()), to_html(&builder.build()));
}

#[test]
fn test_native_html_shape() {
    let html = to_html(&Button::new().variant(Variant::Link).text("Docs").build());

    assert!(html.starts_with(r#"<button class="inline-flex "#));
    assert!(html.ends_with(r#" data-slot="button" type="button">Docs</button>"#));
}

#[test]
fn test_cloned_builders_share_a_tree() {
    let (count, handler) = counter();
    let base = Button::new().text("Go");
    let copy = base.clone().build();
    let original = base.on_click(handler).build();

    let copy_label = copy.content.children()[0].key.clone();
    let label = original.content.children()[0].key.clone();
    assert_ne!(copy_label, label);

    let root = Element::div().child(copy).child(original);
    assert_eq!(dispatch(&root, &Event::click(label)), Dispatch::Handled);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(dispatch(&root, &Event::click(copy_label)), Dispatch::Ignored);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_invalid_attribute_names_never_reach_markup() {
    let native = Button::new().attr("x\" onmouseover=\"y", "1").build();
    assert!(!to_html(&native).contains("onmouseover"));

    let slotted = Button::new()
        .attr("a b", "1")
        .as_child(Element::anchor("/x"))
        .build();
    assert!(!slotted.has_attr("a b"));
}

#[test]
fn test_caller_padding_and_size_override_resolved() {
    let root = Button::new().class("p-0").text("Flat").build();
    assert!(root.has_class("p-0"));
    assert!(!root.has_class("px-4"));
    assert!(!root.has_class("py-2"));

    let root = Button::new().class("size-12").build();
    assert!(root.has_class("size-12"));
    assert!(!root.has_class("h-9"));
}
