use htmldom::{to_html, ClassList, Element};

// ============================================================================
// Serialisation
// ============================================================================

#[test]
fn test_class_is_written_first() {
    let el = Element::button()
        .attr("type", "button")
        .attr("data-slot", "button")
        .class("h-9 px-4")
        .text_content("Save");

    assert_eq!(
        to_html(&el),
        r#"<button class="h-9 px-4" data-slot="button" type="button">Save</button>"#
    );
}

#[test]
fn test_class_attribute_goes_to_class_list() {
    let el = Element::span().attr("class", "a b").class("b c");
    assert_eq!(el.classes, ClassList::parse("a b c"));
    assert!(!el.has_attr("class"));
}

#[test]
fn test_text_and_attributes_are_escaped() {
    let el = Element::anchor("/search?q=a&b=\"c\"").text_content("<Tom & Jerry>");

    assert_eq!(
        to_html(&el),
        r#"<a href="/search?q=a&amp;b=&quot;c&quot;">&lt;Tom &amp; Jerry&gt;</a>"#
    );
}

#[test]
fn test_boolean_attribute_has_no_value() {
    let el = Element::button().bool_attr("autofocus");
    assert_eq!(to_html(&el), "<button autofocus></button>");
}

#[test]
fn test_void_and_svg_elements() {
    let el = Element::div()
        .child(Element::new("img").attr("alt", "logo"))
        .child(Element::new("svg").child(Element::new("path").attr("d", "M0 0")));

    assert_eq!(
        to_html(&el),
        r#"<div><img alt="logo"><svg><path d="M0 0"/></svg></div>"#
    );
}

#[test]
fn test_mixed_text_and_children() {
    let el = Element::button()
        .text_content("Go")
        .child(Element::span().text_content("!"));

    assert_eq!(to_html(&el), "<button>Go<span>!</span></button>");
}

// ============================================================================
// Disabled state
// ============================================================================

#[test]
fn test_disabled_form_control_gets_native_attribute() {
    let el = Element::button().disabled(true);
    assert_eq!(to_html(&el), "<button disabled></button>");
}

#[test]
fn test_disabled_anchor_gets_aria_disabled() {
    let el = Element::anchor("/x").disabled(true);
    assert_eq!(
        to_html(&el),
        r#"<a aria-disabled="true" data-disabled href="/x"></a>"#
    );
}

#[test]
fn test_disabled_attribute_sets_state() {
    let el = Element::anchor("/x").attr("disabled", "");

    assert!(el.disabled);
    assert!(!el.has_attr("disabled"));
    assert_eq!(
        to_html(&el),
        r#"<a aria-disabled="true" data-disabled href="/x"></a>"#
    );
}

// ============================================================================
// Attribute names
// ============================================================================

#[test]
fn test_invalid_attribute_names_are_dropped() {
    let el = Element::span()
        .attr("onclick\"x", "1")
        .attr("a b", "1")
        .attr("x>", "1")
        .attr("", "1")
        .attr("data-ok", "1");

    assert_eq!(el.attrs.len(), 1);
    assert_eq!(to_html(&el), r#"<span data-ok="1"></span>"#);
}

#[test]
fn test_invalid_names_inserted_directly_are_not_written() {
    let mut el = Element::span();
    el.attrs.insert("x\"><script".to_string(), "1".to_string());

    assert_eq!(to_html(&el), "<span></span>");
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_render_ignores_node_keys() {
    let a = Element::button().text_content("Same");
    let b = Element::button().text_content("Same");

    assert_ne!(a.key, b.key);
    assert_eq!(to_html(&a), to_html(&b));
}

#[test]
fn test_fresh_copy_renews_every_key() {
    let original = Element::button()
        .key("btn")
        .child(Element::text("Go"))
        .child(Element::span().text_content("!"));
    let copy = original.fresh_copy();

    assert_ne!(copy.key, original.key);
    for (a, b) in copy.content.children().iter().zip(original.content.children()) {
        assert_ne!(a.key, b.key);
    }
    assert_eq!(to_html(&copy), to_html(&original));
}
