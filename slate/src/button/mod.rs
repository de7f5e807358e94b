//! Button component.

mod slot;
mod variants;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use htmldom::{ClassList, Element, Event, Handler};

pub use slot::{Custom, Native, RenderTarget, SlotProps};
pub use variants::{BASE_CLASSES, Size, Variant, button_variants};

use crate::class::merge;
use crate::icons::Icon;

/// Marker attribute identifying rendered buttons.
pub const MARKER_ATTR: &str = "data-slot";
/// Value of the marker attribute.
pub const MARKER_VALUE: &str = "button";

/// A button builder.
///
/// Stateless: every call to [`Button::build`] derives the element from the
/// builder's configuration alone, so identical builders render identical
/// markup.
///
/// # Example
///
/// ```ignore
/// let delete = Button::new()
///     .variant(Variant::Destructive)
///     .size(Size::Sm)
///     .icon(Icon::Trash2)
///     .text("Delete")
///     .on_click(|_| remove_row())
///     .build();
///
/// // Styled anchor instead of a <button>:
/// let docs = Button::new()
///     .variant(Variant::Outline)
///     .as_child(Element::anchor("/docs").text_content("Docs"))
///     .build();
/// ```
#[derive(Default)]
pub struct Button {
    variant: Variant,
    size: Size,
    disabled: bool,
    class: ClassList,
    attrs: BTreeMap<String, String>,
    on_click: Option<Handler>,
    content: Vec<Element>,
    slot: Option<Element>,
}

/// Clones get fresh node keys, so buttons built from a builder and its
/// clone can share a tree.
impl Clone for Button {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            size: self.size,
            disabled: self.disabled,
            class: self.class.clone(),
            attrs: self.attrs.clone(),
            on_click: self.on_click.clone(),
            content: self.content.iter().map(Element::fresh_copy).collect(),
            slot: self.slot.as_ref().map(Element::fresh_copy),
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .field("class", &self.class)
            .field("attrs", &self.attrs)
            .field("on_click", &self.on_click.is_some())
            .field("content", &self.content.len())
            .field("as_child", &self.slot.is_some())
            .finish()
    }
}

impl Button {
    /// Create a new button builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Disabled buttons never invoke their click handler.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Extra class tokens, merged after the resolved ones.
    pub fn class(mut self, classes: &str) -> Self {
        self.class.extend_str(classes);
        self
    }

    /// Pass an attribute through to the rendered element.
    ///
    /// `class` joins the extra classes and `disabled` disables the button.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "class" => self.class.extend_str(&value),
            "disabled" => self.disabled = true,
            _ => {
                self.attrs.insert(name, value);
            }
        }
        self
    }

    /// Mark the button invalid (`aria-invalid`), which activates the
    /// invalid ring classes.
    pub fn invalid(self, invalid: bool) -> Self {
        self.attr("aria-invalid", if invalid { "true" } else { "false" })
    }

    pub fn on_click(mut self, handler: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.content.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.content.extend(children);
        self
    }

    /// Append a text node.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Element::text(text))
    }

    pub fn icon(self, icon: Icon) -> Self {
        self.child(icon.element())
    }

    /// Render onto `child` instead of a native `<button>`.
    ///
    /// Exactly one child element can be slotted.
    pub fn as_child(mut self, child: Element) -> Self {
        self.slot = Some(child);
        self
    }

    pub fn get_variant(&self) -> Variant {
        self.variant
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_as_child(&self) -> bool {
        self.slot.is_some()
    }

    /// Resolved classes with the caller's extra classes merged in.
    pub fn resolved_classes(&self) -> ClassList {
        merge(&button_variants(self.variant, self.size), &self.class)
    }

    /// Build the element: the slotted child if [`Button::as_child`] was
    /// used, otherwise a native `<button>`.
    pub fn build(mut self) -> Element {
        match self.slot.take() {
            Some(child) => self.render_as(child),
            None => self.render_as(Native),
        }
    }

    /// Build the element with an explicit render target.
    ///
    /// Any child set with [`Button::as_child`] is ignored.
    pub fn render_as(self, target: impl RenderTarget) -> Element {
        log::trace!(
            "[button] render variant={} size={} disabled={}",
            self.variant,
            self.size,
            self.disabled
        );
        let props = self.props();
        target.render(props)
    }

    fn props(self) -> SlotProps {
        let classes = self.resolved_classes();
        let mut attrs = self.attrs;
        attrs.insert(MARKER_ATTR.to_string(), MARKER_VALUE.to_string());
        SlotProps {
            classes,
            attrs,
            disabled: self.disabled,
            on_click: self.on_click,
            content: self.content,
        }
    }
}
