//! Render targets: how resolved button props become an element.

use std::collections::BTreeMap;
use std::sync::Arc;

use htmldom::render::is_valid_attr_name;
use htmldom::{ClassList, Element, Event, Handler};

use super::{MARKER_ATTR, MARKER_VALUE};
use crate::class::merge;

/// The resolved style and attribute bundle handed to a render target.
#[derive(Clone, Default)]
pub struct SlotProps {
    /// Resolved variant/size classes with caller classes merged in.
    pub classes: ClassList,
    /// Caller attributes plus the marker attribute.
    pub attrs: BTreeMap<String, String>,
    pub disabled: bool,
    pub on_click: Option<Handler>,
    pub content: Vec<Element>,
}

/// Strategy for building the final element from resolved props.
pub trait RenderTarget {
    fn render(self, props: SlotProps) -> Element;
}

/// The native `<button>` control.
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

impl RenderTarget for Native {
    fn render(self, props: SlotProps) -> Element {
        // Callers may override `type`; the marker always wins
        let mut element = Element::button().attr("type", "button");
        for (name, value) in props.attrs {
            element = element.attr(name, value);
        }
        element
            .attr(MARKER_ATTR, MARKER_VALUE)
            .classes(props.classes)
            .disabled(props.disabled)
            .handler(props.on_click)
            .children(props.content)
    }
}

/// Compose onto a caller-supplied element instead of rendering a wrapper.
///
/// The child keeps its tag, attributes and handler. Forwarded attributes
/// only fill gaps, classes are merged with the child's own last, and the
/// child's handler runs before the button's.
impl RenderTarget for Element {
    fn render(self, props: SlotProps) -> Element {
        let mut child = self;
        child.classes = merge(&props.classes, &child.classes);
        for (name, value) in props.attrs {
            if is_valid_attr_name(&name) {
                child.attrs.entry(name).or_insert(value);
            }
        }
        child.disabled |= props.disabled;
        child.on_click = compose(child.on_click.take(), props.on_click);
        child
            .attr(MARKER_ATTR, MARKER_VALUE)
            .children(props.content)
    }
}

/// A caller-chosen element construction strategy.
///
/// ```ignore
/// Button::new().render_as(Custom(|props: SlotProps| {
///     Element::new("summary").classes(props.classes)
/// }));
/// ```
pub struct Custom<F>(pub F);

impl<F> RenderTarget for Custom<F>
where
    F: FnOnce(SlotProps) -> Element,
{
    fn render(self, props: SlotProps) -> Element {
        (self.0)(props)
    }
}

/// Run `first` then `second` on each activation.
fn compose(first: Option<Handler>, second: Option<Handler>) -> Option<Handler> {
    match (first, second) {
        (Some(first), Some(second)) => Some(Arc::new(move |event: &Event| {
            first(event);
            second(event);
        })),
        (first, second) => first.or(second),
    }
}
