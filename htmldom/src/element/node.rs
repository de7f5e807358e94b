use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::{ClassList, Content};
use crate::event::Event;
use crate::render::is_valid_attr_name;

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

fn generate_key(prefix: &str) -> String {
    let key = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{key}")
}

/// Callback invoked when an element is activated.
pub type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

/// A node in the element tree.
///
/// A text node is an element with an empty tag and `Content::Text`.
#[derive(Clone)]
pub struct Element {
    // Identity
    /// Process-unique key used to address the node in events and focus.
    /// Never serialised.
    pub key: String,
    pub tag: String,

    // Markup
    pub attrs: BTreeMap<String, String>,
    pub classes: ClassList,
    pub content: Content,

    // State
    /// Whether this element is disabled. Disabled elements don't receive activation.
    pub disabled: bool,

    // Interaction
    pub on_click: Option<Handler>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            key: generate_key("el"),
            tag: String::new(),
            attrs: BTreeMap::new(),
            classes: ClassList::new(),
            content: Content::None,
            disabled: false,
            on_click: None,
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("key", &self.key)
            .field("tag", &self.tag)
            .field("attrs", &self.attrs)
            .field("classes", &self.classes)
            .field("content", &self.content)
            .field("disabled", &self.disabled)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            key: generate_key(&tag),
            tag,
            ..Default::default()
        }
    }

    /// Create a bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            key: generate_key("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn is_text(&self) -> bool {
        self.tag.is_empty()
    }

    // Identity
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    // Attributes
    /// Set an attribute.
    ///
    /// `class` is routed into the class list and `disabled` into the
    /// disabled flag. Names that cannot be serialised are dropped.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "class" => self.classes.extend_str(&value),
            "disabled" => self.disabled = true,
            _ if !is_valid_attr_name(&name) => {
                log::warn!("[element] dropping invalid attribute name {:?}", name);
            }
            _ => {
                self.attrs.insert(name, value);
            }
        }
        self
    }

    /// Set a boolean attribute (serialised without a value).
    pub fn bool_attr(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    // Classes
    /// Append whitespace-separated class tokens.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.extend_str(classes);
        self
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    // State
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Interaction
    pub fn on_click(mut self, handler: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn handler(mut self, handler: Option<Handler>) -> Self {
        self.on_click = handler;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                // Keep existing text as the first child
                let text = Element::text(std::mem::take(text));
                self.content = Content::Children(vec![text, child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self = self.child(child);
        }
        self
    }

    /// Append a text node.
    pub fn push_text(self, text: impl Into<String>) -> Self {
        self.child(Element::text(text))
    }

    /// Replace all content with a single run of text.
    pub fn text_content(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Copy the subtree with freshly generated keys.
    ///
    /// `clone` keeps keys, so a clone placed in the same tree as its
    /// source would be addressed as the source. Explicit keys are replaced
    /// too.
    pub fn fresh_copy(&self) -> Self {
        let prefix = if self.is_text() { "text" } else { self.tag.as_str() };
        let content = match &self.content {
            Content::Children(children) => {
                Content::Children(children.iter().map(Element::fresh_copy).collect())
            }
            other => other.clone(),
        };
        Self {
            key: generate_key(prefix),
            content,
            ..self.clone()
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
