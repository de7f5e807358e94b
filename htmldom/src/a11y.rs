//! Accessibility roles and names.
//!
//! Enough of the ARIA role and accessible-name computation to address
//! rendered components the way assistive technology would.

use std::fmt;

use crate::element::{Content, Element};

/// Computed ARIA role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Button,
    Link,
    Checkbox,
    Textbox,
    Img,
    Generic,
}

impl Role {
    /// Parse an explicit `role` attribute value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "button" => Some(Self::Button),
            "link" => Some(Self::Link),
            "checkbox" => Some(Self::Checkbox),
            "textbox" => Some(Self::Textbox),
            "img" => Some(Self::Img),
            "generic" | "none" | "presentation" => Some(Self::Generic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Link => "link",
            Self::Checkbox => "checkbox",
            Self::Textbox => "textbox",
            Self::Img => "img",
            Self::Generic => "generic",
        }
    }

    /// Whether the role is activated by click and keyboard.
    pub fn is_activatable(&self) -> bool {
        matches!(self, Self::Button | Self::Link)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the role of an element from its tag and attributes.
pub fn role_of(element: &Element) -> Role {
    if let Some(role) = element.get_attr("role").and_then(Role::from_name) {
        return role;
    }

    match element.tag.as_str() {
        "button" => Role::Button,
        "a" if element.has_attr("href") => Role::Link,
        "img" => Role::Img,
        "textarea" => Role::Textbox,
        "input" => match element.get_attr("type").unwrap_or("text") {
            "checkbox" => Role::Checkbox,
            "button" | "submit" | "reset" => Role::Button,
            _ => Role::Textbox,
        },
        _ => Role::Generic,
    }
}

/// Whether the element is excluded from the accessibility tree.
pub fn is_hidden(element: &Element) -> bool {
    element.get_attr("aria-hidden") == Some("true") || element.has_attr("hidden")
}

/// Compute the accessible name of an element.
///
/// `aria-label` wins; otherwise the whitespace-normalised text content of
/// visible descendants is used.
pub fn accessible_name(element: &Element) -> String {
    if let Some(label) = element.get_attr("aria-label") {
        let label = label.trim();
        if !label.is_empty() {
            return label.to_string();
        }
    }
    if role_of(element) == Role::Img {
        if let Some(alt) = element.get_attr("alt") {
            return alt.trim().to_string();
        }
    }

    let mut text = String::new();
    visible_text(element, &mut text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn visible_text(element: &Element, out: &mut String) {
    if is_hidden(element) {
        return;
    }
    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            out.push_str(text);
        }
        Content::Children(children) => {
            for child in children {
                visible_text(child, out);
                // Adjacent children are separate words unless they are bare text
                if !child.is_text() {
                    out.push(' ');
                }
            }
        }
    }
}
