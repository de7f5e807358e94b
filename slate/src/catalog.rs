//! Catalog schema for the button.
//!
//! Describes the component's controls for a story catalog, and the args
//! those controls produce.

use htmldom::Element;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::button::{Button, Size, Variant};

pub const TITLE: &str = "Components/Button";

pub const DESCRIPTION: &str = "A versatile button component with multiple variants and sizes. \
    Built on a slot render target for composition flexibility.";

/// Errors from decoding story args.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("invalid story args: {0}")]
    Json(#[from] serde_json::Error),
}

/// Component-level catalog metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub title: &'static str,
    pub component: &'static str,
    pub parameters: Parameters,
    pub tags: Vec<&'static str>,
    pub arg_types: Vec<ArgType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameters {
    pub layout: Layout,
    pub description: &'static str,
}

/// Canvas layout of the component's stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Centered,
}

/// One configurable property and its control.
#[derive(Debug, Clone, Serialize)]
pub struct ArgType {
    pub name: &'static str,
    #[serde(flatten)]
    pub control: Control,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "lowercase")]
pub enum Control {
    Select { options: Vec<&'static str> },
    Boolean,
}

impl Meta {
    /// Metadata for the button component.
    pub fn button() -> Self {
        Self {
            title: TITLE,
            component: "Button",
            parameters: Parameters {
                layout: Layout::Centered,
                description: DESCRIPTION,
            },
            tags: vec!["autodocs"],
            arg_types: vec![
                ArgType {
                    name: "variant",
                    control: Control::Select {
                        options: Variant::ALL.iter().map(|v| v.as_str()).collect(),
                    },
                    description: "The visual style variant of the button",
                },
                ArgType {
                    name: "size",
                    control: Control::Select {
                        options: Size::ALL.iter().map(|s| s.as_str()).collect(),
                    },
                    description: "The size of the button",
                },
                ArgType {
                    name: "asChild",
                    control: Control::Boolean,
                    description: "Compose the button styles onto a child element",
                },
                ArgType {
                    name: "disabled",
                    control: Control::Boolean,
                    description: "Whether the button is disabled",
                },
            ],
        }
    }

    pub fn arg_type(&self, name: &str) -> Option<&ArgType> {
        self.arg_types.iter().find(|arg| arg.name == name)
    }
}

/// Values for the button's controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonArgs {
    pub variant: Variant,
    pub size: Size,
    pub as_child: bool,
    pub disabled: bool,
    pub children: String,
}

impl ButtonArgs {
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
            ..Default::default()
        }
    }

    /// Decode args from control values; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ArgsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The button these args describe.
    ///
    /// With `as_child`, the children are slotted into an `<a href="#">`.
    pub fn button(&self) -> Button {
        let button = Button::new()
            .variant(self.variant)
            .size(self.size)
            .disabled(self.disabled);
        if self.as_child {
            button.as_child(Element::anchor("#").text_content(&self.children))
        } else {
            button.text(&self.children)
        }
    }

    pub fn render(&self) -> Element {
        self.button().build()
    }
}
