//! Button stories.
//!
//! Each story is a stateless preview: rendering it twice yields the same
//! markup. Args stories render from [`ButtonArgs`] and accept overrides;
//! fixed stories ignore args.

use htmldom::Element;
use serde::Serialize;

use crate::button::{Button, Size, Variant};
use crate::catalog::ButtonArgs;
use crate::icons::Icon;

#[derive(Debug, Clone)]
pub enum StoryKind {
    /// Rendered from args, with these defaults.
    Args(ButtonArgs),
    /// A fixed composition.
    Fixed(fn() -> Element),
}

#[derive(Debug, Clone)]
pub struct Story {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub kind: StoryKind,
}

/// Serializable summary of a story for the catalog schema.
#[derive(Debug, Clone, Serialize)]
pub struct StoryInfo {
    pub id: String,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<ButtonArgs>,
}

impl Story {
    /// Kebab-case identifier, e.g. `icon-buttons` for `IconButtons`.
    pub fn id(&self) -> String {
        let mut id = String::new();
        for (i, c) in self.name.char_indices() {
            if c.is_uppercase() && i > 0 {
                id.push('-');
            }
            id.extend(c.to_lowercase());
        }
        id
    }

    /// Whether `query` names this story (by name or id, case-insensitive).
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.id().eq_ignore_ascii_case(query)
    }

    pub fn default_args(&self) -> Option<&ButtonArgs> {
        match &self.kind {
            StoryKind::Args(args) => Some(args),
            StoryKind::Fixed(_) => None,
        }
    }

    pub fn render(&self) -> Element {
        match &self.kind {
            StoryKind::Args(args) => args.render(),
            StoryKind::Fixed(render) => render(),
        }
    }

    /// Render with `args` for args stories; fixed stories ignore them.
    pub fn render_with(&self, args: &ButtonArgs) -> Element {
        match &self.kind {
            StoryKind::Args(_) => args.render(),
            StoryKind::Fixed(render) => {
                log::debug!("[stories] {} ignores args", self.name);
                render()
            }
        }
    }

    pub fn info(&self) -> StoryInfo {
        StoryInfo {
            id: self.id(),
            name: self.name,
            description: self.description,
            args: self.default_args().cloned(),
        }
    }
}

/// Every button story, in catalog order.
pub fn all() -> Vec<Story> {
    vec![
        Story {
            name: "Default",
            description: None,
            kind: StoryKind::Args(ButtonArgs::new("Button")),
        },
        fixed("Variants", variants),
        fixed("Sizes", sizes),
        fixed("IconButtons", icon_buttons),
        fixed("WithIcons", with_icons),
        fixed("Disabled", disabled),
        fixed("SizesWithIcons", sizes_with_icons),
        Story {
            name: "Interactive",
            description: None,
            kind: StoryKind::Args(ButtonArgs::new("Click me")),
        },
        fixed("AllVariantsDefault", all_variants_default),
        Story {
            name: "AsChild",
            description: Some(
                "Using `as_child` composes the button styles onto other elements \
                 like anchors or custom components.",
            ),
            kind: StoryKind::Fixed(as_child),
        },
    ]
}

/// Look up a story by name or id.
pub fn find(query: &str) -> Option<Story> {
    all().into_iter().find(|story| story.matches(query))
}

fn fixed(name: &'static str, render: fn() -> Element) -> Story {
    Story {
        name,
        description: None,
        kind: StoryKind::Fixed(render),
    }
}

fn row() -> Element {
    Element::div().class("flex flex-wrap gap-4")
}

fn centered_row() -> Element {
    Element::div().class("flex flex-wrap items-center gap-4")
}

fn labelled(variant: Variant, label: &str) -> Element {
    Button::new().variant(variant).text(label).build()
}

fn variant_row() -> Element {
    row()
        .child(labelled(Variant::Default, "Default"))
        .child(labelled(Variant::Destructive, "Destructive"))
        .child(labelled(Variant::Outline, "Outline"))
        .child(labelled(Variant::Secondary, "Secondary"))
        .child(labelled(Variant::Ghost, "Ghost"))
        .child(labelled(Variant::Link, "Link"))
}

fn variants() -> Element {
    variant_row()
}

fn sizes() -> Element {
    centered_row()
        .child(Button::new().size(Size::Sm).text("Small").build())
        .child(Button::new().size(Size::Default).text("Default").build())
        .child(Button::new().size(Size::Lg).text("Large").build())
}

fn icon_buttons() -> Element {
    let icon_button = |size| {
        Button::new()
            .size(size)
            .variant(Variant::Outline)
            .icon(Icon::Settings)
            .build()
    };
    centered_row()
        .child(icon_button(Size::IconSm))
        .child(icon_button(Size::Icon))
        .child(icon_button(Size::IconLg))
}

fn with_icons() -> Element {
    row()
        .child(Button::new().icon(Icon::Download).text("Download").build())
        .child(
            Button::new()
                .variant(Variant::Outline)
                .icon(Icon::Mail)
                .text("Send Email")
                .build(),
        )
        .child(
            Button::new()
                .variant(Variant::Destructive)
                .icon(Icon::Trash2)
                .text("Delete")
                .build(),
        )
        .child(
            Button::new()
                .variant(Variant::Ghost)
                .size(Size::Sm)
                .icon(Icon::Settings)
                .text("Settings")
                .build(),
        )
}

fn disabled() -> Element {
    let disabled_button = |variant, label: &str| {
        Button::new()
            .variant(variant)
            .disabled(true)
            .text(label)
            .build()
    };
    row()
        .child(disabled_button(Variant::Default, "Default Disabled"))
        .child(disabled_button(Variant::Destructive, "Destructive Disabled"))
        .child(disabled_button(Variant::Outline, "Outline Disabled"))
        .child(disabled_button(Variant::Secondary, "Secondary Disabled"))
        .child(disabled_button(Variant::Ghost, "Ghost Disabled"))
        .child(disabled_button(Variant::Link, "Link Disabled"))
}

fn sizes_with_icons() -> Element {
    let sized_row = |variant| {
        centered_row().children([
            (Size::Sm, "Small"),
            (Size::Default, "Default"),
            (Size::Lg, "Large"),
        ]
        .into_iter()
        .map(|(size, label)| {
            Button::new()
                .size(size)
                .variant(variant)
                .icon(Icon::Download)
                .text(label)
                .build()
        }))
    };
    Element::div()
        .class("flex flex-col gap-4")
        .child(sized_row(Variant::Default))
        .child(sized_row(Variant::Outline))
}

fn all_variants_default() -> Element {
    Element::div().class("flex flex-col gap-4").child(variant_row())
}

fn as_child() -> Element {
    let external = |label: &str| {
        Element::anchor("https://example.com")
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .text_content(label)
    };
    row()
        .child(Button::new().as_child(external("Link as Button")).build())
        .child(
            Button::new()
                .variant(Variant::Outline)
                .as_child(external("Link as Outline Button"))
                .build(),
        )
}
